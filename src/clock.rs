// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! FrameClock turns the game loop's per-tick `dt` (seconds, f32) into the
//! logical millisecond timestamp animations are driven with.
//!
//! The loop calls `tick(dt)` once per frame and passes `now_ms()` to every
//! `Animation::advance`, so playback only depends on the sequence of dt
//! values and never on wall-clock time.

use crate::GAME_FRAME;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    // kept in f64 seconds so sub-millisecond dt values are not lost
    elapsed: f64,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates one frame. Negative or non-finite dt is ignored.
    pub fn tick(&mut self, dt: f32) {
        if dt.is_finite() && dt >= 0.0 {
            self.elapsed += dt as f64;
        }
        self.frames += 1;
    }

    /// One frame at the engine's nominal rate (1 / GAME_FRAME s).
    pub fn tick_fixed(&mut self) {
        self.tick(1.0 / GAME_FRAME as f32);
    }

    pub fn now_ms(&self) -> i64 {
        (self.elapsed * 1000.0).round() as i64
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
