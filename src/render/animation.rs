// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! Frame animation: an ordered list of (bitmap, duration) frames plus a
//! small playback state machine.
//!
//! Time is never read from the system clock. Callers pass a logical
//! millisecond timestamp (see `FrameClock`) to `start`, `restart` and
//! `advance`, which keeps playback deterministic and testable.
//!
//! ```
//! use retro_pixel::render::{Animation, AnimationFrame, Bitmap, Pixel};
//! use std::rc::Rc;
//! let frames = vec![
//!     AnimationFrame::new(Rc::new(Bitmap::filled(1, 1, Pixel::RED)), 100).unwrap(),
//!     AnimationFrame::new(Rc::new(Bitmap::filled(1, 1, Pixel::BLUE)), 100).unwrap(),
//! ];
//! let mut anim = Animation::new("blink", frames).unwrap();
//! anim.start(0);
//! anim.advance(100);
//! assert_eq!(anim.current_index(), 1);
//! ```

use crate::{
    error::{invalid, Result},
    render::bitmap::{Bitmap, Drawable},
};
use log::debug;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrame {
    bitmap: Rc<Bitmap>,
    duration_ms: u32,
}

impl AnimationFrame {
    pub fn new(bitmap: Rc<Bitmap>, duration_ms: u32) -> Result<AnimationFrame> {
        if duration_ms == 0 {
            return invalid("frame duration must be positive");
        }
        Ok(AnimationFrame {
            bitmap,
            duration_ms,
        })
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    Stopped,
    Playing,
}

#[derive(Debug, Clone)]
pub struct Animation {
    name: String,
    frames: Vec<AnimationFrame>,
    speed: f32,
    looping: bool,
    ping_pong: bool,
    reverse: bool,
    current: usize,
    last_transition_ms: i64,
    state: PlayState,
}

impl Drawable for Animation {
    fn bitmap(&self) -> &Bitmap {
        self.current_frame()
    }
}

impl Animation {
    /// New animations loop forward at authored speed and start Stopped.
    pub fn new(name: &str, frames: Vec<AnimationFrame>) -> Result<Animation> {
        if frames.is_empty() {
            return invalid(format!("animation '{}' has no frames", name));
        }
        Ok(Animation {
            name: name.to_string(),
            frames,
            speed: 1.0,
            looping: true,
            ping_pong: false,
            reverse: false,
            current: 0,
            last_transition_ms: 0,
            state: PlayState::Stopped,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always false: an animation holds at least one frame.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, idx: usize) -> Option<&AnimationFrame> {
        self.frames.get(idx)
    }

    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Sum of authored frame durations, ignoring speed.
    pub fn total_duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| f.duration_ms as u64).sum()
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// 1.0 plays at authored speed, 2.0 twice as fast, 0.5 at half speed.
    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        if !(speed.is_finite() && speed > 0.0) {
            return invalid(format!("animation '{}': speed {} must be > 0", self.name, speed));
        }
        self.speed = speed;
        Ok(())
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn set_looping(&mut self, flag: bool) {
        self.looping = flag;
    }

    pub fn is_ping_pong(&self) -> bool {
        self.ping_pong
    }

    pub fn set_ping_pong(&mut self, flag: bool) {
        self.ping_pong = flag;
    }

    pub fn is_reverse(&self) -> bool {
        self.reverse
    }

    pub fn set_reverse(&mut self, flag: bool) {
        self.reverse = flag;
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_frame(&self) -> &Bitmap {
        self.frames[self.current].bitmap()
    }

    fn first_index(&self) -> usize {
        if self.reverse {
            self.frames.len() - 1
        } else {
            0
        }
    }

    /// Stopped -> Playing. Does nothing while already playing.
    pub fn start(&mut self, now_ms: i64) {
        if self.state == PlayState::Playing {
            return;
        }
        self.restart(now_ms);
    }

    pub fn restart(&mut self, now_ms: i64) {
        self.current = self.first_index();
        self.last_transition_ms = now_ms;
        self.state = PlayState::Playing;
        debug!("animation '{}' playing from frame {}", self.name, self.current);
    }

    /// Freezes playback; the current frame is kept.
    pub fn stop(&mut self) {
        if self.state == PlayState::Playing {
            self.state = PlayState::Stopped;
            debug!("animation '{}' stopped at frame {}", self.name, self.current);
        }
    }

    /// Moves at most one frame per call once the current frame is due.
    pub fn advance(&mut self, now_ms: i64) {
        if self.state != PlayState::Playing {
            return;
        }
        let elapsed = now_ms.saturating_sub(self.last_transition_ms);
        let due = self.frames[self.current].duration_ms as f64 / self.speed as f64;
        if (elapsed as f64) < due {
            return;
        }

        let n = self.frames.len() as i64;
        let step = if self.reverse { -1 } else { 1 };
        let mut next = self.current as i64 + step;
        if next < 0 || next >= n {
            if self.ping_pong {
                // turn around and take one step away from the boundary
                self.reverse = !self.reverse;
                next = if next >= n { n - 2 } else { 1 };
                next = next.clamp(0, n - 1);
            } else if self.looping {
                next = if next >= n { 0 } else { n - 1 };
            } else {
                next = next.clamp(0, n - 1);
                self.state = PlayState::Stopped;
                debug!("animation '{}' finished at frame {}", self.name, next);
            }
        }
        self.current = next as usize;
        self.last_transition_ms = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::Pixel;

    fn anim(durations: &[u32]) -> Animation {
        let frames = durations
            .iter()
            .enumerate()
            .map(|(i, &d)| {
                let bmp = Bitmap::filled(1, 1, Pixel::rgba(i as u8, 0, 0, 255));
                AnimationFrame::new(Rc::new(bmp), d).unwrap()
            })
            .collect();
        Animation::new("test", frames).unwrap()
    }

    #[test]
    fn new_requires_frames() {
        assert!(Animation::new("empty", vec![]).is_err());
    }

    #[test]
    fn advance_is_ignored_until_started() {
        let mut a = anim(&[10, 10]);
        a.advance(1000);
        assert_eq!(a.current_index(), 0);
        assert_eq!(a.state(), PlayState::Stopped);
    }

    #[test]
    fn reverse_starts_at_last_frame() {
        let mut a = anim(&[10, 10, 10]);
        a.set_reverse(true);
        a.start(0);
        assert_eq!(a.current_index(), 2);
        a.advance(10);
        assert_eq!(a.current_index(), 1);
    }

    #[test]
    fn reverse_loop_wraps_to_last() {
        let mut a = anim(&[10, 10, 10]);
        a.set_reverse(true);
        a.start(0);
        a.advance(10);
        a.advance(20);
        assert_eq!(a.current_index(), 0);
        a.advance(30);
        assert_eq!(a.current_index(), 2);
    }

    #[test]
    fn one_shot_clamps_and_stops() {
        let mut a = anim(&[10, 10]);
        a.set_looping(false);
        a.start(0);
        a.advance(10);
        a.advance(20);
        assert_eq!(a.current_index(), 1);
        assert!(!a.is_playing());
        a.advance(1000);
        assert_eq!(a.current_index(), 1);
    }

    #[test]
    fn stop_keeps_index_and_start_resets() {
        let mut a = anim(&[10, 10, 10]);
        a.start(0);
        a.advance(10);
        a.stop();
        assert_eq!(a.current_index(), 1);
        a.advance(100);
        assert_eq!(a.current_index(), 1);
        a.start(100);
        assert_eq!(a.current_index(), 0);
    }

    #[test]
    fn start_while_playing_is_noop() {
        let mut a = anim(&[10, 10, 10]);
        a.start(0);
        a.advance(10);
        a.start(15);
        assert_eq!(a.current_index(), 1);
        a.restart(15);
        assert_eq!(a.current_index(), 0);
    }

    #[test]
    fn speed_scales_frame_duration() {
        let mut a = anim(&[100, 100]);
        assert!(a.set_speed(0.0).is_err());
        assert!(a.set_speed(-1.0).is_err());
        assert!(a.set_speed(f32::NAN).is_err());
        a.set_speed(2.0).unwrap();
        a.start(0);
        a.advance(49);
        assert_eq!(a.current_index(), 0);
        a.advance(50);
        assert_eq!(a.current_index(), 1);

        let mut slow = anim(&[100, 100]);
        slow.set_speed(0.5).unwrap();
        slow.start(0);
        slow.advance(199);
        assert_eq!(slow.current_index(), 0);
        slow.advance(200);
        assert_eq!(slow.current_index(), 1);
    }

    #[test]
    fn extreme_timestamps_saturate() {
        let mut a = anim(&[10, 10]);
        a.start(i64::MIN);
        a.advance(i64::MAX);
        assert_eq!(a.current_index(), 1);
        a.advance(i64::MIN);
        assert_eq!(a.current_index(), 1);
    }

    #[test]
    fn single_frame_ping_pong_stays_put() {
        let mut a = anim(&[10]);
        a.set_ping_pong(true);
        a.start(0);
        for t in 1..10 {
            a.advance(t * 10);
            assert_eq!(a.current_index(), 0);
        }
    }

    #[test]
    fn current_frame_does_not_advance() {
        let mut a = anim(&[10, 10]);
        a.start(0);
        for _ in 0..5 {
            assert_eq!(a.current_frame().get_pixel(0, 0), Some(Pixel::rgba(0, 0, 0, 255)));
        }
        assert_eq!(a.total_duration_ms(), 20);
    }
}
