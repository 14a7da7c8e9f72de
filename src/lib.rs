// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! RetroPixel is the software rendering core of a retro-style 2D pixel game engine.
//!
//! It owns a framebuffer of packed ARGB pixels, composites bitmaps, shapes and
//! bitmap-font text into it with alpha blending and clipping, and plays
//! multi-frame sprite animations sliced from sprite sheets.
//!
//! Data flows one way:
//! decoded pixels → Bitmap → Spritesheet → Sprite / Animation →
//! RenderContext::blit → Adapter::present.
//!
//! Everything runs on the thread that drives the game loop. Once per tick the
//! loop advances its FrameClock, calls `Animation::advance(clock.now_ms())`
//! for active animations, draws, then hands `RenderContext::framebuffer()` to
//! the presentation adapter.
//!
//! ```
//! use retro_pixel::{context::RenderContext, render::{Bitmap, Pixel}};
//! let mut ctx = RenderContext::new(4, 4).unwrap();
//! ctx.clear();
//! ctx.blit(&Bitmap::filled(2, 2, Pixel::RED), 0, 0);
//! assert_eq!(ctx.framebuffer().pixel(1, 1), Some(Pixel::RED));
//! assert_eq!(ctx.framebuffer().pixel(2, 2), Some(Pixel::BLACK));
//! ```
//!
//! Modules: clock, config, context, error, log, render, util, plus asset
//! when the `image` feature is on.

/// frame rate the engine's game loop targets
pub const GAME_FRAME: u32 = 60;

#[cfg(feature = "image")]
pub mod asset;
pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod log;
pub mod render;
pub mod util;

pub use clock::FrameClock;
pub use config::RenderConfig;
pub use context::{BlitOptions, FrameView, RenderContext};
pub use error::{PixelError, Result};
