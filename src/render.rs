// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render module
//!
//! Software compositing: everything is drawn on the CPU into an ARGB
//! framebuffer owned by `RenderContext`.
//!
//! ## Submodules
//! - `color`: packed ARGB Pixel and the `over` blend
//! - `bitmap`: owned pixel buffer with crop / scale / flip
//! - `sprite`: Sprite (bitmap + pixel-perfect bounds) and Spritesheet slicing
//! - `animation`: timed frame sequences with forward / reverse / ping-pong playback
//! - `font`: bitmap fonts built from spritesheet cells
//! - `adapter`: presentation surface interface

pub mod adapter;
pub mod animation;
pub mod bitmap;
pub mod color;
pub mod font;
pub mod sprite;

pub use adapter::{Adapter, MemoryAdapter};
pub use animation::{Animation, AnimationFrame, PlayState};
pub use bitmap::{Bitmap, Croppable, Drawable, Flip};
pub use color::{over, Pixel};
pub use font::{BitmapFont, FontLayout, Glyph, GlyphDef};
pub use sprite::{Orientation, SheetLayout, Sprite, Spritesheet};
