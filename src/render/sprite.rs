// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! Sprite wraps a Bitmap with optional pixel-perfect bounds.
//! Sprites are normally produced by slicing a Spritesheet (see sheet.rs)
//! and are immutable afterwards; scale and flip hand out new sprites.
//!
//! Bounds are the tight rectangle of non-transparent pixels, in the
//! sprite's local coordinates, and are what collision shapes use.

use crate::{
    error::Result,
    render::bitmap::{Bitmap, Croppable, Drawable, Flip},
    util::Rect,
};
use std::ops::Deref;

mod sheet;
pub use sheet::{Orientation, SheetLayout, Spritesheet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    content: Bitmap,
    bounds: Option<Rect>,
}

/// Deref to Bitmap so read-only Bitmap methods (width, get_pixel,
/// get_data...) are available on Sprite without wrapping.
impl Deref for Sprite {
    type Target = Bitmap;
    fn deref(&self) -> &Bitmap {
        &self.content
    }
}

impl Drawable for Sprite {
    fn bitmap(&self) -> &Bitmap {
        &self.content
    }
}

impl Croppable for Sprite {
    type Output = Sprite;
    fn crop_rect(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Sprite> {
        let content = self.content.crop(x, y, w, h)?;
        Ok(match self.bounds {
            Some(_) => Sprite::pixel_perfect(content),
            None => Sprite::new(content),
        })
    }
}

impl From<Bitmap> for Sprite {
    fn from(content: Bitmap) -> Sprite {
        Sprite::new(content)
    }
}

impl Sprite {
    pub fn new(content: Bitmap) -> Self {
        Self {
            content,
            bounds: None,
        }
    }

    /// Computes bounds from the alpha channel once, at creation.
    /// A fully transparent bitmap gets the whole cell as its bounds.
    pub fn pixel_perfect(content: Bitmap) -> Self {
        let bounds = content.opaque_bounds().unwrap_or_else(|| content.rect());
        Self {
            content,
            bounds: Some(bounds),
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    pub fn into_bitmap(self) -> Bitmap {
        self.content
    }

    /// Scaled copy. Bounds, when present, are mapped onto the new size
    /// and rounded outwards so they still cover every opaque pixel.
    pub fn scale(&self, new_w: u32, new_h: u32) -> Result<Sprite> {
        let content = self.content.scale(new_w, new_h)?;
        let (w, h) = (self.content.width() as u64, self.content.height() as u64);
        let bounds = self.bounds.map(|b| {
            let (nw, nh) = (new_w as u64, new_h as u64);
            let x1 = b.x as u64 * nw / w;
            let y1 = b.y as u64 * nh / h;
            let x2 = (b.right() as u64 * nw).div_ceil(w);
            let y2 = (b.bottom() as u64 * nh).div_ceil(h);
            Rect::new(x1 as i32, y1 as i32, (x2 - x1) as u32, (y2 - y1) as u32)
        });
        Ok(Sprite { content, bounds })
    }

    pub fn flip(&self, mode: Flip) -> Sprite {
        let (w, h) = (self.content.width() as i32, self.content.height() as i32);
        let bounds = self.bounds.map(|mut b| {
            if mode.contains(Flip::HORIZONTAL) {
                b.x = w - b.x - b.width as i32;
            }
            if mode.contains(Flip::VERTICAL) {
                b.y = h - b.y - b.height as i32;
            }
            b
        });
        Sprite {
            content: self.content.flip(mode),
            bounds,
        }
    }
}
