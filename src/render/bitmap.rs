// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! Bitmap is the owned pixel buffer everything else is built from.
//! A bitmap comprises a pixel vector with width * height elements,
//! stored row by row (index = y * width + x).
//!
//! crop, scale and flip always return a fresh Bitmap; no two bitmaps
//! share a backing buffer.
//!
//! Scaling is nearest-neighbor only, so pixel-art edges stay crisp:
//! ```
//! use retro_pixel::render::{Bitmap, Pixel};
//! let bmp = Bitmap::filled(2, 2, Pixel::RED);
//! let big = bmp.scale(8, 8).unwrap();
//! assert_eq!(big.get_pixel(7, 7), Some(Pixel::RED));
//! ```

use crate::{
    error::{invalid, out_of_bounds, Result},
    render::color::Pixel,
    util::Rect,
};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Flip: u8 {
        /// mirror column order
        const HORIZONTAL = 0b0000_0001;
        /// mirror row order
        const VERTICAL   = 0b0000_0010;
    }
}

/// Anything that can hand out a sub-rectangle copy of itself.
pub trait Croppable {
    type Output;
    fn crop_rect(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Self::Output>;
}

/// Anything the RenderContext can blit: it only needs a bitmap to read from.
pub trait Drawable {
    fn bitmap(&self) -> &Bitmap;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Bitmap {
    /// Fully transparent bitmap.
    pub fn new(width: u32, height: u32) -> Bitmap {
        Bitmap::filled(width, height, Pixel::TRANSPARENT)
    }

    pub fn filled(width: u32, height: u32, color: Pixel) -> Bitmap {
        Bitmap {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Bitmap> {
        let expect = width as usize * height as usize;
        if pixels.len() != expect {
            return invalid(format!(
                "{}x{} bitmap needs {} pixels, got {}",
                width,
                height,
                expect,
                pixels.len()
            ));
        }
        Ok(Bitmap {
            width,
            height,
            pixels,
        })
    }

    /// Builds a bitmap from tightly packed RGBA bytes (what decoders emit).
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Bitmap> {
        let expect = width as usize * height as usize * 4;
        if data.len() != expect {
            return invalid(format!(
                "{}x{} rgba data needs {} bytes, got {}",
                width,
                height,
                expect,
                data.len()
            ));
        }
        let pixels = data
            .chunks_exact(4)
            .map(|c| Pixel::rgba(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Bitmap {
            width,
            height,
            pixels,
        })
    }

    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut dat = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            dat.extend_from_slice(&p.to_rgba8());
        }
        dat
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "Trying to access position outside the bitmap: x={}, y={}, size={}x{}",
            x,
            y,
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index_of(x, y)])
        } else {
            None
        }
    }

    /// Overwrites one pixel, no blending. Returns false when out of range.
    pub fn set_pixel(&mut self, x: u32, y: u32, p: Pixel) -> bool {
        if x < self.width && y < self.height {
            let i = self.index_of(x, y);
            self.pixels[i] = p;
            true
        } else {
            false
        }
    }

    fn check_region(&self, x: u32, y: u32, w: u32, h: u32) -> Result<()> {
        let inside = (x as u64 + w as u64) <= self.width as u64
            && (y as u64 + h as u64) <= self.height as u64;
        if !inside {
            return out_of_bounds(format!(
                "region ({}, {}, {}x{}) outside {}x{} bitmap",
                x, y, w, h, self.width, self.height
            ));
        }
        Ok(())
    }

    /// Copies the pixels of a sub-rectangle, row by row.
    pub fn get_data(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Vec<Pixel>> {
        self.check_region(x, y, w, h)?;
        let mut dat = Vec::with_capacity(w as usize * h as usize);
        for row in y..y + h {
            let start = self.index_of(0, row) + x as usize;
            dat.extend_from_slice(&self.pixels[start..start + w as usize]);
        }
        Ok(dat)
    }

    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Bitmap> {
        let pixels = self.get_data(x, y, w, h)?;
        Ok(Bitmap {
            width: w,
            height: h,
            pixels,
        })
    }

    /// Nearest-neighbor resample: destination (dx, dy) reads source
    /// (dx * width / new_w, dy * height / new_h).
    pub fn scale(&self, new_w: u32, new_h: u32) -> Result<Bitmap> {
        if new_w == self.width && new_h == self.height {
            return Ok(self.clone());
        }
        if new_w == 0 || new_h == 0 {
            return invalid(format!("scale target {}x{} has a zero side", new_w, new_h));
        }
        if self.pixels.is_empty() {
            return invalid("cannot scale an empty bitmap");
        }
        let mut pixels = Vec::with_capacity(new_w as usize * new_h as usize);
        for dy in 0..new_h as u64 {
            let sy = (dy * self.height as u64 / new_h as u64) as u32;
            for dx in 0..new_w as u64 {
                let sx = (dx * self.width as u64 / new_w as u64) as u32;
                pixels.push(self.pixels[self.index_of(sx, sy)]);
            }
        }
        Ok(Bitmap {
            width: new_w,
            height: new_h,
            pixels,
        })
    }

    pub fn flip(&self, mode: Flip) -> Bitmap {
        let (w, h) = (self.width, self.height);
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for y in 0..h {
            let sy = if mode.contains(Flip::VERTICAL) { h - 1 - y } else { y };
            for x in 0..w {
                let sx = if mode.contains(Flip::HORIZONTAL) { w - 1 - x } else { x };
                pixels.push(self.pixels[self.index_of(sx, sy)]);
            }
        }
        Bitmap {
            width: w,
            height: h,
            pixels,
        }
    }

    /// Tightest rectangle holding every pixel with non-zero alpha.
    /// None for a fully transparent bitmap.
    pub fn opaque_bounds(&self) -> Option<Rect> {
        let (mut x1, mut y1, mut x2, mut y2) = (u32::MAX, u32::MAX, 0, 0);
        let mut found = false;
        for row in 0..self.height {
            for col in 0..self.width {
                if self.pixels[self.index_of(col, row)].a() != 0 {
                    found = true;
                    x1 = x1.min(col);
                    x2 = x2.max(col);
                    y1 = y1.min(row);
                    y2 = y2.max(row);
                }
            }
        }
        if !found {
            return None;
        }
        Some(Rect::new(x1 as i32, y1 as i32, x2 - x1 + 1, y2 - y1 + 1))
    }
}

impl Croppable for Bitmap {
    type Output = Bitmap;
    fn crop_rect(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Bitmap> {
        self.crop(x, y, w, h)
    }
}

impl Drawable for Bitmap {
    fn bitmap(&self) -> &Bitmap {
        self
    }
}
