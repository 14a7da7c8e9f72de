// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! Packed ARGB pixels and the source-over blend.
//!
//! A Pixel stores four 8-bit channels in one u32 as 0xAARRGGBB.
//! `over` is the only compositing primitive in the engine; alpha, tint and
//! scale effects of a draw call are all expressed as transformations of the
//! source pixel before it reaches `over`.

use crate::error::{invalid, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pixel(pub u32);

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel(0x0000_0000);
    pub const BLACK: Pixel = Pixel(0xFF00_0000);
    pub const WHITE: Pixel = Pixel(0xFFFF_FFFF);
    pub const RED: Pixel = Pixel(0xFFFF_0000);
    pub const GREEN: Pixel = Pixel(0xFF00_FF00);
    pub const BLUE: Pixel = Pixel(0xFF00_00FF);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Pixel {
        Pixel((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Pixel {
        Pixel::rgba(r, g, b, 255)
    }

    /// Packs channels coming from untyped sources (scripts, config, math).
    /// Every channel must lie in 0..=255.
    pub fn pack(r: i32, g: i32, b: i32, a: i32) -> Result<Pixel> {
        let chk = |name: &str, v: i32| -> Result<u8> {
            match u8::try_from(v) {
                Ok(c) => Ok(c),
                Err(_) => invalid(format!("channel {}={} not in 0..=255", name, v)),
            }
        };
        Ok(Pixel::rgba(
            chk("r", r)?,
            chk("g", g)?,
            chk("b", b)?,
            chk("a", a)?,
        ))
    }

    /// Returns (r, g, b, a).
    pub const fn unpack(self) -> (u8, u8, u8, u8) {
        (self.r(), self.g(), self.b(), self.a())
    }

    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    pub const fn with_alpha(self, a: u8) -> Pixel {
        Pixel((self.0 & 0x00FF_FFFF) | (a as u32) << 24)
    }

    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    /// RGBA byte order, as most surfaces and image codecs expect.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }

    pub const fn from_rgba8(c: [u8; 4]) -> Pixel {
        Pixel::rgba(c[0], c[1], c[2], c[3])
    }
}

impl From<u32> for Pixel {
    fn from(v: u32) -> Pixel {
        Pixel(v)
    }
}

impl From<Pixel> for u32 {
    fn from(p: Pixel) -> u32 {
        p.0
    }
}

#[inline]
fn mix(s: u8, d: u8, sa: u32) -> u8 {
    (s as u32 * sa / 255 + d as u32 * (255 - sa) / 255) as u8
}

/// Source-over: composites `src` onto `dst` using only src's alpha.
/// The destination is treated as opaque, so the result always has alpha 255.
#[inline]
pub fn over(dst: Pixel, src: Pixel) -> Pixel {
    let sa = src.a() as u32;
    Pixel::rgba(
        mix(src.r(), dst.r(), sa),
        mix(src.g(), dst.g(), sa),
        mix(src.b(), dst.b(), sa),
        255,
    )
}
