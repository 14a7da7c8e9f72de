// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! RenderContext owns the framebuffer every draw call composites into.
//!
//! All drawing goes through one rule set:
//! - destination rectangles are clipped to the framebuffer, anything outside
//!   is dropped silently (clipping is never an error);
//! - transparent source pixels (alpha 0) are skipped;
//! - everything else is blended with `over`, and the framebuffer stays opaque.
//!
//! The presentation layer reads the result once per frame through the
//! borrowed, read-only `FrameView` returned by `framebuffer()`.
//!
//! The active font is injected with `set_font`; there is no process-wide
//! default font.

use crate::{
    config::RenderConfig,
    error::{invalid, Result},
    render::{
        bitmap::{Bitmap, Drawable},
        color::{over, Pixel},
        font::BitmapFont,
    },
    util::Rect,
};
use log::{info, warn};
use std::rc::Rc;

/// Per-call draw parameters. Setters validate, so a BlitOptions value is
/// always usable and `blit_with` itself cannot fail mid-frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlitOptions {
    alpha: f32,
    tint: Option<Pixel>,
    scale: f32,
}

impl Default for BlitOptions {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            tint: None,
            scale: 1.0,
        }
    }
}

impl BlitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global opacity in 0.0..=1.0.
    pub fn with_alpha(mut self, alpha: f32) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return invalid(format!("alpha {} not in 0.0..=1.0", alpha));
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Color composited over every drawn pixel, strength given by its alpha.
    pub fn with_tint(mut self, tint: Pixel) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Nearest-neighbor scale factor applied before drawing.
    pub fn with_scale(mut self, scale: f32) -> Result<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return invalid(format!("scale {} must be > 0", scale));
        }
        self.scale = scale;
        Ok(self)
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn tint(&self) -> Option<Pixel> {
        self.tint
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Read-only view of a finished frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    width: u32,
    height: u32,
    pixels: &'a [Pixel],
}

impl<'a> FrameView<'a> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &'a [Pixel] {
        self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Copies the frame out as RGBA bytes, the layout most surfaces take.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut dat = Vec::with_capacity(self.pixels.len() * 4);
        for p in self.pixels {
            dat.extend_from_slice(&p.to_rgba8());
        }
        dat
    }
}

pub struct RenderContext {
    width: u32,
    height: u32,
    framebuffer: Vec<Pixel>,
    clear_color: Pixel,
    font: Option<Rc<BitmapFont>>,
}

impl RenderContext {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return invalid(format!("framebuffer size {}x{} must be positive", width, height));
        }
        info!("render context {}x{}", width, height);
        Ok(Self {
            width,
            height,
            framebuffer: vec![Pixel::BLACK; width as usize * height as usize],
            clear_color: Pixel::BLACK,
            font: None,
        })
    }

    pub fn from_config(cfg: &RenderConfig) -> Result<Self> {
        cfg.validate()?;
        let mut ctx = Self::new(cfg.width, cfg.height)?;
        ctx.set_clear_color(cfg.clear_color);
        ctx.clear();
        Ok(ctx)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn clear_color(&self) -> Pixel {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Pixel) {
        self.clear_color = color;
    }

    pub fn font(&self) -> Option<&Rc<BitmapFont>> {
        self.font.as_ref()
    }

    pub fn set_font(&mut self, font: Option<Rc<BitmapFont>>) {
        self.font = font;
    }

    pub fn framebuffer(&self) -> FrameView<'_> {
        FrameView {
            width: self.width,
            height: self.height,
            pixels: &self.framebuffer,
        }
    }

    /// Overwrites every pixel with the clear color, no blending.
    pub fn clear(&mut self) {
        self.framebuffer.fill(self.clear_color);
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Shape rule: opaque overwrites, translucent blends, transparent is skipped.
    #[inline]
    fn put(&mut self, i: usize, color: Pixel) {
        match color.a() {
            255 => self.framebuffer[i] = color,
            0 => {}
            _ => self.framebuffer[i] = over(self.framebuffer[i], color),
        }
    }

    pub fn blit_pixel(&mut self, x: i32, y: i32, color: Pixel) {
        if self.bounds().contains(x, y) {
            let i = self.index(x as i64, y as i64);
            self.put(i, color);
        }
    }

    pub fn blit(&mut self, bitmap: &Bitmap, x: i32, y: i32) {
        self.blit_with(bitmap, x, y, &BlitOptions::default());
    }

    pub fn draw(&mut self, item: &dyn Drawable, x: i32, y: i32) {
        self.blit_with(item.bitmap(), x, y, &BlitOptions::default());
    }

    pub fn draw_with(&mut self, item: &dyn Drawable, x: i32, y: i32, opts: &BlitOptions) {
        self.blit_with(item.bitmap(), x, y, opts);
    }

    pub fn blit_with(&mut self, bitmap: &Bitmap, x: i32, y: i32, opts: &BlitOptions) {
        let (nw, nh) = if opts.scale == 1.0 {
            (bitmap.width(), bitmap.height())
        } else {
            (
                (bitmap.width() as f32 * opts.scale) as u32,
                (bitmap.height() as f32 * opts.scale) as u32,
            )
        };
        if nw == 0 || nh == 0 {
            return;
        }
        self.composite(bitmap, Rect::new(x, y, nw, nh), opts);
    }

    /// Draws `src` stretched onto `dst`. Only the visible part of `dst` is
    /// visited; each pixel reads its nearest source pixel, the same mapping
    /// as `Bitmap::scale`.
    /// Per pixel: source alpha blend, then tint, then global alpha.
    fn composite(&mut self, src: &Bitmap, dst: Rect, opts: &BlitOptions) {
        let clip = match dst.intersection(self.bounds()) {
            Some(r) => r,
            None => return,
        };
        let (sw, sh) = (src.width() as u64, src.height() as u64);
        let (dw, dh) = (dst.width as u64, dst.height as u64);
        let global_a = (opts.alpha * 255.0).round() as u8;
        let spx = src.pixels();
        for py in clip.top()..clip.bottom() {
            let sy = ((py - dst.top()) as u64 * sh / dh) as u32;
            for px in clip.left()..clip.right() {
                let sx = ((px - dst.left()) as u64 * sw / dw) as u32;
                let s = spx[src.index_of(sx, sy)];
                if s.a() == 0 {
                    continue;
                }
                let i = self.index(px, py);
                let under = self.framebuffer[i];
                let mut p = if s.a() < 255 { over(under, s) } else { s };
                if let Some(t) = opts.tint {
                    p = over(p, t);
                }
                if opts.alpha < 1.0 {
                    p = over(under, p.with_alpha(global_a));
                }
                self.framebuffer[i] = p.with_alpha(255);
            }
        }
    }

    fn shape(&mut self, x: i32, y: i32, w: u32, h: u32, color: Pixel, outline: bool) {
        if color.a() == 0 {
            return;
        }
        let clip = match Rect::new(x, y, w, h).intersection(self.bounds()) {
            Some(r) => r,
            None => return,
        };
        let (x0, x1, y0, y1) = (clip.left(), clip.right(), clip.top(), clip.bottom());
        for py in y0..y1 {
            for px in x0..x1 {
                if outline && !(px == x0 || px == x1 - 1 || py == y0 || py == y1 - 1) {
                    continue;
                }
                let i = self.index(px, py);
                self.put(i, color);
            }
        }
    }

    pub fn render_filled_rectangle(&mut self, x: i32, y: i32, w: u32, h: u32, color: Pixel) {
        self.shape(x, y, w, h, color, false);
    }

    /// Outline of the rectangle as clipped to the framebuffer.
    pub fn render_rectangle(&mut self, x: i32, y: i32, w: u32, h: u32, color: Pixel) {
        self.shape(x, y, w, h, color, true);
    }

    pub fn render_text(&mut self, text: &str, x: i32, y: i32, color: Pixel) {
        self.render_text_with(text, x, y, color, &BlitOptions::default());
    }

    /// Lays `text` out with the active font, left to right.
    /// Glyphs are tinted with `color`; unknown characters are skipped.
    pub fn render_text_with(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Pixel,
        opts: &BlitOptions,
    ) {
        let font = match self.font.clone() {
            Some(f) => f,
            None => {
                warn!("render_text without an active font: {:?}", text);
                return;
            }
        };
        let scale = opts.scale;
        let glyph_opts = opts.with_tint(color);
        let line_step = (font.line_height() as f32 * scale) as i32;
        let (mut cx, mut cy) = (x, y);
        for ch in text.chars() {
            match ch {
                '\n' => {
                    cx = x;
                    cy = cy.saturating_add(line_step);
                }
                ' ' => {
                    cx = cx.saturating_add((font.space_advance() as f32 * scale) as i32);
                }
                _ => {
                    if let Some(g) = font.glyph(ch) {
                        let sink = (g.sink as f32 * scale) as i32;
                        self.blit_with(g.sprite.bitmap(), cx, cy.saturating_add(sink), &glyph_opts);
                        cx = cx.saturating_add((g.advance as f32 * scale) as i32);
                    }
                }
            }
        }
    }
}
