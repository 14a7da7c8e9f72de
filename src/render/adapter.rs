// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Render Adapter Module
//!
//! An Adapter is the presentation surface: it receives the finished frame
//! once per tick and moves it wherever it has to go (window, canvas,
//! texture upload, file). The render core never depends on a concrete one.
//!
//! ```text
//!  Animation::advance ─► RenderContext (clear/blit/text) ─► FrameView ─► Adapter::present
//! ```
//!
//! The FrameView borrow ends when `present` returns, so an adapter that
//! needs the pixels later must copy them (e.g. `FrameView::to_rgba8`).

use crate::{context::FrameView, error::Result};

pub trait Adapter {
    /// Present one finished frame.
    fn present(&mut self, frame: FrameView<'_>) -> Result<()>;
}

/// Keeps a copy of the most recent frame. Useful for headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryAdapter {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
    pub frames: u64,
}

impl Adapter for MemoryAdapter {
    fn present(&mut self, frame: FrameView<'_>) -> Result<()> {
        self.width = frame.width();
        self.height = frame.height();
        self.rgba = frame.to_rgba8();
        self.frames += 1;
        Ok(())
    }
}

/// Writes every presented frame as `{prefix}{frame:05}.png`.
#[cfg(feature = "image")]
pub struct PngAdapter {
    prefix: String,
    frames: u64,
}

#[cfg(feature = "image")]
impl PngAdapter {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            frames: 0,
        }
    }
}

#[cfg(feature = "image")]
impl Adapter for PngAdapter {
    fn present(&mut self, frame: FrameView<'_>) -> Result<()> {
        use crate::error::PixelError;
        let path = format!("{}{:05}.png", self.prefix, self.frames);
        let img = image::RgbaImage::from_raw(frame.width(), frame.height(), frame.to_rgba8())
            .ok_or_else(|| PixelError::InvalidArgument("frame size mismatch".to_string()))?;
        img.save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| PixelError::Io(format!("{}: {}", path, e)))?;
        log::debug!("frame {} saved to {}", self.frames, path);
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{context::RenderContext, render::color::Pixel};

    #[test]
    fn memory_adapter_copies_frame() {
        let mut ctx = RenderContext::new(2, 1).unwrap();
        ctx.blit_pixel(1, 0, Pixel::RED);
        let mut ad = MemoryAdapter::default();
        ad.present(ctx.framebuffer()).unwrap();
        assert_eq!((ad.width, ad.height, ad.frames), (2, 1, 1));
        assert_eq!(ad.rgba, vec![0, 0, 0, 255, 255, 0, 0, 255]);
    }
}
