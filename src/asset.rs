// RetroPixel
// copyright zipxing@hotmail.com 2022～2025

//! Asset bridge: decodes image files into Bitmaps via the image crate.
//! Only compiled with the `image` feature; the render core itself never
//! touches file formats and works on decoded pixels only.

use crate::{
    error::{PixelError, Result},
    render::{bitmap::Bitmap, color::Pixel},
};
use image::RgbaImage;
use log::info;

impl From<&RgbaImage> for Bitmap {
    fn from(img: &RgbaImage) -> Bitmap {
        let mut bmp = Bitmap::new(img.width(), img.height());
        for (x, y, p) in img.enumerate_pixels() {
            bmp.set_pixel(x, y, Pixel::from_rgba8(p.0));
        }
        bmp
    }
}

impl From<&Bitmap> for RgbaImage {
    fn from(bmp: &Bitmap) -> RgbaImage {
        RgbaImage::from_fn(bmp.width(), bmp.height(), |x, y| {
            image::Rgba(bmp.get_pixel(x, y).unwrap_or_default().to_rgba8())
        })
    }
}

/// Reads and decodes an image file (any format the image crate was built
/// with) into a Bitmap.
pub fn load_bitmap(path: &str) -> Result<Bitmap> {
    let img = image::open(path).map_err(|e| PixelError::Io(format!("{}: {}", path, e)))?;
    let rgba = img.to_rgba8();
    info!("asset load:{:?} {}x{}", path, rgba.width(), rgba.height());
    Ok(Bitmap::from(&rgba))
}

pub fn save_png(bmp: &Bitmap, path: &str) -> Result<()> {
    RgbaImage::from(bmp)
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| PixelError::Io(format!("{}: {}", path, e)))
}
