//! Image file output.

use crate::error::RenderResult;
use crate::Color;
use image::error::{ParameterError, ParameterErrorKind};
use image::{ImageError, Rgba, RgbaImage};
use std::path::Path;

/// Serializes packed `0xAARRGGBB` pixels to a file.
pub trait ImageWriter {
    fn write(&self, path: &Path, pixels: &[u32], width: u32, height: u32) -> RenderResult<()>;
}

/// Writes 8-bit RGBA images with the `image` crate.
///
/// The format is picked from the file extension (`.tga`, `.png`, `.bmp`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageFileWriter;

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, pixels: &[u32], width: u32, height: u32) -> RenderResult<()> {
        let image = to_rgba_image(pixels, width, height)?;
        image.save(path)?;
        log::info!("Image saved as {}", path.display());
        Ok(())
    }
}

/// Unpack framebuffer pixels into an RGBA image.
pub fn to_rgba_image(pixels: &[u32], width: u32, height: u32) -> RenderResult<RgbaImage> {
    if pixels.len() != width as usize * height as usize {
        return Err(ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        ))
        .into());
    }

    Ok(RgbaImage::from_fn(width, height, |x, y| {
        Rgba(Color::from_hex(pixels[(y * width + x) as usize]).to_rgba())
    }))
}
