// SPDX-License-Identifier: MPL-2.0
//! Decoded raster images ready for display.

use crate::error::{Error, Result};
use iced::widget::image;

/// A decoded image and its pixel size.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Wraps raw RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Memory held by the decoded pixels (RGBA, 4 bytes per pixel).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Decodes an encoded image (JPEG, PNG, WebP) into RGBA pixels.
///
/// # Errors
///
/// Returns [`Error::Image`] if the format is unknown or the data is corrupt.
pub fn decode_image(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes).map_err(Error::from)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decodes_png_dimensions() {
        let data = decode_image(&encoded_png(6, 4)).expect("decode");
        assert_eq!((data.width, data.height), (6, 4));
        assert_eq!(data.size_bytes(), 6 * 4 * 4);
    }

    #[test]
    fn garbage_is_image_error() {
        let err = decode_image(b"definitely not an image").expect_err("must fail");
        assert!(matches!(err, Error::Image(_)));
    }
}
