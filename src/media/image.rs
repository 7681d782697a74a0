// SPDX-License-Identifier: MPL-2.0
//! Image format detection and pixel dimensions.
//!
//! Only the header is decoded: the extractor never needs pixel data.

use crate::domain::metadata::ImageSize;
use image_rs::error::{ImageFormatHint, UnsupportedError};
use image_rs::{ImageError, ImageFormat, ImageReader};
use std::io::Cursor;

/// What the decoder learned about an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageProbe {
    pub format: ImageFormat,
    pub size: ImageSize,
}

impl ImageProbe {
    /// Upper-case format name, e.g. `JPEG`, `PNG`.
    #[must_use]
    pub fn format_name(&self) -> String {
        format_name(self.format)
    }

    /// Returns `true` for the formats whose EXIF directory is read.
    #[must_use]
    pub fn supports_exif(&self) -> bool {
        matches!(self.format, ImageFormat::Jpeg | ImageFormat::Tiff)
    }
}

/// Upper-case display name for a decoder format.
#[must_use]
pub fn format_name(format: ImageFormat) -> String {
    match format {
        ImageFormat::Jpeg => "JPEG".to_string(),
        ImageFormat::Png => "PNG".to_string(),
        ImageFormat::Gif => "GIF".to_string(),
        ImageFormat::WebP => "WEBP".to_string(),
        ImageFormat::Tiff => "TIFF".to_string(),
        ImageFormat::Bmp => "BMP".to_string(),
        ImageFormat::Ico => "ICO".to_string(),
        other => format!("{other:?}").to_uppercase(),
    }
}

/// Detects the format of `bytes` from their content and reads the dimensions.
///
/// # Errors
///
/// Returns [`ImageError::Unsupported`] if the content matches no known format,
/// or the decoder's error if the header is malformed.
pub fn probe_image(bytes: &[u8]) -> Result<ImageProbe, ImageError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader
        .format()
        .ok_or_else(|| ImageError::Unsupported(UnsupportedError::from(ImageFormatHint::Unknown)))?;

    let (width, height) = reader.into_dimensions()?;

    Ok(ImageProbe {
        format,
        size: ImageSize::new(width, height),
    })
}
