// SPDX-License-Identifier: MPL-2.0
//! Image decoding for raster formats (PNG, JPEG, GIF, TIFF, BMP).

use super::TargetSize;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{imageops::FilterType, GenericImageView, ImageError};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A decoded RGBA bitmap plus the widget handle used to draw it.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes, kept in an Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }
}

/// Decode an image from the given path, downscaling to fit the target size.
///
/// Bitmaps already smaller than the target are left untouched; larger ones
/// are shrunk preserving aspect ratio so the gallery never holds full-size
/// photos in memory.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read or its contents are not
/// a decodable image.
pub fn decode_image<P: AsRef<Path>>(path: P, target: TargetSize) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;

    let img = image_rs::load_from_memory(&img_bytes).map_err(|e| Error::Io(e.to_string()))?;

    let (width, height) = img.dimensions();
    let img = if width > target.width || height > target.height {
        img.resize(target.width, target.height, FilterType::Lanczos3)
    } else {
        img
    };

    let (width, height) = img.dimensions();
    let rgba_img = img.to_rgba8();
    let pixels = rgba_img.into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Io(err.to_string())
    }
}
