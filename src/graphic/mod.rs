// SPDX-License-Identifier: MPL-2.0
//! Renderable gallery items with an explicit, size-keyed render cache.
//!
//! A [`Graphic`] wraps either an image file or a caption (a text string plus
//! the font file to draw it with). Rendering is lazy: the first call decodes
//! or rasterizes at the current target size and caches the bitmap; repeat
//! calls at an unchanged size return the cached bitmap. Mutating the caption
//! text or the target size invalidates the cache only when the new value
//! actually differs.

pub mod image;
pub mod text;

pub use image::ImageData;

use crate::config::{DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Pixel dimensions a render is produced at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_WIDTH, DEFAULT_TARGET_HEIGHT)
    }
}

/// What a graphic renders from.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphicSource {
    /// An image file decoded from disk.
    Image { path: PathBuf },
    /// A text string rasterized in the font at `font_path`.
    Caption { font_path: PathBuf, text: String },
}

#[derive(Debug, Clone)]
struct CachedRender {
    size: TargetSize,
    data: ImageData,
}

/// One renderable unit producing a bitmap from an image file or rasterized
/// caption text.
#[derive(Debug, Clone)]
pub struct Graphic {
    source: GraphicSource,
    target_size: TargetSize,
    cache: Option<CachedRender>,
}

impl Graphic {
    /// Creates a graphic backed by an image file.
    pub fn from_image_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: GraphicSource::Image { path: path.into() },
            target_size: TargetSize::default(),
            cache: None,
        }
    }

    /// Creates a graphic that renders `text` in the font at `font_path`.
    pub fn caption(font_path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            source: GraphicSource::Caption {
                font_path: font_path.into(),
                text: text.into(),
            },
            target_size: TargetSize::default(),
            cache: None,
        }
    }

    /// Returns the file name of the backing image or font file.
    pub fn file_name(&self) -> Option<&str> {
        let path = match &self.source {
            GraphicSource::Image { path } => path,
            GraphicSource::Caption { font_path, .. } => font_path,
        };
        path.file_name().and_then(|n| n.to_str())
    }

    /// Returns the caption text, if this is a caption graphic.
    pub fn text(&self) -> Option<&str> {
        match &self.source {
            GraphicSource::Caption { text, .. } => Some(text),
            GraphicSource::Image { .. } => None,
        }
    }

    pub fn target_size(&self) -> TargetSize {
        self.target_size
    }

    /// Whether a render is currently cached for the target size.
    pub fn has_cached_render(&self) -> bool {
        matches!(&self.cache, Some(c) if c.size == self.target_size)
    }

    /// Replaces the caption text, dropping the cached render only if the
    /// text actually changed. Ignored for image graphics.
    pub fn set_text(&mut self, text: &str) {
        if let GraphicSource::Caption { text: current, .. } = &mut self.source {
            if current != text {
                *current = text.to_string();
                self.cache = None;
            }
        }
    }

    /// Replaces the target size, dropping the cached render only if the
    /// size actually changed.
    pub fn set_target_size(&mut self, size: TargetSize) {
        if self.target_size != size {
            self.target_size = size;
            self.cache = None;
        }
    }

    /// Renders this graphic, reusing the cached bitmap when the target size
    /// is unchanged.
    ///
    /// Passing `Some(size)` is equivalent to calling
    /// [`set_target_size`](Self::set_target_size) first.
    ///
    /// # Errors
    ///
    /// Propagates decode and rasterization failures; the cache stays empty
    /// so a later call retries.
    pub fn render(&mut self, size: Option<TargetSize>) -> Result<&ImageData> {
        if let Some(size) = size {
            self.set_target_size(size);
        }

        if self.target_size.width == 0 || self.target_size.height == 0 {
            return Err(Error::Io("render target has empty dimensions".into()));
        }

        if !self.has_cached_render() {
            let data = match &self.source {
                GraphicSource::Image { path } => image::decode_image(path, self.target_size)?,
                GraphicSource::Caption { font_path, text } => {
                    text::rasterize_caption(font_path, text, self.target_size)?
                }
            };
            self.cache = Some(CachedRender {
                size: self.target_size,
                data,
            });
        }

        Ok(&self.cache.as_ref().expect("cache populated above").data)
    }
}

/// Builds a graphic for a catalog asset: images render themselves, fonts
/// render the supplied caption.
pub fn for_asset(path: &Path, caption: Option<&str>) -> Graphic {
    match caption {
        Some(text) => Graphic::caption(path, text),
        None => Graphic::from_image_file(path),
    }
}
