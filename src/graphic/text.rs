// SPDX-License-Identifier: MPL-2.0
//! Caption rasterization: renders a text string centered on a transparent
//! canvas, in a font loaded from a TTF/OTF file.
//!
//! The font size is chosen by a descending scan: starting from the largest
//! candidate, the first size whose measured bounding box fits within a fixed
//! fraction of the target in both dimensions wins. If nothing fits, the
//! caption renders at the floor size rather than failing.

use super::image::ImageData;
use super::TargetSize;
use crate::config::{
    CAPTION_FONT_PX_STEP, CAPTION_SCALE_FACTOR, MAX_CAPTION_FONT_PX, MIN_CAPTION_FONT_PX,
};
use crate::error::{Error, Result};
use std::path::Path;

/// Rasterizes `text` centered in `target`, black on transparent.
///
/// # Errors
///
/// Returns [`Error::Io`] if the font file cannot be read and [`Error::Font`]
/// if its contents cannot be parsed as a font.
pub fn rasterize_caption(font_path: &Path, text: &str, target: TargetSize) -> Result<ImageData> {
    let font_data = std::fs::read(font_path).map_err(|e| Error::Io(e.to_string()))?;
    let font = fontdue::Font::from_bytes(font_data, fontdue::FontSettings::default())
        .map_err(|e| Error::Font(format!("{}: {e}", font_path.display())))?;

    let px = fitting_font_px(&font, text, target);
    Ok(draw_centered(&font, text, px, target))
}

/// Returns the largest candidate font size whose measured box fits, or the
/// floor size when none do.
fn fitting_font_px(font: &fontdue::Font, text: &str, target: TargetSize) -> f32 {
    let mut px = MAX_CAPTION_FONT_PX;
    while px > MIN_CAPTION_FONT_PX && !caption_fits(font, text, px, target) {
        px -= CAPTION_FONT_PX_STEP;
    }
    px
}

/// Measures the caption at the given size: width from summed glyph advances,
/// height from the font's line metrics.
fn measure(font: &fontdue::Font, text: &str, px: f32) -> (f32, f32) {
    let width = text
        .chars()
        .map(|ch| font.metrics(ch, px).advance_width)
        .sum();
    let height = font
        .horizontal_line_metrics(px)
        .map(|m| m.ascent - m.descent)
        .unwrap_or(px);
    (width, height)
}

fn caption_fits(font: &fontdue::Font, text: &str, px: f32, target: TargetSize) -> bool {
    let (width, height) = measure(font, text, px);
    width <= CAPTION_SCALE_FACTOR * target.width as f32
        && height <= CAPTION_SCALE_FACTOR * target.height as f32
}

/// Composites glyph coverage bitmaps onto a transparent RGBA canvas, with the
/// text block centered both ways.
fn draw_centered(font: &fontdue::Font, text: &str, px: f32, target: TargetSize) -> ImageData {
    let canvas_w = target.width as usize;
    let canvas_h = target.height as usize;
    let mut pixels = vec![0u8; canvas_w * canvas_h * 4];

    let (text_w, text_h) = measure(font, text, px);
    let ascent = font
        .horizontal_line_metrics(px)
        .map(|m| m.ascent)
        .unwrap_or(px);

    let baseline = (target.height as f32 - text_h) / 2.0 + ascent;
    let mut pen_x = (target.width as f32 - text_w) / 2.0;

    for ch in text.chars() {
        let (metrics, coverage) = font.rasterize(ch, px);

        // Glyph origin: xmin right of the pen, ymin above/below the baseline.
        let x0 = (pen_x + metrics.xmin as f32).round() as i64;
        let y0 = (baseline - (metrics.height as i32 + metrics.ymin) as f32).round() as i64;

        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                let alpha = coverage[gy * metrics.width + gx];
                if alpha == 0 {
                    continue;
                }
                let x = x0 + gx as i64;
                let y = y0 + gy as i64;
                if x < 0 || y < 0 || x >= canvas_w as i64 || y >= canvas_h as i64 {
                    continue;
                }
                let idx = (y as usize * canvas_w + x as usize) * 4;
                // Black glyph; overlapping coverage keeps the denser sample.
                pixels[idx + 3] = pixels[idx + 3].max(alpha);
            }
        }

        pen_x += metrics.advance_width;
    }

    ImageData::from_rgba(target.width, target.height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TARGET: TargetSize = TargetSize {
        width: 480,
        height: 270,
    };

    // Optional binary fixture; glyph-level tests are skipped when absent.
    const SAMPLE_FONT: &str = "tests/data/sample.ttf";

    fn sample_font() -> Option<fontdue::Font> {
        let data = fs::read(SAMPLE_FONT).ok()?;
        fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).ok()
    }

    #[test]
    fn rasterize_missing_font_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("does_not_exist.ttf");

        match rasterize_caption(&missing, "Rover", TARGET) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn rasterize_invalid_font_bytes_returns_font_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("broken.ttf");
        fs::write(&bad_path, b"definitely not a font").expect("failed to write invalid data");

        match rasterize_caption(&bad_path, "Rover", TARGET) {
            Err(Error::Font(message)) => assert!(message.contains("broken.ttf")),
            other => panic!("expected Font error, got {other:?}"),
        }
    }

    #[test]
    fn chosen_size_never_exceeds_scale_factor() {
        let Some(font) = sample_font() else { return };

        let px = fitting_font_px(&font, "Bandit", TARGET);
        if px > MIN_CAPTION_FONT_PX {
            let (w, h) = measure(&font, "Bandit", px);
            assert!(w <= CAPTION_SCALE_FACTOR * TARGET.width as f32);
            assert!(h <= CAPTION_SCALE_FACTOR * TARGET.height as f32);
        }
    }

    #[test]
    fn fitting_scan_falls_back_to_floor_size() {
        let Some(font) = sample_font() else { return };

        // A tiny target no candidate size can satisfy.
        let tiny = TargetSize {
            width: 4,
            height: 4,
        };
        let px = fitting_font_px(&font, "Princess", tiny);
        assert_eq!(px, MIN_CAPTION_FONT_PX);
    }

    #[test]
    fn longer_text_never_gets_a_larger_size() {
        let Some(font) = sample_font() else { return };

        let short = fitting_font_px(&font, "Io", TARGET);
        let long = fitting_font_px(&font, "Bartholomew III", TARGET);
        assert!(long <= short);
    }

    #[test]
    fn rasterized_caption_matches_target_dimensions() {
        if !Path::new(SAMPLE_FONT).exists() {
            return;
        }

        let data = rasterize_caption(Path::new(SAMPLE_FONT), "Spot", TARGET)
            .expect("caption should rasterize");
        assert_eq!(data.width, TARGET.width);
        assert_eq!(data.height, TARGET.height);
        assert_eq!(
            data.rgba_bytes().len(),
            (TARGET.width * TARGET.height * 4) as usize
        );
    }

    #[test]
    fn rasterized_caption_has_visible_pixels() {
        if !Path::new(SAMPLE_FONT).exists() {
            return;
        }

        let data = rasterize_caption(Path::new(SAMPLE_FONT), "Spot", TARGET)
            .expect("caption should rasterize");
        let drawn = data
            .rgba_bytes()
            .chunks_exact(4)
            .filter(|px| px[3] > 0)
            .count();
        assert!(drawn > 0, "caption should draw at least one pixel");
    }

    #[test]
    fn empty_caption_draws_nothing() {
        if !Path::new(SAMPLE_FONT).exists() {
            return;
        }

        let data = rasterize_caption(Path::new(SAMPLE_FONT), "", TARGET)
            .expect("empty caption should still rasterize");
        assert!(data.rgba_bytes().chunks_exact(4).all(|px| px[3] == 0));
    }
}
