// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Grid**: Cell dimensions and inter-cell spacing
//! - **Render**: Target size for off-screen caption rendering
//! - **Caption**: Font-size fitting bounds for rasterized text

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default width of one gallery cell in logical pixels.
pub const DEFAULT_CELL_WIDTH: f32 = 150.0;

/// Default height of one gallery cell in logical pixels.
pub const DEFAULT_CELL_HEIGHT: f32 = 150.0;

/// Minimum allowed cell edge length.
pub const MIN_CELL_SIZE: f32 = 32.0;

/// Maximum allowed cell edge length.
pub const MAX_CELL_SIZE: f32 = 512.0;

/// Default gap between cells and around the grid edge.
pub const DEFAULT_SPACING: f32 = 20.0;

/// Minimum allowed spacing.
pub const MIN_SPACING: f32 = 0.0;

/// Maximum allowed spacing.
pub const MAX_SPACING: f32 = 100.0;

// ==========================================================================
// Render Target Defaults
// ==========================================================================

/// Default render target width when no size is requested (16:9 canvas).
pub const DEFAULT_TARGET_WIDTH: u32 = 16 * 30;

/// Default render target height when no size is requested (16:9 canvas).
pub const DEFAULT_TARGET_HEIGHT: u32 = 9 * 30;

// ==========================================================================
// Caption Fitting Defaults
// ==========================================================================

/// Fraction of the render target a caption's bounding box may occupy.
pub const CAPTION_SCALE_FACTOR: f32 = 0.60;

/// Largest candidate font size tried by the fitting scan, in pixels.
pub const MAX_CAPTION_FONT_PX: f32 = 500.0;

/// Floor font size: captions render at this size when nothing larger fits.
pub const MIN_CAPTION_FONT_PX: f32 = 10.0;

/// Decrement between candidate font sizes in the fitting scan.
pub const CAPTION_FONT_PX_STEP: f32 = 10.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Grid validation
    assert!(MIN_CELL_SIZE > 0.0);
    assert!(MAX_CELL_SIZE > MIN_CELL_SIZE);
    assert!(DEFAULT_CELL_WIDTH >= MIN_CELL_SIZE);
    assert!(DEFAULT_CELL_WIDTH <= MAX_CELL_SIZE);
    assert!(DEFAULT_CELL_HEIGHT >= MIN_CELL_SIZE);
    assert!(DEFAULT_CELL_HEIGHT <= MAX_CELL_SIZE);
    assert!(MIN_SPACING >= 0.0);
    assert!(MAX_SPACING > MIN_SPACING);
    assert!(DEFAULT_SPACING >= MIN_SPACING);
    assert!(DEFAULT_SPACING <= MAX_SPACING);

    // Render target validation
    assert!(DEFAULT_TARGET_WIDTH > 0);
    assert!(DEFAULT_TARGET_HEIGHT > 0);

    // Caption fitting validation
    assert!(CAPTION_SCALE_FACTOR > 0.0);
    assert!(CAPTION_SCALE_FACTOR <= 1.0);
    assert!(MIN_CAPTION_FONT_PX > 0.0);
    assert!(MAX_CAPTION_FONT_PX > MIN_CAPTION_FONT_PX);
    assert!(CAPTION_FONT_PX_STEP > 0.0);
};
