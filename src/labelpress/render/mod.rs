//! # Label Compositor & Export Pipeline
//!
//! Turns a resolved record (or none) plus the selected facets into one label
//! bitmap, tiles eight identical instances onto a letter-landscape page, and
//! embeds the finished raster into a single-page document. Rasterization and
//! document assembly are separate stages behind narrow seams so either
//! backend can be swapped without touching the compositor.

pub mod label;
pub mod pdf;
pub mod sheet;

use image::Rgba;

/// CSS reference resolution; all raster geometry derives from it.
pub const CSS_DPI: u32 = 96;

/// Physical footprint of one label.
pub const LABEL_WIDTH_IN: f32 = 2.0;
pub const LABEL_HEIGHT_IN: f32 = 3.0;

/// Letter page in landscape orientation.
pub const PAGE_WIDTH_IN: f32 = 11.0;
pub const PAGE_HEIGHT_IN: f32 = 8.5;

/// Fixed sheet arrangement: 4 columns by 2 rows with a uniform gap.
pub const GRID_COLS: u32 = 4;
pub const GRID_ROWS: u32 = 2;
pub const GRID_GAP_IN: f32 = 0.25;

/// Oversampling factor of the export raster relative to CSS pixels.
pub const OVERSAMPLE: u32 = 4;

pub(crate) const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub(crate) const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Inches to device pixels at the given uniform scale factor.
pub fn px(inches: f32, scale: u32) -> u32 {
    (inches * CSS_DPI as f32 * scale as f32).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_at_base_scale() {
        assert_eq!(px(LABEL_WIDTH_IN, 1), 192);
        assert_eq!(px(LABEL_HEIGHT_IN, 1), 288);
        assert_eq!(px(GRID_GAP_IN, 1), 24);
    }

    #[test]
    fn test_px_scales_uniformly() {
        assert_eq!(px(PAGE_WIDTH_IN, OVERSAMPLE), 4224);
        assert_eq!(px(PAGE_HEIGHT_IN, OVERSAMPLE), 3264);
    }

    #[test]
    fn test_grid_fits_on_page() {
        let grid_w = GRID_COLS as f32 * LABEL_WIDTH_IN + (GRID_COLS - 1) as f32 * GRID_GAP_IN;
        let grid_h = GRID_ROWS as f32 * LABEL_HEIGHT_IN + (GRID_ROWS - 1) as f32 * GRID_GAP_IN;
        assert!(grid_w <= PAGE_WIDTH_IN);
        assert!(grid_h <= PAGE_HEIGHT_IN);
    }
}
