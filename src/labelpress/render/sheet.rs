//! Sheet tiling and rasterization: eight identical instances of the current
//! label, arranged 4x2 with a fixed gap and centered on a letter-landscape
//! page. The page is rasterized in one pass at a fixed oversample of its CSS
//! pixel dimensions, onto an opaque white background.

use crate::model::CatalogRecord;
use crate::render::{
    label, px, GRID_COLS, GRID_GAP_IN, GRID_ROWS, LABEL_HEIGHT_IN, LABEL_WIDTH_IN, OVERSAMPLE,
    PAGE_HEIGHT_IN, PAGE_WIDTH_IN, WHITE,
};
use crate::selection::FacetSelection;
use image::{imageops, DynamicImage, RgbImage, RgbaImage};
use std::path::Path;

/// Top-left corners of the eight label slots on the oversampled page, in
/// row-major order. The grid is centered as a whole.
pub fn label_positions() -> [(u32, u32); (GRID_COLS * GRID_ROWS) as usize] {
    let label_w = px(LABEL_WIDTH_IN, OVERSAMPLE);
    let label_h = px(LABEL_HEIGHT_IN, OVERSAMPLE);
    let gap = px(GRID_GAP_IN, OVERSAMPLE);
    let grid_w = GRID_COLS * label_w + (GRID_COLS - 1) * gap;
    let grid_h = GRID_ROWS * label_h + (GRID_ROWS - 1) * gap;
    let x0 = (px(PAGE_WIDTH_IN, OVERSAMPLE) - grid_w) / 2;
    let y0 = (px(PAGE_HEIGHT_IN, OVERSAMPLE) - grid_h) / 2;

    let mut positions = [(0u32, 0u32); (GRID_COLS * GRID_ROWS) as usize];
    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            positions[(row * GRID_COLS + col) as usize] = (
                x0 + col * (label_w + gap),
                y0 + row * (label_h + gap),
            );
        }
    }
    positions
}

/// Rasterizes the full sheet: the label is composed once and blitted into
/// every slot, so all eight instances are identical by construction. The
/// result is flattened to opaque RGB, ready for document embedding.
pub fn render_sheet(
    record: Option<&CatalogRecord>,
    sel: &FacetSelection,
    template_root: &Path,
) -> RgbImage {
    let page_w = px(PAGE_WIDTH_IN, OVERSAMPLE);
    let page_h = px(PAGE_HEIGHT_IN, OVERSAMPLE);
    let mut page = RgbaImage::from_pixel(page_w, page_h, WHITE);

    let label = label::render_label(record, sel, template_root, OVERSAMPLE);
    for (x, y) in label_positions() {
        imageops::overlay(&mut page, &label, i64::from(x), i64::from(y));
    }

    DynamicImage::ImageRgba8(page).to_rgb8()
}
