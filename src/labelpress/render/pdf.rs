//! Document assembly: the finished sheet raster goes into a single-page
//! document that it fills edge to edge. The assembler sits behind a narrow
//! trait so the compositor never depends on any one PDF backend.

use crate::error::Result;
use crate::render::{PAGE_HEIGHT_IN, PAGE_WIDTH_IN};
use image::{DynamicImage, RgbImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};

const MM_PER_IN: f32 = 25.4;

/// Page footprint in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_in: f32,
    pub height_in: f32,
}

/// The sheet's fixed page: letter, landscape.
pub const LANDSCAPE_LETTER: PageSize = PageSize {
    width_in: PAGE_WIDTH_IN,
    height_in: PAGE_HEIGHT_IN,
};

/// Assembles one full-page bitmap into complete document bytes. Returning
/// bytes rather than writing a file keeps persistence with the caller, which
/// is what makes the export atomic.
pub trait DocumentWriter {
    fn embed(&self, bitmap: &RgbImage, page: PageSize) -> Result<Vec<u8>>;
}

/// printpdf-backed writer producing a single-page document.
pub struct PdfWriter {
    pub title: String,
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self {
            title: "labelpress".to_string(),
        }
    }
}

impl DocumentWriter for PdfWriter {
    fn embed(&self, bitmap: &RgbImage, page: PageSize) -> Result<Vec<u8>> {
        let (doc, page_idx, layer_idx) = PdfDocument::new(
            self.title.clone(),
            Mm(page.width_in * MM_PER_IN),
            Mm(page.height_in * MM_PER_IN),
            "sheet",
        );
        let layer = doc.get_page(page_idx).get_layer(layer_idx);

        // The embed DPI is what stretches the raster to the full page.
        let dpi = bitmap.width() as f32 / page.width_in;
        let image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(bitmap.clone()));
        image.add_to_layer(
            layer,
            ImageTransform {
                dpi: Some(dpi),
                ..Default::default()
            },
        );

        Ok(doc.save_to_bytes()?)
    }
}
