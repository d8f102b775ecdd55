//! Single-label compositor: background template (or placeholder) under a
//! bottom-anchored, centered text block built from the *selected* facet
//! values. A template that fails to load degrades to a placeholder; it never
//! aborts the render.

use crate::model::{CatalogRecord, FacetLevel, NULL_FINISH};
use crate::render::{px, BLACK, LABEL_HEIGHT_IN, LABEL_WIDTH_IN, WHITE};
use crate::selection::FacetSelection;
use crate::templates;
use ab_glyph::{FontRef, PxScale};
use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use once_cell::sync::Lazy;
use std::path::Path;

static FONT: Lazy<FontRef<'static>> = Lazy::new(|| {
    FontRef::try_from_slice(include_bytes!("../../../assets/fonts/DejaVuSans.ttf"))
        .expect("bundled font parses")
});

/// Base text size in CSS pixels, multiplied by the render scale.
const BASE_FONT_PX: f32 = 8.0;
const LINE_HEIGHT: f32 = 1.2;
/// Vertical margin above and below each text line, in CSS pixels.
const LINE_MARGIN_PX: f32 = 1.0;
/// The text block's bottom edge sits this far above the label's bottom edge.
const TEXT_BOTTOM_INSET_IN: f32 = 0.5;

const PLACEHOLDER_FILL: Rgba<u8> = Rgba([229, 231, 235, 255]);
const PLACEHOLDER_EDGE: Rgba<u8> = Rgba([156, 163, 175, 255]);

/// The label's text lines, uppercased, derived from the selected facets.
///
/// Line one joins color name and number with a single space only when both
/// are non-empty. A finish line follows only for a concrete selected finish
/// that is not the "NULL" marker. When name and number are both empty the
/// first line stays as a blank slot if a finish follows (it still occupies
/// its line height), and the block is empty otherwise.
pub fn label_lines(sel: &FacetSelection) -> Vec<String> {
    let name = sel.get(FacetLevel::ColorName).unwrap_or("");
    let number = sel.get(FacetLevel::ColorNumber).unwrap_or("");
    let first = if !name.is_empty() && !number.is_empty() {
        format!("{} {}", name, number)
    } else {
        format!("{}{}", name, number)
    };

    let mut lines = vec![first.to_uppercase()];
    if let Some(finish) = sel.get(FacetLevel::Finish) {
        if finish != NULL_FINISH {
            lines.push(finish.to_uppercase());
        }
    }
    if lines.len() == 1 && lines[0].is_empty() {
        lines.clear();
    }
    lines
}

/// Renders one label at `scale`: 2in x 3in, so 192x288 device pixels at
/// scale 1. The background comes from the resolved record's template id;
/// without a record (or with an empty id) the label is bare white.
pub fn render_label(
    record: Option<&CatalogRecord>,
    sel: &FacetSelection,
    template_root: &Path,
    scale: u32,
) -> RgbaImage {
    let width = px(LABEL_WIDTH_IN, scale);
    let height = px(LABEL_HEIGHT_IN, scale);
    let mut canvas = RgbaImage::from_pixel(width, height, WHITE);

    if let Some(path) = record.and_then(|r| templates::template_path(template_root, &r.template_id))
    {
        match image::open(&path) {
            Ok(template) => {
                // Contain-fit: shrink to the label box, keep aspect, center.
                let fitted = template
                    .resize(width, height, imageops::FilterType::Triangle)
                    .to_rgba8();
                let x = (i64::from(width) - i64::from(fitted.width())) / 2;
                let y = (i64::from(height) - i64::from(fitted.height())) / 2;
                imageops::overlay(&mut canvas, &fitted, x, y);
            }
            Err(_) => draw_placeholder(&mut canvas),
        }
    }

    draw_text_block(&mut canvas, sel, scale);
    canvas
}

fn draw_placeholder(canvas: &mut RgbaImage) {
    let (width, height) = canvas.dimensions();
    for pixel in canvas.pixels_mut() {
        *pixel = PLACEHOLDER_FILL;
    }
    draw_hollow_rect_mut(
        canvas,
        Rect::at(0, 0).of_size(width, height),
        PLACEHOLDER_EDGE,
    );
}

fn draw_text_block(canvas: &mut RgbaImage, sel: &FacetSelection, scale: u32) {
    let lines = label_lines(sel);
    if lines.is_empty() {
        return;
    }

    let s = scale as f32;
    let font_scale = PxScale::from(BASE_FONT_PX * s);
    let advance = ((BASE_FONT_PX * LINE_HEIGHT + 2.0 * LINE_MARGIN_PX) * s).round() as i32;
    let block_height = advance * lines.len() as i32;
    let bottom_inset = px(TEXT_BOTTOM_INSET_IN, scale) as i32;

    let mut y = canvas.height() as i32 - bottom_inset - block_height;
    for line in &lines {
        if !line.is_empty() {
            let (text_w, _) = text_size(font_scale, &*FONT, line);
            let x = ((i64::from(canvas.width()) - text_w as i64) / 2).max(0) as i32;
            let y_line = y + (LINE_MARGIN_PX * s).round() as i32;
            draw_text_mut(canvas, BLACK, x, y_line, font_scale, &*FONT, line);
        }
        y += advance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FacetLevel::*;
    use tempfile::tempdir;

    fn selection(pairs: &[(FacetLevel, &str)]) -> FacetSelection {
        let mut sel = FacetSelection::new();
        for (level, value) in pairs {
            sel.set(*level, value);
        }
        sel
    }

    fn record(template_id: &str) -> CatalogRecord {
        CatalogRecord {
            brand: "Acme".into(),
            collection: String::new(),
            series: "SeriesA".into(),
            template_id: template_id.into(),
            color_name: "Red".into(),
            color_number: "R100".into(),
            finish: Some("Matte".into()),
        }
    }

    #[test]
    fn test_lines_join_name_and_number_with_space() {
        let sel = selection(&[(ColorName, "Red"), (ColorNumber, "R100")]);
        assert_eq!(label_lines(&sel), vec!["RED R100"]);
    }

    #[test]
    fn test_lines_omit_separator_when_one_side_empty() {
        assert_eq!(label_lines(&selection(&[(ColorName, "Red")])), vec!["RED"]);
        assert_eq!(
            label_lines(&selection(&[(ColorNumber, "R100")])),
            vec!["R100"]
        );
    }

    #[test]
    fn test_lines_add_finish_on_its_own_line() {
        let sel = selection(&[(ColorName, "Red"), (ColorNumber, "R100"), (Finish, "Matte")]);
        assert_eq!(label_lines(&sel), vec!["RED R100", "MATTE"]);
    }

    #[test]
    fn test_lines_suppress_null_finish_marker() {
        let sel = selection(&[(ColorName, "Red"), (ColorNumber, "R100"), (Finish, "NULL")]);
        assert_eq!(label_lines(&sel), vec!["RED R100"]);
    }

    #[test]
    fn test_finish_line_comes_from_selection() {
        // The selected finish is displayed even though the (hypothetical)
        // resolved record carries a different one.
        let sel = selection(&[(ColorName, "Red"), (Finish, "Gloss")]);
        assert_eq!(label_lines(&sel), vec!["RED", "GLOSS"]);
    }

    #[test]
    fn test_finish_only_keeps_blank_first_slot() {
        let sel = selection(&[(Finish, "Matte")]);
        assert_eq!(label_lines(&sel), vec!["", "MATTE"]);
    }

    #[test]
    fn test_empty_selection_has_no_lines() {
        assert!(label_lines(&FacetSelection::new()).is_empty());
    }

    #[test]
    fn test_render_dimensions_follow_scale() {
        let sel = FacetSelection::new();
        let base = render_label(None, &sel, Path::new("templates"), 1);
        assert_eq!(base.dimensions(), (192, 288));

        let double = render_label(None, &sel, Path::new("templates"), 2);
        assert_eq!(double.dimensions(), (384, 576));
    }

    #[test]
    fn test_render_without_record_is_white_with_text() {
        let sel = selection(&[(ColorName, "Red"), (ColorNumber, "R100")]);
        let label = render_label(None, &sel, Path::new("templates"), 1);
        assert_eq!(*label.get_pixel(0, 0), WHITE);
        // Some text ink landed in the bottom block.
        let has_ink = label.pixels().any(|p| p.0[0] < 128);
        assert!(has_ink);
    }

    #[test]
    fn test_missing_template_degrades_to_placeholder() {
        let dir = tempdir().unwrap();
        // Asset exists in the catalog row but not on disk.
        let rec = record("missing.png");
        let sel = selection(&[(ColorName, "Red")]);
        let label = render_label(Some(&rec), &sel, dir.path(), 1);
        assert_eq!(*label.get_pixel(1, 1), PLACEHOLDER_FILL);
        assert_eq!(*label.get_pixel(0, 0), PLACEHOLDER_EDGE);
    }

    #[test]
    fn test_unreadable_template_still_renders_text() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not an image").unwrap();
        let rec = record("broken.png");
        let sel = selection(&[(ColorName, "Red"), (ColorNumber, "R100")]);
        let label = render_label(Some(&rec), &sel, dir.path(), 1);
        let has_ink = label.pixels().any(|p| p.0[0] < 128);
        assert!(has_ink);
    }

    #[test]
    fn test_template_is_contain_fitted_and_centered() {
        let dir = tempdir().unwrap();
        // A wide solid red strip: contain-fit pins it to the label width and
        // centers it vertically, leaving white above and below.
        let strip = RgbaImage::from_pixel(400, 40, Rgba([255, 0, 0, 255]));
        strip.save(dir.path().join("strip.png")).unwrap();

        let rec = record("strip.png");
        let label = render_label(Some(&rec), &FacetSelection::new(), dir.path(), 1);
        assert_eq!(*label.get_pixel(96, 2), WHITE);
        let center = label.get_pixel(96, 144);
        assert!(center.0[0] > 200 && center.0[1] < 80);
    }

    #[test]
    fn test_empty_template_id_renders_bare_label() {
        let rec = record("");
        let label = render_label(Some(&rec), &FacetSelection::new(), Path::new("templates"), 1);
        assert_eq!(*label.get_pixel(0, 0), WHITE);
    }
}
