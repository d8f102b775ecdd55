use crate::catalog::Catalog;
use crate::commands::helpers::persist_atomic;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::render::label;
use crate::selection::{self, FacetSelection};
use image::{DynamicImage, ImageOutputFormat};
use std::io::Cursor;
use std::path::Path;

/// Renders the current single-label preview to a PNG at `out`.
pub fn run(
    catalog: &Catalog,
    sel: &FacetSelection,
    template_root: &Path,
    scale: u32,
    out: &Path,
) -> Result<CmdResult> {
    let record = selection::resolve(catalog, sel);
    let rendered = label::render_label(record, sel, template_root, scale);

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(rendered).write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    persist_atomic(out, &bytes)?;

    let mut result = CmdResult::default().with_artifact(out.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Preview written to {}",
        out.display()
    )));
    Ok(result)
}
