use crate::catalog::Catalog;
use crate::commands::helpers::persist_atomic;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::render::pdf::{DocumentWriter, PdfWriter, LANDSCAPE_LETTER};
use crate::render::sheet;
use crate::selection::{self, FacetSelection};
use std::path::Path;

/// Drives the two-stage export: rasterize the 8-label sheet, then embed the
/// raster into a single-page landscape document. Both stages complete in
/// memory before anything touches disk, so a failure at either stage writes
/// nothing and the session state is unaffected.
pub fn run(
    catalog: &Catalog,
    sel: &FacetSelection,
    template_root: &Path,
    output: &Path,
) -> Result<CmdResult> {
    let record = selection::resolve(catalog, sel);
    let raster = sheet::render_sheet(record, sel, template_root);

    let writer = PdfWriter::default();
    let bytes = writer.embed(&raster, LANDSCAPE_LETTER)?;
    persist_atomic(output, &bytes)?;

    let mut result = CmdResult::default().with_artifact(output.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        output.display()
    )));
    Ok(result)
}
