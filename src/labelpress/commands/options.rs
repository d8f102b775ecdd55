use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::FacetLevel;
use crate::selection::FacetSelection;

pub fn run(catalog: &Catalog, sel: &FacetSelection, level: FacetLevel) -> Result<CmdResult> {
    let options = catalog.options(level, sel);
    let mut result = CmdResult::default();
    if options.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} values under the current selection.",
            level
        )));
    }
    Ok(result.with_options(options))
}
