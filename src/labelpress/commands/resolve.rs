use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::selection::{self, FacetSelection};

pub fn run(catalog: &Catalog, sel: &FacetSelection) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match selection::resolve(catalog, sel) {
        Some(record) => Ok(result.with_record(record.clone())),
        None => {
            result.add_message(CmdMessage::info("No record matches the current selection."));
            Ok(result)
        }
    }
}
