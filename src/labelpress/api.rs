//! # API Facade
//!
//! The single entry point for all labelpress operations, regardless of the
//! client driving them. It owns the session: the loaded catalog, the current
//! facet selection, and the template root. Methods dispatch to the command
//! layer and return structured `CmdResult`s; nothing here writes to stdout,
//! stderr, or assumes a terminal.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::{CatalogRecord, FacetLevel};
use crate::selection::{self, FacetSelection};
use std::path::{Path, PathBuf};

pub struct LabelApi {
    catalog: Catalog,
    selection: FacetSelection,
    template_root: PathBuf,
}

impl LabelApi {
    /// A fully loaded catalog is required up front; partial catalogs never
    /// reach the selection machinery.
    pub fn new(catalog: Catalog, template_root: PathBuf) -> Self {
        Self {
            catalog,
            selection: FacetSelection::new(),
            template_root,
        }
    }

    /// Writes one facet through the selection's single mutation entry point,
    /// cascading the reset to every level below it.
    pub fn set_facet(&mut self, level: FacetLevel, value: &str) {
        self.selection.set(level, value);
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The record the current selection resolves to, if any.
    pub fn resolved(&self) -> Option<&CatalogRecord> {
        selection::resolve(&self.catalog, &self.selection)
    }

    pub fn options(&self, level: FacetLevel) -> Result<commands::CmdResult> {
        commands::options::run(&self.catalog, &self.selection, level)
    }

    pub fn resolve(&self) -> Result<commands::CmdResult> {
        commands::resolve::run(&self.catalog, &self.selection)
    }

    pub fn preview(&self, scale: u32, out: &Path) -> Result<commands::CmdResult> {
        commands::preview::run(
            &self.catalog,
            &self.selection,
            &self.template_root,
            scale,
            out,
        )
    }

    pub fn export(&self, output: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.catalog, &self.selection, &self.template_root, output)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
