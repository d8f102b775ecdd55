//! # Selection State Machine
//!
//! Owns the session's facet choices and resolves them to at most one catalog
//! record. The six levels used to live in independent mutable cells in an
//! earlier design; they are consolidated here so the cascade reset cannot be
//! applied partially on some mutation paths and not others.

use crate::catalog::Catalog;
use crate::model::{CatalogRecord, FacetLevel};

/// The current choice at each of the six ordered facet levels.
///
/// `None` means unconstrained. That is deliberately distinct from a facet
/// set to an empty-string *value*: a record's collection may itself be empty,
/// but "apply no collection constraint" is its own selectable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    values: [Option<String>; 6],
}

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The chosen value at `level`, or `None` if unconstrained.
    pub fn get(&self, level: FacetLevel) -> Option<&str> {
        self.values[level.depth()].as_deref()
    }

    pub fn is_constrained(&self, level: FacetLevel) -> bool {
        self.values[level.depth()].is_some()
    }

    /// The single mutation entry point. Writing level *k* resets every level
    /// strictly below it to unconstrained. Total: an empty `value` clears the
    /// level, a concrete one constrains it, and the cascade applies either way.
    pub fn set(&mut self, level: FacetLevel, value: &str) {
        self.values[level.depth()] = if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        };
        for slot in self.values[level.depth() + 1..].iter_mut() {
            *slot = None;
        }
    }
}

/// Resolves the selection to the first record in catalog order matching all
/// constrained facets, brand and series being mandatory. The finish facet is
/// never a match constraint: it participates only in label display, and the
/// displayed finish is the selected one, not the resolved record's own field.
/// (That asymmetry is inherited source behavior, preserved on purpose.)
pub fn resolve<'c>(catalog: &'c Catalog, sel: &FacetSelection) -> Option<&'c CatalogRecord> {
    let brand = sel.get(FacetLevel::Brand)?;
    let series = sel.get(FacetLevel::Series)?;
    catalog.records().iter().find(|r| {
        r.brand == brand
            && sel
                .get(FacetLevel::Collection)
                .map_or(true, |c| r.collection == c)
            && r.series == series
            && sel
                .get(FacetLevel::ColorName)
                .map_or(true, |n| r.color_name == n)
            && sel
                .get(FacetLevel::ColorNumber)
                .map_or(true, |n| r.color_number == n)
    })
}
