use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker some catalog rows carry in the finish column meaning "no finish".
/// Never offered as a facet value and never printed on a label.
pub const NULL_FINISH: &str = "NULL";

/// The six facet levels, ordered from least to most specific. The order is
/// load-bearing: writing a level resets every level below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetLevel {
    Brand,
    Collection,
    Series,
    ColorName,
    ColorNumber,
    Finish,
}

impl FacetLevel {
    pub const ALL: [FacetLevel; 6] = [
        FacetLevel::Brand,
        FacetLevel::Collection,
        FacetLevel::Series,
        FacetLevel::ColorName,
        FacetLevel::ColorNumber,
        FacetLevel::Finish,
    ];

    /// Zero-based position in the cascade.
    pub fn depth(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            FacetLevel::Brand => "brand",
            FacetLevel::Collection => "collection",
            FacetLevel::Series => "series",
            FacetLevel::ColorName => "color name",
            FacetLevel::ColorNumber => "color number",
            FacetLevel::Finish => "finish",
        }
    }
}

impl fmt::Display for FacetLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the product catalog. Immutable once loaded; the catalog is a
/// flat ordered list with no update or delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub brand: String,
    /// May be empty, meaning the record is uncategorized.
    pub collection: String,
    pub series: String,
    /// Identifies the background image asset for the label, resolved against
    /// the template root. May be empty.
    pub template_id: String,
    pub color_name: String,
    pub color_number: String,
    /// `None` is the null sentinel: the record has no finish at all.
    pub finish: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_depth() {
        for window in FacetLevel::ALL.windows(2) {
            assert!(window[0].depth() < window[1].depth());
        }
        assert_eq!(FacetLevel::Brand.depth(), 0);
        assert_eq!(FacetLevel::Finish.depth(), 5);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(FacetLevel::ColorName.to_string(), "color name");
        assert_eq!(FacetLevel::Brand.to_string(), "brand");
    }
}
