//! # Catalog Index
//!
//! Holds the parsed product catalog and derives, on demand, the legal values
//! at each facet level given the facets already fixed above it. Every listing
//! is a pure function of (catalog, upstream constraints): distinct values in
//! first-seen catalog order, an empty vec when nothing matches, never an
//! error. There is no cache to invalidate.
//!
//! The source format is a delimited text table: first line is a header
//! (discarded), each non-blank line is one record with seven positional
//! fields. Embedded delimiters cannot be escaped; that is a limitation of the
//! format, not something the parser tries to fix.

use crate::error::{LabelError, Result};
use crate::model::{CatalogRecord, FacetLevel, NULL_FINISH};
use crate::selection::FacetSelection;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub struct Catalog {
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    /// Parses catalog text. Never fails: short rows get empty trailing
    /// fields, extra fields are ignored, values are trimmed, and an empty or
    /// missing finish becomes the null sentinel.
    pub fn parse(text: &str) -> Self {
        let records = text
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(parse_line)
            .collect();
        Self { records }
    }

    /// Reads and parses the catalog file. A read failure is fatal to session
    /// start; no partial catalog is ever produced.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| LabelError::CatalogLoad(format!("{}: {}", path.display(), e)))?;
        Ok(Self::parse(&text))
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct brands across the whole catalog.
    pub fn brands(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.brand.as_str()), None)
    }

    /// Distinct collections under the selected brand, with a synthetic empty
    /// entry prepended meaning "no collection filter". That entry is a facet
    /// state in its own right, not a UI default.
    pub fn collections(&self, sel: &FacetSelection) -> Vec<String> {
        let Some(brand) = sel.get(FacetLevel::Brand) else {
            return Vec::new();
        };
        distinct(
            self.records
                .iter()
                .filter(|r| r.brand == brand)
                .map(|r| r.collection.as_str()),
            Some(String::new()),
        )
    }

    /// Distinct series under the selected brand, restricted to the selected
    /// collection only when one is constrained.
    pub fn series(&self, sel: &FacetSelection) -> Vec<String> {
        let Some(brand) = sel.get(FacetLevel::Brand) else {
            return Vec::new();
        };
        distinct(
            self.records
                .iter()
                .filter(|r| {
                    r.brand == brand && constrained_eq(sel.get(FacetLevel::Collection), &r.collection)
                })
                .map(|r| r.series.as_str()),
            None,
        )
    }

    /// Distinct color names under brand/collection/series. Requires series:
    /// without it the listing would be unbounded, so the result is empty.
    pub fn color_names(&self, sel: &FacetSelection) -> Vec<String> {
        let Some((brand, series)) = brand_and_series(sel) else {
            return Vec::new();
        };
        distinct(
            self.records
                .iter()
                .filter(|r| {
                    r.brand == brand
                        && constrained_eq(sel.get(FacetLevel::Collection), &r.collection)
                        && r.series == series
                })
                .map(|r| r.color_name.as_str()),
            None,
        )
    }

    /// Distinct color numbers under the upstream constraints, with the color
    /// name applied only when constrained.
    pub fn color_numbers(&self, sel: &FacetSelection) -> Vec<String> {
        let Some((brand, series)) = brand_and_series(sel) else {
            return Vec::new();
        };
        distinct(
            self.records
                .iter()
                .filter(|r| {
                    r.brand == brand
                        && constrained_eq(sel.get(FacetLevel::Collection), &r.collection)
                        && r.series == series
                        && constrained_eq(sel.get(FacetLevel::ColorName), &r.color_name)
                })
                .map(|r| r.color_number.as_str()),
            None,
        )
    }

    /// Distinct finishes under the upstream constraints. The null sentinel
    /// and the literal "NULL" marker are both suppressed: a label with no
    /// finish is expressed by leaving the facet unconstrained.
    pub fn finishes(&self, sel: &FacetSelection) -> Vec<String> {
        let Some((brand, series)) = brand_and_series(sel) else {
            return Vec::new();
        };
        distinct(
            self.records
                .iter()
                .filter(|r| {
                    r.brand == brand
                        && constrained_eq(sel.get(FacetLevel::Collection), &r.collection)
                        && r.series == series
                        && constrained_eq(sel.get(FacetLevel::ColorName), &r.color_name)
                        && constrained_eq(sel.get(FacetLevel::ColorNumber), &r.color_number)
                })
                .filter_map(|r| r.finish.as_deref())
                .filter(|f| *f != NULL_FINISH),
            None,
        )
    }

    /// The listing for any level, driven by the constraints above it.
    pub fn options(&self, level: FacetLevel, sel: &FacetSelection) -> Vec<String> {
        match level {
            FacetLevel::Brand => self.brands(),
            FacetLevel::Collection => self.collections(sel),
            FacetLevel::Series => self.series(sel),
            FacetLevel::ColorName => self.color_names(sel),
            FacetLevel::ColorNumber => self.color_numbers(sel),
            FacetLevel::Finish => self.finishes(sel),
        }
    }
}

fn parse_line(line: &str) -> CatalogRecord {
    let mut fields = line.split(',').map(str::trim);
    let mut next = || fields.next().unwrap_or("").to_string();
    let brand = next();
    let collection = next();
    let series = next();
    let template_id = next();
    let color_name = next();
    let color_number = next();
    let finish = next();
    CatalogRecord {
        brand,
        collection,
        series,
        template_id,
        color_name,
        color_number,
        finish: if finish.is_empty() { None } else { Some(finish) },
    }
}

fn constrained_eq(facet: Option<&str>, value: &str) -> bool {
    facet.map_or(true, |f| f == value)
}

fn brand_and_series(sel: &FacetSelection) -> Option<(&str, &str)> {
    Some((sel.get(FacetLevel::Brand)?, sel.get(FacetLevel::Series)?))
}

/// First-occurrence-order deduplication. `head`, when given, is emitted first
/// and counts as already seen.
fn distinct<'a>(values: impl Iterator<Item = &'a str>, head: Option<String>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    if let Some(head) = head {
        seen.insert("");
        out.push(head);
    }
    for value in values {
        if seen.insert(value) {
            out.push(value.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FacetLevel::*;

    const SAMPLE: &str = "\
Brand,Collection,Product Series,Background template,Color Name,Color Number,Finish
Acme,,SeriesA,tpl1,Red,R100,Matte
Acme,Modern,SeriesA,tpl2,Blue,B200,Gloss
Acme,Modern,SeriesB,tpl3,Red,R300,NULL
Acme,Classic,SeriesA,tpl1,Red,R101,
Zenith,Classic,SeriesC,tpl4,Green,G400,Satin
Acme,,SeriesA,tpl1,Red,R100,Matte
";

    fn selection(pairs: &[(FacetLevel, &str)]) -> FacetSelection {
        let mut sel = FacetSelection::new();
        for (level, value) in pairs {
            sel.set(*level, value);
        }
        sel
    }

    #[test]
    fn test_parse_skips_header_and_blank_lines() {
        let catalog = Catalog::parse("header line\n\nAcme,,S,t,Red,R1,\n   \nZenith,,S,t,Blue,B1,\n");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].brand, "Acme");
    }

    #[test]
    fn test_parse_trims_and_defaults_missing_fields() {
        let catalog = Catalog::parse("h\n  Acme , Modern ,SeriesA\n");
        let record = &catalog.records()[0];
        assert_eq!(record.brand, "Acme");
        assert_eq!(record.collection, "Modern");
        assert_eq!(record.series, "SeriesA");
        assert_eq!(record.template_id, "");
        assert_eq!(record.color_name, "");
        assert_eq!(record.color_number, "");
        assert_eq!(record.finish, None);
    }

    #[test]
    fn test_parse_empty_finish_is_null_sentinel() {
        let catalog = Catalog::parse("h\nAcme,,S,t,Red,R1,\nAcme,,S,t,Red,R2,Matte\n");
        assert_eq!(catalog.records()[0].finish, None);
        assert_eq!(catalog.records()[1].finish.as_deref(), Some("Matte"));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let catalog = Catalog::parse("h\nAcme,,S,t,Red,R1,Matte,spurious,more\n");
        assert_eq!(catalog.records()[0].finish.as_deref(), Some("Matte"));
    }

    #[test]
    fn test_empty_input_yields_empty_catalog() {
        assert!(Catalog::parse("").is_empty());
        assert!(Catalog::parse("just a header\n").is_empty());
    }

    #[test]
    fn test_brands_distinct_in_first_seen_order() {
        let catalog = Catalog::parse(SAMPLE);
        assert_eq!(catalog.brands(), vec!["Acme", "Zenith"]);
    }

    #[test]
    fn test_collections_prepend_empty_filter_entry() {
        let catalog = Catalog::parse(SAMPLE);
        let collections = catalog.collections(&selection(&[(Brand, "Acme")]));
        assert_eq!(collections, vec!["", "Modern", "Classic"]);
        assert_eq!(collections[0], "");
    }

    #[test]
    fn test_collections_empty_without_brand() {
        let catalog = Catalog::parse(SAMPLE);
        assert!(catalog.collections(&FacetSelection::new()).is_empty());
    }

    #[test]
    fn test_series_respects_collection_constraint() {
        let catalog = Catalog::parse(SAMPLE);
        let unconstrained = catalog.series(&selection(&[(Brand, "Acme")]));
        assert_eq!(unconstrained, vec!["SeriesA", "SeriesB"]);

        let constrained = catalog.series(&selection(&[(Brand, "Acme"), (Collection, "Classic")]));
        assert_eq!(constrained, vec!["SeriesA"]);
    }

    #[test]
    fn test_color_names_require_series() {
        let catalog = Catalog::parse(SAMPLE);
        assert!(catalog.color_names(&selection(&[(Brand, "Acme")])).is_empty());

        let names = catalog.color_names(&selection(&[(Brand, "Acme"), (Series, "SeriesA")]));
        assert_eq!(names, vec!["Red", "Blue"]);
    }

    #[test]
    fn test_color_numbers_filter_by_color_name_when_set() {
        let catalog = Catalog::parse(SAMPLE);
        let all = catalog.color_numbers(&selection(&[(Brand, "Acme"), (Series, "SeriesA")]));
        assert_eq!(all, vec!["R100", "B200", "R101"]);

        let red_only = catalog.color_numbers(&selection(&[
            (Brand, "Acme"),
            (Series, "SeriesA"),
            (ColorName, "Red"),
        ]));
        assert_eq!(red_only, vec!["R100", "R101"]);
    }

    #[test]
    fn test_finishes_suppress_null_sentinels() {
        let catalog = Catalog::parse(SAMPLE);
        // SeriesB's only record carries the literal NULL marker.
        let none = catalog.finishes(&selection(&[(Brand, "Acme"), (Series, "SeriesB")]));
        assert!(none.is_empty());

        // SeriesA has Matte, Gloss, and an absent finish; absent is dropped.
        let some = catalog.finishes(&selection(&[(Brand, "Acme"), (Series, "SeriesA")]));
        assert_eq!(some, vec!["Matte", "Gloss"]);
    }

    #[test]
    fn test_no_matches_is_empty_never_an_error() {
        let catalog = Catalog::parse(SAMPLE);
        let sel = selection(&[(Brand, "Nobody"), (Series, "Nothing")]);
        assert!(catalog.series(&sel).is_empty());
        assert!(catalog.color_names(&sel).is_empty());
        assert!(catalog.finishes(&sel).is_empty());
    }

    #[test]
    fn test_options_dispatch_matches_named_listings() {
        let catalog = Catalog::parse(SAMPLE);
        let sel = selection(&[(Brand, "Acme"), (Series, "SeriesA")]);
        assert_eq!(catalog.options(Brand, &sel), catalog.brands());
        assert_eq!(catalog.options(Collection, &sel), catalog.collections(&sel));
        assert_eq!(catalog.options(Finish, &sel), catalog.finishes(&sel));
    }

    #[test]
    fn test_listings_are_deterministic() {
        let catalog = Catalog::parse(SAMPLE);
        let sel = selection(&[(Brand, "Acme"), (Series, "SeriesA")]);
        assert_eq!(catalog.color_names(&sel), catalog.color_names(&sel));
        assert_eq!(catalog.brands(), catalog.brands());
    }

    #[test]
    fn test_load_missing_file_is_catalog_load_error() {
        let err = Catalog::load(Path::new("/nonexistent/labelData.csv")).unwrap_err();
        assert!(matches!(err, LabelError::CatalogLoad(_)));
    }
}
