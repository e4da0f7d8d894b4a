//! Filter controls and the filter engine
//!
//! Two controls drive every view of the dashboard:
//!
//! - a set of content types (default: every type present in the catalog)
//! - an inclusive release-year range (default: 2010..=2021, clamped to the
//!   years actually present)
//!
//! [`apply`] turns a catalog plus the controls into a filtered view. It only
//! borrows the records, keeps their original order, and never touches the
//! catalog itself.

use crate::catalog::{Catalog, ContentType, TitleRecord};
use serde::{Deserialize, Serialize};

/// Initial release-year range before clamping
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (2010, 2021);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterControls {
    pub types: Vec<ContentType>,
    /// Inclusive `(min, max)` release year
    pub year_range: (i32, i32),
}

impl FilterControls {
    /// Every content type present, default year range clamped to the catalog
    pub fn defaults(catalog: &Catalog) -> Self {
        Self {
            types: catalog.content_types(),
            year_range: DEFAULT_YEAR_RANGE,
        }
        .clamped(catalog)
    }

    pub fn with_types(mut self, types: Vec<ContentType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_year_range(mut self, min: i32, max: i32) -> Self {
        self.year_range = (min, max);
        self
    }

    /// Clamp each end of the year range to the catalog's observed bounds.
    /// An inverted range is left inverted and simply matches nothing.
    pub fn clamped(mut self, catalog: &Catalog) -> Self {
        if let Some((lo, hi)) = catalog.release_year_bounds() {
            let (min, max) = self.year_range;
            self.year_range = (min.clamp(lo, hi), max.clamp(lo, hi));
        }
        self
    }

    pub fn matches(&self, record: &TitleRecord) -> bool {
        let (min, max) = self.year_range;
        self.types.contains(&record.content_type)
            && (min..=max).contains(&record.release_year)
    }
}

/// Rows matching both predicates, in catalog order
pub fn apply<'a>(records: &'a [TitleRecord], controls: &FilterControls) -> Vec<&'a TitleRecord> {
    records.iter().filter(|r| controls.matches(r)).collect()
}

/// Re-filter an existing view
pub fn refine<'a>(view: &[&'a TitleRecord], controls: &FilterControls) -> Vec<&'a TitleRecord> {
    view.iter().copied().filter(|r| controls.matches(r)).collect()
}
