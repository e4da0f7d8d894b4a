//! One full recomputation of the dashboard
//!
//! Every control change runs the same fixed pipeline, synchronously:
//!
//! ```text
//! controls ─► clamp ─► filter ─► metrics
//!                          ├───► charts (4 panels)
//!                          └───► search / table
//! ```
//!
//! Each stage takes the previous stage's output as an explicit argument and
//! keeps no state between runs, so there is nothing to invalidate.

use crate::catalog::{Catalog, ContentType};
use crate::charts::ChartSet;
use crate::filter::{self, FilterControls};
use crate::metrics::Metrics;
use crate::table::{self, TableView};
use serde::Serialize;

/// Everything the page needs to draw one state of the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView<'a> {
    /// Options for the content-type selector
    pub available_types: Vec<ContentType>,
    /// Slider bounds, `None` for an empty catalog
    pub year_bounds: Option<(i32, i32)>,
    /// Controls after clamping, as actually applied
    pub controls: FilterControls,
    pub search: String,
    pub metrics: Metrics,
    pub charts: ChartSet,
    pub table: TableView<'a>,
}

pub struct Dashboard;

impl Dashboard {
    pub fn build<'a>(catalog: &'a Catalog, controls: &FilterControls, search: &str) -> DashboardView<'a> {
        let controls = controls.clone().clamped(catalog);
        let filtered = filter::apply(catalog.records(), &controls);

        DashboardView {
            available_types: catalog.content_types(),
            year_bounds: catalog.release_year_bounds(),
            search: search.to_string(),
            metrics: Metrics::from_records(&filtered),
            charts: ChartSet::from_records(&filtered),
            table: table::search(&filtered, search),
            controls,
        }
    }

    /// Dashboard as it looks on first load
    pub fn initial(catalog: &Catalog) -> DashboardView<'_> {
        Self::build(catalog, &FilterControls::defaults(catalog), "")
    }
}
