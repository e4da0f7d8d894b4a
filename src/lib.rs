//! flixdash - Interactive analytics over the Netflix title catalog
//!
//! flixdash loads the catalog CSV once, lets you narrow it down by content
//! type and release year, and shows headline counts, four charts and a
//! searchable table, either live in the browser or as an exported report.
//!
//! # Pipeline
//!
//! Every change of a control re-runs the same fixed sequence of pure steps
//! against the read-only catalog:
//!
//! ```text
//! Catalog ─► FilterControls ─► filter::apply ─► Metrics
//!                                        ├────► ChartSet (4 panels)
//!                                        └────► table::search
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use flixdash::{Catalog, ContentType, Dashboard, FilterControls};
//!
//! let catalog = Catalog::load("netflix_titles.csv")?;
//! let controls = FilterControls::defaults(&catalog)
//!     .with_types(vec![ContentType::Movie])
//!     .with_year_range(2015, 2020);
//!
//! let view = Dashboard::build(&catalog, &controls, "");
//!
//! println!("Titles: {}", view.metrics.total);
//! for point in &view.charts.top_countries.points {
//!     println!("{:<20} {}", point.label, point.value);
//! }
//! # Ok::<(), flixdash::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: CSV loading, the [`TitleRecord`] model, date parsing
//! - [`filter`]: filter controls and the filter engine
//! - [`metrics`], [`charts`], [`table`]: the panels
//! - [`dashboard`]: one full recomputation for a set of controls
//! - [`serve`]: local HTTP server for the interactive page
//! - [`report`]: HTML, JSON and CSV snapshots

pub mod catalog;
pub mod charts;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod report;
pub mod serve;
pub mod table;

pub use catalog::{Catalog, ContentType, TitleRecord};
pub use dashboard::{Dashboard, DashboardView};
pub use error::{Error, Result};
pub use filter::FilterControls;
pub use metrics::Metrics;

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // PUBLIC API TESTS
    // ==========================================================================
    //
    // These tests verify the public API surface is reachable from the crate
    // root and that the pieces compose without touching the filesystem.
    // ==========================================================================

    #[test]
    fn test_public_exports() {
        let _: ContentType = ContentType::Movie;
        let _ = Catalog::default();
        let _ = Metrics::default();
    }

    #[test]
    fn test_pipeline_from_crate_root() {
        let catalog = Catalog::from_records(vec![
            TitleRecord::new("Roma", ContentType::Movie, 2018),
            TitleRecord::new("Dark", ContentType::TvShow, 2017),
        ]);
        let controls = FilterControls::defaults(&catalog).with_types(vec![ContentType::TvShow]);
        let view: DashboardView = Dashboard::build(&catalog, &controls, "");

        assert_eq!(view.metrics, Metrics { total: 1, movies: 0, tv_shows: 1 });
    }

    #[test]
    fn test_three_row_scenario() {
        let csv = "\
title,type,release_year,listed_in,country
A,Movie,2015,\"Drama, Comedy\",USA
B,TV Show,2019,Drama,\"USA, UK\"
C,Movie,2005,Action,UK
";
        let catalog = Catalog::from_reader(csv.as_bytes()).unwrap();

        let movies = FilterControls {
            types: vec![ContentType::Movie],
            year_range: (2010, 2021),
        };
        let view = Dashboard::build(&catalog, &movies, "");
        assert_eq!(view.table.len(), 1);
        assert_eq!(view.table.rows[0].title, "A");

        let all: Vec<&TitleRecord> = catalog.records().iter().collect();
        let genres = charts::top_genres(&all);
        assert_eq!(genres.value_of("Drama"), Some(2));
        assert_eq!(genres.value_of("Comedy"), Some(1));
        assert_eq!(genres.value_of("Action"), Some(1));

        let countries = charts::top_countries(&all);
        assert_eq!(countries.value_of("UK"), Some(2));
        assert_eq!(countries.value_of("USA"), Some(2));
    }
}
