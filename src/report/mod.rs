//! Report export for one dashboard view
//!
//! This module writes a snapshot of the dashboard in multiple formats:
//!
//! - **HTML**: Self-contained page with the metrics, the four D3 charts and the table
//! - **JSON**: The full view, as served by `/api/dashboard`
//! - **CSV**: The table rows, one title per line
//!
//! # Usage
//!
//! ```ignore
//! use flixdash::{report, Dashboard};
//!
//! let view = Dashboard::initial(&catalog);
//!
//! // Automatically picks format based on extension
//! report::generate("dashboard.html", &view)?;  // HTML
//! report::generate("dashboard.json", &view)?;  // JSON
//! report::generate("titles.csv", &view)?;      // CSV
//! ```

pub mod csv;
pub mod html;
pub mod json;

use crate::dashboard::DashboardView;
use crate::error::{Error, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Json,
    Csv,
}

impl ReportFormat {
    /// Format implied by a file extension; anything unknown is CSV
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "html" | "htm" => ReportFormat::Html,
            "json" => ReportFormat::Json,
            _ => ReportFormat::Csv,
        }
    }
}

/// Generate a report in the appropriate format based on file extension
pub fn generate<P: AsRef<Path>>(path: P, view: &DashboardView) -> Result<()> {
    let path = path.as_ref();
    let mut file = std::fs::File::create(path).map_err(|e| Error::io(path, e))?;

    match ReportFormat::from_path(path) {
        ReportFormat::Html => html::write(&mut file, view).map_err(|e| Error::io(path, e)),
        ReportFormat::Json => json::write(&mut file, view),
        ReportFormat::Csv => csv::write(&mut file, view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ContentType, TitleRecord};
    use crate::dashboard::Dashboard;

    // ==========================================================================
    // FORMAT SELECTION TESTS
    // ==========================================================================

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ReportFormat::from_path(Path::new("out.html")), ReportFormat::Html);
        assert_eq!(ReportFormat::from_path(Path::new("out.HTM")), ReportFormat::Html);
        assert_eq!(ReportFormat::from_path(Path::new("out.json")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("out.csv")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("out")), ReportFormat::Csv);
        assert_eq!(ReportFormat::from_path(Path::new("out.txt")), ReportFormat::Csv);
    }

    // ==========================================================================
    // FILE OUTPUT TESTS
    // ==========================================================================

    #[test]
    fn test_generate_writes_each_format() {
        let catalog = Catalog::from_records(vec![
            TitleRecord::new("Roma", ContentType::Movie, 2018),
            TitleRecord::new("Dark", ContentType::TvShow, 2017),
        ]);
        let view = Dashboard::initial(&catalog);

        let dir = std::env::temp_dir().join(format!("flixdash-report-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        for name in ["snapshot.html", "snapshot.json", "snapshot.csv"] {
            let path = dir.join(name);
            generate(&path, &view).unwrap();
            let written = std::fs::read_to_string(&path).unwrap();
            assert!(written.contains("Roma"), "{} should contain table rows", name);
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_generate_into_missing_directory_fails() {
        let catalog = Catalog::default();
        let view = Dashboard::initial(&catalog);
        let err = generate("/definitely/not/here/out.csv", &view).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
