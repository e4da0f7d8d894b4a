//! Search box and raw data table
//!
//! With no search term the table is a preview of the first
//! [`TABLE_PREVIEW_ROWS`] rows of the filtered view. With a term, every row
//! whose title or director contains it (ignoring case) is shown, uncapped.

use crate::catalog::TitleRecord;
use serde::Serialize;

/// Rows shown when the search box is empty
pub const TABLE_PREVIEW_ROWS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView<'a> {
    pub rows: Vec<&'a TitleRecord>,
    /// Rows that qualified before the preview cap
    pub total_matches: usize,
    /// True when the preview cap hid some rows
    pub truncated: bool,
}

impl<'a> TableView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Case-insensitive substring match on title or director.
/// A missing director never matches.
pub fn matches(record: &TitleRecord, needle_lower: &str) -> bool {
    record.title.to_lowercase().contains(needle_lower)
        || record
            .director
            .as_deref()
            .map(|d| d.to_lowercase().contains(needle_lower))
            .unwrap_or(false)
}

pub fn search<'a>(view: &[&'a TitleRecord], term: &str) -> TableView<'a> {
    if term.is_empty() {
        let rows: Vec<&TitleRecord> = view.iter().copied().take(TABLE_PREVIEW_ROWS).collect();
        return TableView {
            truncated: view.len() > rows.len(),
            total_matches: view.len(),
            rows,
        };
    }

    let needle = term.to_lowercase();
    let rows: Vec<&TitleRecord> = view.iter().copied().filter(|r| matches(r, &needle)).collect();
    TableView { total_matches: rows.len(), truncated: false, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ContentType;

    fn with_director(title: &str, director: Option<&str>) -> TitleRecord {
        let mut r = TitleRecord::new(title, ContentType::Movie, 2020);
        r.director = director.map(str::to_string);
        r
    }

    fn many(n: usize) -> Vec<TitleRecord> {
        (0..n).map(|i| with_director(&format!("Title {}", i), None)).collect()
    }

    // ==========================================================================
    // PREVIEW (EMPTY SEARCH) TESTS
    // ==========================================================================

    #[test]
    fn test_empty_search_returns_min_100_n_in_order() {
        for n in [0, 1, 99, 100, 101, 250] {
            let records = many(n);
            let view: Vec<&TitleRecord> = records.iter().collect();
            let table = search(&view, "");

            assert_eq!(table.len(), n.min(TABLE_PREVIEW_ROWS), "n = {}", n);
            assert_eq!(table.total_matches, n);
            assert_eq!(table.truncated, n > TABLE_PREVIEW_ROWS);
            for (i, r) in table.rows.iter().enumerate() {
                assert_eq!(r.title, format!("Title {}", i));
            }
        }
    }

    // ==========================================================================
    // SEARCH TESTS
    // ==========================================================================

    #[test]
    fn test_search_title_case_insensitive() {
        let records = vec![
            with_director("Stranger Things", Some("The Duffer Brothers")),
            with_director("The Irishman", Some("Martin Scorsese")),
        ];
        let view: Vec<&TitleRecord> = records.iter().collect();

        let table = search(&view, "STRANGER");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].title, "Stranger Things");
    }

    #[test]
    fn test_search_director() {
        let records = vec![
            with_director("Stranger Things", Some("The Duffer Brothers")),
            with_director("The Irishman", Some("Martin Scorsese")),
        ];
        let view: Vec<&TitleRecord> = records.iter().collect();

        let table = search(&view, "scorsese");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].title, "The Irishman");
    }

    #[test]
    fn test_search_missing_director_does_not_match() {
        let records = vec![
            with_director("Alpha", None),
            with_director("Beta", Some("Ann Alphabet")),
        ];
        let view: Vec<&TitleRecord> = records.iter().collect();

        let table = search(&view, "alphab");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].title, "Beta");
    }

    #[test]
    fn test_search_is_uncapped() {
        let records = many(150);
        let view: Vec<&TitleRecord> = records.iter().collect();

        let table = search(&view, "title");
        assert_eq!(table.len(), 150);
        assert!(!table.truncated);
    }

    #[test]
    fn test_search_results_satisfy_predicate() {
        let records = vec![
            with_director("Night Moves", None),
            with_director("Day Shift", Some("J.J. Perry")),
            with_director("Midnight Mass", Some("Mike Flanagan")),
            with_director("Nightbooks", Some("David Yarovesky")),
        ];
        let view: Vec<&TitleRecord> = records.iter().collect();

        let table = search(&view, "Night");
        for r in &table.rows {
            let title_hit = r.title.to_lowercase().contains("night");
            let director_hit = r
                .director
                .as_ref()
                .map(|d| d.to_lowercase().contains("night"))
                .unwrap_or(false);
            assert!(title_hit || director_hit);
        }
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_search_nonexistent_gives_empty_table() {
        let records = many(20);
        let view: Vec<&TitleRecord> = records.iter().collect();

        let table = search(&view, "nonexistent_xyz");
        assert!(table.is_empty());
        assert_eq!(table.total_matches, 0);
    }

    #[test]
    fn test_search_over_empty_view() {
        assert!(search(&[], "anything").is_empty());
        assert!(search(&[], "").is_empty());
    }
}
