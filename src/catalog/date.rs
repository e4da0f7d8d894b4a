//! Lenient parsing of the `date_added` column
//!
//! The catalog export writes dates as `September 25, 2021`, sometimes with a
//! leading space. Older dumps and hand-edited files use ISO dates or the
//! spreadsheet `25-Sep-21` form. Anything else is treated as missing.

use chrono::{Datelike, NaiveDate};

/// Accepted layouts, tried in order. `%B` also accepts abbreviated month names.
const DATE_FORMATS: &[&str] = &["%B %d, %Y", "%Y-%m-%d", "%d-%b-%y"];

/// Parse a raw `date_added` value. Never fails: unparsable input is `None`.
pub fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Year component of a parsed date
pub fn year_of(date: Option<NaiveDate>) -> Option<i32> {
    date.map(|d| d.year())
}
