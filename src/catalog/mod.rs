//! Catalog loading
//!
//! Reads the title catalog CSV once and turns every row into a [`TitleRecord`].
//!
//! # Lifecycle
//!
//! A [`Catalog`] is built once at startup and never changes afterwards: there
//! is no `&mut` API. The CLI wraps it in an `Arc` and hands that to every
//! request, so the file is read exactly once per process and there is nothing
//! to invalidate.
//!
//! # Columns
//!
//! Columns are looked up by header name, so their order in the file does not
//! matter. Only `title`, `type` and `release_year` are required. Every other
//! column may be missing from the file entirely, in which case the field is
//! `None` for all rows.
//!
//! ```text
//! show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
//! s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,"September 25, 2021",2020,PG-13,90 min,Documentaries,...
//! ```

pub mod date;

use crate::error::{Error, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Kind of title. The catalog only knows these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContentType {
    #[serde(rename = "Movie")]
    Movie,
    #[serde(rename = "TV Show")]
    TvShow,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Movie, ContentType::TvShow];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Movie => "Movie",
            ContentType::TvShow => "TV Show",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "Movie" => Ok(ContentType::Movie),
            "TV Show" => Ok(ContentType::TvShow),
            other => Err(format!("unknown content type '{}'", other)),
        }
    }
}

/// One row of the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleRecord {
    pub show_id: Option<String>,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub director: Option<String>,
    pub cast: Option<String>,
    /// Comma-separated country names
    pub country: Option<String>,
    pub date_added: Option<chrono::NaiveDate>,
    pub release_year: i32,
    pub rating: Option<String>,
    pub duration: Option<String>,
    /// Comma-separated genre names
    pub listed_in: Option<String>,
    pub description: Option<String>,
    /// Derived from `date_added`; `None` when that is missing or unparsable
    pub year_added: Option<i32>,
}

impl TitleRecord {
    /// Minimal record, mostly useful for building fixtures
    pub fn new(title: impl Into<String>, content_type: ContentType, release_year: i32) -> Self {
        Self {
            show_id: None,
            content_type,
            title: title.into(),
            director: None,
            cast: None,
            country: None,
            date_added: None,
            release_year,
            rating: None,
            duration: None,
            listed_in: None,
            description: None,
            year_added: None,
        }
    }

    /// Set `date_added` from a raw catalog string and derive `year_added`
    pub fn with_date_added(mut self, raw: &str) -> Self {
        self.date_added = date::parse_date_added(raw);
        self.year_added = date::year_of(self.date_added);
        self
    }
}

/// Column positions resolved from the header row
#[derive(Debug)]
struct Columns {
    title: usize,
    content_type: usize,
    release_year: usize,
    show_id: Option<usize>,
    director: Option<usize>,
    cast: Option<usize>,
    country: Option<usize>,
    date_added: Option<usize>,
    rating: Option<usize>,
    duration: Option<usize>,
    listed_in: Option<usize>,
    description: Option<usize>,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &'static str| find(name).ok_or(Error::MissingColumn(name));

        Ok(Self {
            title: require("title")?,
            content_type: require("type")?,
            release_year: require("release_year")?,
            show_id: find("show_id"),
            director: find("director"),
            cast: find("cast"),
            country: find("country"),
            date_added: find("date_added"),
            rating: find("rating"),
            duration: find("duration"),
            listed_in: find("listed_in"),
            description: find("description"),
        })
    }
}

/// Non-empty text at an optional column position
fn text(record: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| record.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Why a row was left out of the catalog
#[derive(Debug, PartialEq)]
enum RowError {
    ContentType(String),
    ReleaseYear(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::ContentType(raw) => write!(f, "unknown type '{}'", raw),
            RowError::ReleaseYear(raw) => write!(f, "bad release_year '{}'", raw),
        }
    }
}

fn parse_row(record: &csv::StringRecord, cols: &Columns) -> std::result::Result<TitleRecord, RowError> {
    let raw_type = record.get(cols.content_type).unwrap_or("");
    let content_type = raw_type
        .parse::<ContentType>()
        .map_err(|_| RowError::ContentType(raw_type.to_string()))?;

    let raw_year = record.get(cols.release_year).unwrap_or("").trim();
    let release_year = raw_year
        .parse::<i32>()
        .map_err(|_| RowError::ReleaseYear(raw_year.to_string()))?;

    let date_added = cols
        .date_added
        .and_then(|i| record.get(i))
        .and_then(date::parse_date_added);

    Ok(TitleRecord {
        show_id: text(record, cols.show_id),
        content_type,
        title: record.get(cols.title).unwrap_or("").trim().to_string(),
        director: text(record, cols.director),
        cast: text(record, cols.cast),
        country: text(record, cols.country),
        date_added,
        release_year,
        rating: text(record, cols.rating),
        duration: text(record, cols.duration),
        listed_in: text(record, cols.listed_in),
        description: text(record, cols.description),
        year_added: date::year_of(date_added),
    })
}

/// The full, immutable title catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    source: Option<PathBuf>,
    records: Vec<TitleRecord>,
    skipped_rows: usize,
}

impl Catalog {
    /// Load the catalog from a CSV file. A missing or unreadable file is fatal.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;

        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());

        info!(
            "loaded {} titles from {} ({} rows skipped)",
            catalog.len(),
            path.display(),
            catalog.skipped_rows
        );
        Ok(catalog)
    }

    /// Parse a catalog from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let cols = Columns::resolve(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut skipped_rows = 0;

        for (i, row) in rdr.records().enumerate() {
            let row = row?;
            match parse_row(&row, &cols) {
                Ok(record) => records.push(record),
                Err(e) => {
                    // +2: one for the header, one for 1-based line numbers
                    warn!("skipping row {}: {}", i + 2, e);
                    skipped_rows += 1;
                }
            }
        }

        Ok(Self { source: None, records, skipped_rows })
    }

    /// Build a catalog from records already in memory
    pub fn from_records(records: Vec<TitleRecord>) -> Self {
        Self { source: None, records, skipped_rows: 0 }
    }

    pub fn records(&self) -> &[TitleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Distinct content types, in the order they first appear
    pub fn content_types(&self) -> Vec<ContentType> {
        let mut seen = Vec::new();
        for r in &self.records {
            if !seen.contains(&r.content_type) {
                seen.push(r.content_type);
                if seen.len() == ContentType::ALL.len() {
                    break;
                }
            }
        }
        seen
    }

    /// Smallest and largest release year, `None` for an empty catalog
    pub fn release_year_bounds(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.release_year).min()?;
        let max = self.records.iter().map(|r| r.release_year).max()?;
        Some((min, max))
    }
}
