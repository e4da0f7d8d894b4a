//! Chart panels
//!
//! Each panel is a pure function of the filtered view and produces a
//! [`ChartPanel`]: the chart kind plus the already-aggregated points. Drawing
//! happens in the browser (D3), which receives the panels as JSON.
//!
//! | Panel | Kind | Source field | Order |
//! |-------|------|--------------|-------|
//! | Content type distribution | donut | `type` | count, descending |
//! | Top 10 genres | horizontal bar | `listed_in` (split) | count, ascending (largest bar on top) |
//! | Top 10 countries | vertical bar | `country` (split) | count, descending |
//! | Content added over time | area | `year_added` | year, ascending |
//!
//! Every panel accepts an empty view and returns a panel with no points.

pub mod frequency;

use crate::catalog::{ContentType, TitleRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of bars in the genre and country rankings
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Donut,
    HorizontalBar,
    VerticalBar,
    Area,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: usize,
}

impl ChartPoint {
    fn new(label: impl Into<String>, value: usize) -> Self {
        Self { label: label.into(), value }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub kind: ChartKind,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<ChartPoint>,
}

impl ChartPanel {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Value for a label, if present
    pub fn value_of(&self, label: &str) -> Option<usize> {
        self.points.iter().find(|p| p.label == label).map(|p| p.value)
    }
}

/// All four panels for one filtered view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSet {
    pub type_distribution: ChartPanel,
    pub top_genres: ChartPanel,
    pub top_countries: ChartPanel,
    pub growth: ChartPanel,
}

impl ChartSet {
    pub fn from_records(records: &[&TitleRecord]) -> Self {
        Self {
            type_distribution: type_distribution(records),
            top_genres: top_genres(records),
            top_countries: top_countries(records),
            growth: growth_over_time(records),
        }
    }
}

/// Titles per content type, most common first
pub fn type_distribution(records: &[&TitleRecord]) -> ChartPanel {
    let mut counts: Vec<(ContentType, usize)> = Vec::new();
    for r in records {
        match counts.iter_mut().find(|(t, _)| *t == r.content_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((r.content_type, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    ChartPanel {
        kind: ChartKind::Donut,
        title: "Content Type Distribution",
        x_label: "Type",
        y_label: "Count",
        points: counts
            .into_iter()
            .map(|(t, n)| ChartPoint::new(t.as_str(), n))
            .collect(),
    }
}

/// Ten most frequent genres. Points run from smallest to largest so the
/// horizontal bar chart stacks the biggest bar at the top.
pub fn top_genres(records: &[&TitleRecord]) -> ChartPanel {
    let mut top = frequency::top_n(records.iter().map(|r| r.listed_in.as_deref()), TOP_N);
    top.reverse();

    ChartPanel {
        kind: ChartKind::HorizontalBar,
        title: "Top 10 Genres",
        x_label: "Count",
        y_label: "Genre",
        points: top.into_iter().map(|(g, n)| ChartPoint::new(g, n)).collect(),
    }
}

/// Ten most frequent producing countries, in count order
pub fn top_countries(records: &[&TitleRecord]) -> ChartPanel {
    let top = frequency::top_n(records.iter().map(|r| r.country.as_deref()), TOP_N);

    ChartPanel {
        kind: ChartKind::VerticalBar,
        title: "Top 10 Countries Producing Content",
        x_label: "Country",
        y_label: "Count",
        points: top.into_iter().map(|(c, n)| ChartPoint::new(c, n)).collect(),
    }
}

/// Titles added per year. Rows without a `year_added` are left out and
/// years with no titles do not appear.
pub fn growth_over_time(records: &[&TitleRecord]) -> ChartPanel {
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for year in records.iter().filter_map(|r| r.year_added) {
        *per_year.entry(year).or_insert(0) += 1;
    }

    ChartPanel {
        kind: ChartKind::Area,
        title: "Content Added Over Time",
        x_label: "Year Added",
        y_label: "Count",
        points: per_year
            .into_iter()
            .map(|(y, n)| ChartPoint::new(y.to_string(), n))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(t: ContentType, year: i32, genres: Option<&str>, country: Option<&str>) -> TitleRecord {
        let mut r = TitleRecord::new("t", t, year);
        r.listed_in = genres.map(str::to_string);
        r.country = country.map(str::to_string);
        r
    }

    fn scenario() -> Vec<TitleRecord> {
        vec![
            titled(ContentType::Movie, 2015, Some("Drama, Comedy"), Some("USA")),
            titled(ContentType::TvShow, 2019, Some("Drama"), Some("USA, UK")),
            titled(ContentType::Movie, 2005, Some("Action"), Some("UK")),
        ]
    }

    // ==========================================================================
    // EMPTY VIEW TESTS
    // ==========================================================================
    //
    // An empty filter result must render as empty charts, never panic.
    // ==========================================================================

    #[test]
    fn test_all_panels_accept_empty_view() {
        let charts = ChartSet::from_records(&[]);
        assert!(charts.type_distribution.is_empty());
        assert!(charts.top_genres.is_empty());
        assert!(charts.top_countries.is_empty());
        assert!(charts.growth.is_empty());
    }

    // ==========================================================================
    // TYPE DISTRIBUTION TESTS
    // ==========================================================================

    #[test]
    fn test_type_distribution_one_sector_per_type() {
        let records = scenario();
        let view: Vec<&TitleRecord> = records.iter().collect();
        let panel = type_distribution(&view);

        assert_eq!(panel.kind, ChartKind::Donut);
        assert_eq!(panel.points.len(), 2);
        assert_eq!(panel.points[0], ChartPoint::new("Movie", 2));
        assert_eq!(panel.points[1], ChartPoint::new("TV Show", 1));
    }

    #[test]
    fn test_type_distribution_single_type() {
        let records = vec![titled(ContentType::TvShow, 2020, None, None)];
        let view: Vec<&TitleRecord> = records.iter().collect();
        let panel = type_distribution(&view);
        assert_eq!(panel.points, vec![ChartPoint::new("TV Show", 1)]);
    }

    // ==========================================================================
    // TOP GENRE / COUNTRY TESTS
    // ==========================================================================

    #[test]
    fn test_scenario_top_genres() {
        let records = scenario();
        let view: Vec<&TitleRecord> = records.iter().collect();
        let panel = top_genres(&view);

        assert_eq!(panel.points.len(), 3);
        assert_eq!(panel.value_of("Drama"), Some(2));
        assert_eq!(panel.value_of("Comedy"), Some(1));
        assert_eq!(panel.value_of("Action"), Some(1));
    }

    #[test]
    fn test_genres_ascending_for_horizontal_bars() {
        let records = scenario();
        let view: Vec<&TitleRecord> = records.iter().collect();
        let panel = top_genres(&view);

        assert_eq!(panel.kind, ChartKind::HorizontalBar);
        let values: Vec<usize> = panel.points.iter().map(|p| p.value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "got {:?}", values);
        assert_eq!(panel.points.last().map(|p| p.label.as_str()), Some("Drama"));
    }

    #[test]
    fn test_scenario_top_countries() {
        let records = scenario();
        let view: Vec<&TitleRecord> = records.iter().collect();
        let panel = top_countries(&view);

        assert_eq!(panel.kind, ChartKind::VerticalBar);
        assert_eq!(panel.points.len(), 2);
        assert_eq!(panel.value_of("USA"), Some(2));
        assert_eq!(panel.value_of("UK"), Some(2));
    }

    #[test]
    fn test_countries_descending() {
        let records = vec![
            titled(ContentType::Movie, 2020, None, Some("India")),
            titled(ContentType::Movie, 2020, None, Some("Japan, India")),
            titled(ContentType::Movie, 2020, None, Some("India, Japan, Spain")),
        ];
        let view: Vec<&TitleRecord> = records.iter().collect();
        let panel = top_countries(&view);

        let labels: Vec<&str> = panel.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["India", "Japan", "Spain"]);
    }

    #[test]
    fn test_top_panels_capped_at_ten() {
        let records: Vec<TitleRecord> = (0..40)
            .map(|i| {
                let g = format!("Genre {}, Genre {}", i, i % 7);
                let c = format!("Country {}", i);
                titled(ContentType::Movie, 2020, Some(g.as_str()), Some(c.as_str()))
            })
            .collect();
        let view: Vec<&TitleRecord> = records.iter().collect();

        assert_eq!(top_genres(&view).points.len(), TOP_N);
        assert_eq!(top_countries(&view).points.len(), TOP_N);
    }

    #[test]
    fn test_missing_list_fields_are_skipped() {
        let records = vec![
            titled(ContentType::Movie, 2020, None, None),
            titled(ContentType::Movie, 2020, Some("Horror"), None),
        ];
        let view: Vec<&TitleRecord> = records.iter().collect();

        assert_eq!(top_genres(&view).points, vec![ChartPoint::new("Horror", 1)]);
        assert!(top_countries(&view).is_empty());
    }

    // ==========================================================================
    // GROWTH TESTS
    // ==========================================================================

    #[test]
    fn test_growth_groups_by_year_added() {
        let records = vec![
            TitleRecord::new("a", ContentType::Movie, 2000).with_date_added("May 1, 2019"),
            TitleRecord::new("b", ContentType::Movie, 2000).with_date_added("January 9, 2017"),
            TitleRecord::new("c", ContentType::Movie, 2000).with_date_added("June 2, 2019"),
            TitleRecord::new("d", ContentType::Movie, 2000).with_date_added("not a date"),
        ];
        let view: Vec<&TitleRecord> = records.iter().collect();
        let panel = growth_over_time(&view);

        assert_eq!(panel.kind, ChartKind::Area);
        assert_eq!(
            panel.points,
            vec![ChartPoint::new("2017", 1), ChartPoint::new("2019", 2)]
        );
    }

    #[test]
    fn test_growth_has_no_zero_fill() {
        let records = vec![
            TitleRecord::new("a", ContentType::Movie, 2000).with_date_added("May 1, 2010"),
            TitleRecord::new("b", ContentType::Movie, 2000).with_date_added("May 1, 2020"),
        ];
        let view: Vec<&TitleRecord> = records.iter().collect();
        assert_eq!(growth_over_time(&view).points.len(), 2);
    }
}
