//! Headline counts for the metrics row

use crate::catalog::{ContentType, TitleRecord};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total: usize,
    pub movies: usize,
    pub tv_shows: usize,
}

impl Metrics {
    pub fn from_records(records: &[&TitleRecord]) -> Self {
        let mut metrics = Self::default();
        metrics.total = records.len();

        for r in records {
            match r.content_type {
                ContentType::Movie => metrics.movies += 1,
                ContentType::TvShow => metrics.tv_shows += 1,
            }
        }

        metrics
    }
}
