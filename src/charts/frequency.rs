//! Split-and-count for comma-separated list fields
//!
//! `country` and `listed_in` hold lists like `"France, United States"`. Before
//! counting, each row fans out into one (row, item) pair per list entry:
//!
//! ```text
//! row 1: "Dramas, Comedies"   ──►  Dramas, Comedies
//! row 2: "Dramas"             ──►  Dramas
//! row 3: None                 ──►  (nothing)
//!
//! counts: Dramas 2, Comedies 1
//! ```
//!
//! Items are trimmed and empty items dropped, so a trailing comma
//! (`"United States,"`) does not create a phantom entry.

use std::collections::HashMap;

/// Split one list field into its items
pub fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Count how often each item occurs across all lists.
///
/// Sorted by count, largest first. Items with equal counts stay in the order
/// they were first seen; no other tie-break is applied.
pub fn explode_counts<'a, I>(lists: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for item in lists.into_iter().flatten().flat_map(split_list) {
        match index.get(item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(item, counts.len());
                counts.push((item, 1));
            }
        }
    }

    // sort_by is stable, so first-seen order survives among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// [`explode_counts`] truncated to the `n` most frequent items
pub fn top_n<'a, I>(lists: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = explode_counts(lists);
    counts.truncate(n);
    counts
}
