//! Filtered views over the record sequence.

use crate::models::category::CategoryFilter;
use crate::models::record::Record;

/// Records passing both the category filter and the free-text search, in
/// store order.
///
/// The search is trimmed and lower-cased, then looked up as a substring of
/// `technician` or `notes`. A blank search matches everything.
pub fn filter<'a>(
    records: &'a [Record],
    category: &CategoryFilter,
    search: &str,
) -> Vec<&'a Record> {
    let needle = search.trim().to_lowercase();

    records
        .iter()
        .filter(|r| category.matches(&r.item))
        .filter(|r| needle.is_empty() || matches_text(r, &needle))
        .collect()
}

fn matches_text(r: &Record, needle: &str) -> bool {
    r.technician.to_lowercase().contains(needle) || r.notes.to_lowercase().contains(needle)
}
