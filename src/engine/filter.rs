//! Record filtering: month subset first, then optional text search

use super::month::Month;
use crate::record::SaleRecord;

/// Keep records whose sale falls in the given calendar month, any year.
pub fn filter_by_month(records: &[SaleRecord], month: Month) -> Vec<SaleRecord> {
    records
        .iter()
        .filter(|r| r.sale_month0() == month.index())
        .cloned()
        .collect()
}

/// Keep records matching a free-text search term.
///
/// An empty term keeps everything. Otherwise the term matches
/// case-insensitively as a substring of the title, the description, or the
/// decimal string form of the price. Search always runs on an already
/// month-filtered subset; it never widens one.
pub fn filter_by_search(records: &[SaleRecord], term: &str) -> Vec<SaleRecord> {
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| matches_search(r, &needle))
        .cloned()
        .collect()
}

fn matches_search(record: &SaleRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.price.to_string().contains(needle)
}
