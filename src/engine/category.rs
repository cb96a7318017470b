//! Per-category record counts over a month-filtered record set

use crate::record::SaleRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// How many records fell into one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Count records per distinct category.
///
/// Only categories observed in the input appear; the counts sum to the
/// input size. Entries come back alphabetically by category label, which
/// keeps output deterministic, but callers should not depend on the order.
pub fn build_category_counts(records: &[SaleRecord]) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(record.category.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn make_record(id: i64, category: &str) -> SaleRecord {
        SaleRecord {
            id,
            title: format!("item {}", id),
            description: "test item".to_string(),
            price: 10.0,
            category: category.to_string(),
            date_of_sale: DateTime::parse_from_rfc3339("2021-09-10T08:00:00+00:00").unwrap(),
            sold: true,
        }
    }

    #[test]
    fn test_empty_input_has_no_entries() {
        assert!(build_category_counts(&[]).is_empty());
    }

    #[test]
    fn test_only_observed_categories() {
        let records = vec![
            make_record(1, "electronics"),
            make_record(2, "clothing"),
            make_record(3, "electronics"),
        ];

        let counts = build_category_counts(&records);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].category, "clothing");
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[1].category, "electronics");
        assert_eq!(counts[1].count, 2);
    }

    #[test]
    fn test_counts_sum_to_input_size() {
        let categories = ["a", "b", "c", "a", "a", "b", "d"];
        let records: Vec<SaleRecord> = categories
            .iter()
            .enumerate()
            .map(|(i, c)| make_record(i as i64, c))
            .collect();

        let counts = build_category_counts(&records);
        let total: u64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, records.len() as u64);
    }

    #[test]
    fn test_json_shape() {
        let counts = build_category_counts(&[make_record(1, "books")]);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"[{"category":"books","count":1}]"#);
    }
}
