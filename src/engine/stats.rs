//! Summary statistics over a month-filtered record set

use crate::record::SaleRecord;
use serde::Serialize;

/// Aggregate totals for one calendar month.
///
/// `total_sold_items + total_not_sold_items` always equals the size of the
/// input the statistics were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleStatistics {
    #[serde(rename = "totalSaleAmount")]
    pub total_sale_amount: f64,
    #[serde(rename = "totalSoldItems")]
    pub total_sold_items: u64,
    #[serde(rename = "totalNotSoldItems")]
    pub total_not_sold_items: u64,
}

/// Sum the sale amount and count the sold/not-sold split.
///
/// The amount covers every record in the input regardless of its `sold`
/// flag; the two item counters partition the input by that flag.
pub fn compute_statistics(records: &[SaleRecord]) -> SaleStatistics {
    let mut stats = SaleStatistics {
        total_sale_amount: 0.0,
        total_sold_items: 0,
        total_not_sold_items: 0,
    };

    for record in records {
        stats.total_sale_amount += record.price;
        if record.sold {
            stats.total_sold_items += 1;
        } else {
            stats.total_not_sold_items += 1;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn make_record(id: i64, price: f64, sold: bool) -> SaleRecord {
        SaleRecord {
            id,
            title: format!("item {}", id),
            description: "test item".to_string(),
            price,
            category: "misc".to_string(),
            date_of_sale: DateTime::parse_from_rfc3339("2021-09-10T08:00:00+00:00").unwrap(),
            sold,
        }
    }

    #[test]
    fn test_empty_input() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.total_sale_amount, 0.0);
        assert_eq!(stats.total_sold_items, 0);
        assert_eq!(stats.total_not_sold_items, 0);
    }

    #[test]
    fn test_amount_includes_unsold() {
        let records = vec![
            make_record(1, 100.0, true),
            make_record(2, 50.5, false),
            make_record(3, 9.5, true),
        ];

        let stats = compute_statistics(&records);
        assert!((stats.total_sale_amount - 160.0).abs() < 1e-9);
        assert_eq!(stats.total_sold_items, 2);
        assert_eq!(stats.total_not_sold_items, 1);
    }

    #[test]
    fn test_sold_split_partitions_input() {
        let records: Vec<SaleRecord> = (0..37)
            .map(|i| make_record(i, i as f64, i % 3 == 0))
            .collect();

        let stats = compute_statistics(&records);
        assert_eq!(
            stats.total_sold_items + stats.total_not_sold_items,
            records.len() as u64
        );
    }

    #[test]
    fn test_json_field_names() {
        let stats = compute_statistics(&[make_record(1, 12.0, true)]);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"totalSaleAmount\""));
        assert!(json.contains("\"totalSoldItems\""));
        assert!(json.contains("\"totalNotSoldItems\""));
    }
}
