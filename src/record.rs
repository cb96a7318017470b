//! Sale record model matching the upstream product-transaction dataset

use chrono::{DateTime, Datelike, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single product sale as published by the upstream dataset.
///
/// Field names follow the dataset's JSON keys (`dateOfSale` is camelCase on
/// the wire). Unknown keys such as `image` are ignored on deserialization.
/// The sale timestamp keeps the UTC offset it arrived with so the calendar
/// month is read in the record's own local time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "dateOfSale")]
    pub date_of_sale: DateTime<FixedOffset>,
    pub sold: bool,
}

impl SaleRecord {
    /// Zero-based month of the sale (0 = January), in the record's own offset
    pub fn sale_month0(&self) -> u32 {
        self.date_of_sale.month0()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataset_record() {
        let line = r#"{"id":1,"title":"Fjallraven Foldsack No 1 Backpack","price":329.85,"description":"Your perfect pack for everyday use","category":"men's clothing","image":"https://example.com/img.jpg","sold":false,"dateOfSale":"2021-11-27T20:29:54+05:30"}"#;

        let record: SaleRecord = serde_json::from_str(line).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.title, "Fjallraven Foldsack No 1 Backpack");
        assert_eq!(record.price, 329.85);
        assert_eq!(record.category, "men's clothing");
        assert!(!record.sold);
        // November in the record's own +05:30 offset
        assert_eq!(record.sale_month0(), 10);
    }

    #[test]
    fn test_offset_preserved_on_roundtrip() {
        let line = r#"{"id":7,"title":"t","price":10.0,"description":"d","category":"c","sold":true,"dateOfSale":"2022-01-31T23:30:00-08:00"}"#;

        let record: SaleRecord = serde_json::from_str(line).unwrap();
        // January local time, even though this instant is already February in UTC
        assert_eq!(record.sale_month0(), 0);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"dateOfSale\""));
        assert!(json.contains("-08:00"));
    }
}
