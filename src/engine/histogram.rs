//! Fixed price-range histogram over a month-filtered record set

use crate::record::SaleRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One of the ten fixed price ranges.
///
/// The ranges chain on upper bounds, so together they cover every
/// non-negative price exactly once: anything at or below 100 lands in
/// "0-100", anything above 900 lands in "901-above", and each range in
/// between takes the prices above the previous bound up to its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBucket {
    UpTo100,
    UpTo200,
    UpTo300,
    UpTo400,
    UpTo500,
    UpTo600,
    UpTo700,
    UpTo800,
    UpTo900,
    Above900,
}

impl PriceBucket {
    pub fn label(&self) -> &'static str {
        match self {
            PriceBucket::UpTo100 => "0-100",
            PriceBucket::UpTo200 => "101-200",
            PriceBucket::UpTo300 => "201-300",
            PriceBucket::UpTo400 => "301-400",
            PriceBucket::UpTo500 => "401-500",
            PriceBucket::UpTo600 => "501-600",
            PriceBucket::UpTo700 => "601-700",
            PriceBucket::UpTo800 => "701-800",
            PriceBucket::UpTo900 => "801-900",
            PriceBucket::Above900 => "901-above",
        }
    }

    /// Bucket for a price. Defined for non-negative prices only.
    pub fn for_price(price: f64) -> PriceBucket {
        if price <= 100.0 {
            PriceBucket::UpTo100
        } else if price <= 200.0 {
            PriceBucket::UpTo200
        } else if price <= 300.0 {
            PriceBucket::UpTo300
        } else if price <= 400.0 {
            PriceBucket::UpTo400
        } else if price <= 500.0 {
            PriceBucket::UpTo500
        } else if price <= 600.0 {
            PriceBucket::UpTo600
        } else if price <= 700.0 {
            PriceBucket::UpTo700
        } else if price <= 800.0 {
            PriceBucket::UpTo800
        } else if price <= 900.0 {
            PriceBucket::UpTo900
        } else {
            PriceBucket::Above900
        }
    }

    /// Position in display order (0 = "0-100", 9 = "901-above")
    pub fn position(&self) -> usize {
        match self {
            PriceBucket::UpTo100 => 0,
            PriceBucket::UpTo200 => 1,
            PriceBucket::UpTo300 => 2,
            PriceBucket::UpTo400 => 3,
            PriceBucket::UpTo500 => 4,
            PriceBucket::UpTo600 => 5,
            PriceBucket::UpTo700 => 6,
            PriceBucket::UpTo800 => 7,
            PriceBucket::UpTo900 => 8,
            PriceBucket::Above900 => 9,
        }
    }

    pub fn all() -> [PriceBucket; 10] {
        [
            PriceBucket::UpTo100,
            PriceBucket::UpTo200,
            PriceBucket::UpTo300,
            PriceBucket::UpTo400,
            PriceBucket::UpTo500,
            PriceBucket::UpTo600,
            PriceBucket::UpTo700,
            PriceBucket::UpTo800,
            PriceBucket::UpTo900,
            PriceBucket::Above900,
        ]
    }
}

/// Dense per-bucket counters. All ten buckets are always present, zero
/// counts included; serialization emits them as a map in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceHistogram {
    counts: [u64; 10],
}

impl PriceHistogram {
    pub fn count(&self, bucket: PriceBucket) -> u64 {
        self.counts[bucket.position()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Serialize for PriceHistogram {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(10))?;
        for bucket in PriceBucket::all() {
            map.serialize_entry(bucket.label(), &self.count(bucket))?;
        }
        map.end()
    }
}

/// Count records per price range. Each record lands in exactly one bucket,
/// so the bucket totals sum to the input size.
pub fn build_histogram(records: &[SaleRecord]) -> PriceHistogram {
    let mut histogram = PriceHistogram::default();
    for record in records {
        histogram.counts[PriceBucket::for_price(record.price).position()] += 1;
    }
    histogram
}
