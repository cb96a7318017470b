//! Aggregation Engine - month-scoped queries over the sale catalog
//!
//! Everything here is read-only: the engine takes one snapshot from the
//! Record Store and derives each response from it with pure functions.
//!
//! # Architecture
//!
//! ```text
//! RecordStore::load_all() → snapshot
//!     ↓
//! Month::resolve() → filter_by_month()
//!     ↓
//! ├─ filter_by_search() → Pagination → ListingPage
//! ├─ compute_statistics() → SaleStatistics
//! ├─ build_histogram() → PriceHistogram
//! └─ build_category_counts() → Vec<CategoryCount>
//!     ↓
//! QueryEngine::combined() → CombinedView (all four, one snapshot)
//! ```

pub mod category;
pub mod filter;
pub mod histogram;
pub mod listing;
pub mod month;
pub mod stats;
pub mod views;

pub use category::{build_category_counts, CategoryCount};
pub use filter::{filter_by_month, filter_by_search};
pub use histogram::{build_histogram, PriceBucket, PriceHistogram};
pub use listing::{Pagination, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use month::Month;
pub use stats::{compute_statistics, SaleStatistics};
pub use views::{CombinedView, ListingPage, ListingRequest, QueryEngine};

use crate::store::StoreError;

#[derive(Debug)]
pub enum EngineError {
    /// Month name did not resolve; carries the rejected input
    InvalidMonth(String),
    /// Snapshot read failed; no partial results are produced
    Store(StoreError),
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::Store(err)
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidMonth(name) => write!(f, "Invalid month name: {:?}", name),
            EngineError::Store(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {}
