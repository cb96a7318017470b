//! Record Store - persistence boundary for sale records
//!
//! The engine only ever reads a full snapshot; writes happen during seeding.
//! Two backings implement the same trait:
//! - `SqliteStore` - the durable store the binaries run against
//! - `InMemoryStore` - cheap backing for tests and demos

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use crate::record::SaleRecord;
use async_trait::async_trait;

#[derive(Debug)]
pub enum StoreError {
    Database(rusqlite::Error),
    InvalidTimestamp(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Database(e) => write!(f, "Database error: {}", e),
            StoreError::InvalidTimestamp(t) => write!(f, "Invalid sale timestamp: {}", t),
        }
    }
}

impl std::error::Error for StoreError {}

/// Storage for the sale catalog.
///
/// `load_all` is the snapshot read the query engine builds every view from;
/// it returns records ordered by `id` so listings are stable across runs.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Read the full catalog, ordered by record id
    async fn load_all(&self) -> Result<Vec<SaleRecord>, StoreError>;

    /// Insert or replace records by id, returning how many went in
    async fn bulk_insert(&self, records: Vec<SaleRecord>) -> Result<usize, StoreError>;

    /// Number of records currently stored
    async fn count(&self) -> Result<usize, StoreError>;

    /// Remove every record
    async fn clear(&self) -> Result<(), StoreError>;
}
