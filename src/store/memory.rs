//! In-memory record store for tests and demos

use super::{RecordStore, StoreError};
use crate::record::SaleRecord;
use async_trait::async_trait;
use std::sync::RwLock;

/// Vec-backed store with the same replace-by-id semantics as the SQLite
/// backing. Reads and writes go through one `RwLock`.
pub struct InMemoryStore {
    records: RwLock<Vec<SaleRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Start pre-populated, records sorted by id
    pub fn with_records(mut records: Vec<SaleRecord>) -> Self {
        records.sort_by_key(|r| r.id);
        Self {
            records: RwLock::new(records),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn load_all(&self) -> Result<Vec<SaleRecord>, StoreError> {
        Ok(self.records.read().unwrap().clone())
    }

    async fn bulk_insert(&self, records: Vec<SaleRecord>) -> Result<usize, StoreError> {
        let inserted = records.len();
        let mut stored = self.records.write().unwrap();

        for record in records {
            match stored.iter_mut().find(|r| r.id == record.id) {
                Some(existing) => *existing = record,
                None => stored.push(record),
            }
        }
        stored.sort_by_key(|r| r.id);

        Ok(inserted)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.read().unwrap().len())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.records.write().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn make_record(id: i64) -> SaleRecord {
        SaleRecord {
            id,
            title: format!("item {}", id),
            description: "test item".to_string(),
            price: id as f64,
            category: "misc".to_string(),
            date_of_sale: DateTime::parse_from_rfc3339("2021-09-10T08:00:00+00:00").unwrap(),
            sold: false,
        }
    }

    #[tokio::test]
    async fn test_insert_and_load_ordered() {
        let store = InMemoryStore::new();
        store
            .bulk_insert(vec![make_record(3), make_record(1), make_record(2)])
            .await
            .unwrap();

        let records = store.load_all().await.unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_reinsert_replaces_by_id() {
        let store = InMemoryStore::with_records(vec![make_record(1)]);

        let mut updated = make_record(1);
        updated.title = "renamed".to_string();
        store.bulk_insert(vec![updated]).await.unwrap();

        let records = store.load_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "renamed");
    }

    #[tokio::test]
    async fn test_clear() {
        let store = InMemoryStore::with_records(vec![make_record(1), make_record(2)]);
        store.clear().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(store.load_all().await.unwrap().is_empty());
    }
}
