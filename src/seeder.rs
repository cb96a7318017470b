//! One-time catalog import from the upstream dataset
//!
//! Fetches the published product-transaction JSON over HTTPS and loads it
//! into a record store. Re-running replaces records by id, so a re-seed is
//! safe against an already-populated store.

use crate::record::SaleRecord;
use crate::store::{RecordStore, StoreError};
use reqwest::StatusCode;
use std::time::Duration;

#[derive(Debug)]
pub enum SeedError {
    Http(reqwest::Error),
    UpstreamStatus(StatusCode),
    Store(StoreError),
}

impl From<reqwest::Error> for SeedError {
    fn from(err: reqwest::Error) -> Self {
        SeedError::Http(err)
    }
}

impl From<StoreError> for SeedError {
    fn from(err: StoreError) -> Self {
        SeedError::Store(err)
    }
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Http(e) => write!(f, "Seed fetch failed: {}", e),
            SeedError::UpstreamStatus(code) => write!(f, "Upstream returned {}", code),
            SeedError::Store(e) => write!(f, "Seed write failed: {}", e),
        }
    }
}

impl std::error::Error for SeedError {}

/// Download and decode the seed dataset.
pub async fn fetch_seed_records(url: &str) -> Result<Vec<SaleRecord>, SeedError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client.get(url).send().await?;

    if !response.status().is_success() {
        return Err(SeedError::UpstreamStatus(response.status()));
    }

    let records: Vec<SaleRecord> = response.json().await?;
    Ok(records)
}

/// Fetch the dataset and bulk-insert it, returning how many records landed.
pub async fn seed_store(store: &dyn RecordStore, url: &str) -> Result<usize, SeedError> {
    let records = fetch_seed_records(url).await?;
    log::info!("📥 Fetched {} sale records from upstream", records.len());

    let inserted = store.bulk_insert(records).await?;
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SEED_URL;

    #[tokio::test]
    #[ignore] // Run only when testing against the live dataset
    async fn test_fetch_live_dataset() {
        let records = fetch_seed_records(DEFAULT_SEED_URL).await.unwrap();

        assert!(!records.is_empty());
        let first = &records[0];
        assert!(first.id > 0);
        assert!(!first.title.is_empty());
        assert!(!first.category.is_empty());
        assert!(first.price >= 0.0);
    }
}
