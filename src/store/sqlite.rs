//! SQLite-backed record store

use super::{RecordStore, StoreError};
use crate::record::SaleRecord;
use async_trait::async_trait;
use chrono::DateTime;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Durable store over a single `transactions` table.
///
/// The schema is created idempotently on open and the database runs in WAL
/// mode. All access serializes through one connection behind a mutex; the
/// catalog is small enough that pooling buys nothing here.
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `db_path` and ensure the
    /// schema exists.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS transactions (
                id              INTEGER PRIMARY KEY,
                title           TEXT NOT NULL,
                description     TEXT NOT NULL,
                price           REAL NOT NULL,
                category        TEXT NOT NULL,
                date_of_sale    TEXT NOT NULL,
                sold            INTEGER NOT NULL
            )
            "#,
            [],
        )?;

        let existing: i64 = conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| {
            row.get(0)
        })?;
        log::info!("📊 Sale store ready ({} records)", existing);

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn load_all(&self) -> Result<Vec<SaleRecord>, StoreError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, title, description, price, category, date_of_sale, sold
             FROM transactions
             ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, bool>(6)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (id, title, description, price, category, raw_date, sold) = row?;
            let date_of_sale = DateTime::parse_from_rfc3339(&raw_date)
                .map_err(|_| StoreError::InvalidTimestamp(raw_date))?;
            records.push(SaleRecord {
                id,
                title,
                description,
                price,
                category,
                date_of_sale,
                sold,
            });
        }

        Ok(records)
    }

    async fn bulk_insert(&self, records: Vec<SaleRecord>) -> Result<usize, StoreError> {
        let inserted = records.len();
        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        for record in &records {
            tx.execute(
                "INSERT OR REPLACE INTO transactions
                     (id, title, description, price, category, date_of_sale, sold)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id,
                    record.title,
                    record.description,
                    record.price,
                    record.category,
                    record.date_of_sale.to_rfc3339(),
                    record.sold,
                ],
            )?;
        }

        tx.commit()?;
        log::debug!("📥 Stored {} sale records", inserted);

        Ok(inserted)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| {
            row.get(0)
        })?;
        Ok(count as usize)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM transactions", [])?;
        Ok(())
    }
}
