//! Salescope - month-scoped analytics over a product-sale catalog
//!
//! The crate seeds a SQLite store from the upstream product-transaction
//! dataset, then answers month-scoped queries against it: searchable
//! paginated listings, sale statistics, a ten-bucket price histogram,
//! per-category counts, and a combined view of all four computed from one
//! consistent snapshot.


pub mod config;
pub mod engine;
pub mod record;
pub mod seeder;
pub mod store;
