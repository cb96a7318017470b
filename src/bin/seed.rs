//! Seed Binary - one-time catalog import
//!
//! Downloads the upstream product-transaction dataset and loads it into the
//! SQLite store. A populated store is left alone unless `--force` is given,
//! which clears it and re-imports from scratch.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin seed
//! cargo run --release --bin seed -- --force
//! ```
//!
//! ## Environment Variables
//!
//! - SALESCOPE_DB_PATH - SQLite database path (default: data/salescope.db)
//! - SALESCOPE_SEED_URL - Dataset URL (default: upstream S3 dataset)
//! - RUST_LOG - Logging level (optional, default: info)

use salescope::config::Config;
use salescope::seeder::seed_store;
use salescope::store::{RecordStore, SqliteStore};
use std::env;
use std::path::Path;

fn parse_force_from_args() -> bool {
    env::args().any(|arg| arg == "--force")
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = Config::from_env();
    let force = parse_force_from_args();

    log::info!("🚀 Seeding sale catalog");
    log::info!("   Database: {}", config.db_path);
    log::info!("   Source: {}", config.seed_url);

    if let Some(parent) = Path::new(&config.db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let store = SqliteStore::open(&config.db_path)?;
    let existing = store.count().await?;

    if existing > 0 {
        if force {
            log::warn!("Store holds {} records, clearing before re-seed", existing);
            store.clear().await?;
        } else {
            log::info!(
                "✅ Store already holds {} records, nothing to do (pass --force to re-seed)",
                existing
            );
            return Ok(());
        }
    }

    let inserted = seed_store(&store, &config.seed_url).await?;
    log::info!("✅ Seeded {} sale records into {}", inserted, config.db_path);

    Ok(())
}
