//! Dashboard Binary - month-scoped queries printed as JSON
//!
//! Runs one query against the seeded store and writes the response to
//! stdout, so results pipe cleanly into `jq` or a file.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin dashboard -- --month June
//! cargo run --release --bin dashboard -- --month June --view list --search mouse --page 2 --per-page 10
//! ```
//!
//! Views: list | statistics | barchart | piechart | combined (default)
//!
//! ## Environment Variables
//!
//! - SALESCOPE_DB_PATH - SQLite database path (default: data/salescope.db)
//! - RUST_LOG - Logging level (optional, default: warn)

use salescope::config::Config;
use salescope::engine::{ListingRequest, Pagination, QueryEngine};
use salescope::store::SqliteStore;
use std::sync::Arc;

struct DashboardArgs {
    month: String,
    view: String,
    search: String,
    pagination: Pagination,
}

impl DashboardArgs {
    fn from_args() -> Result<Self, Box<dyn std::error::Error>> {
        let args: Vec<String> = std::env::args().collect();

        let month = args
            .windows(2)
            .find(|w| w[0] == "--month")
            .map(|w| w[1].clone())
            .ok_or("Missing --month argument. Usage: dashboard --month <name> [--view combined]")?;

        let view = args
            .windows(2)
            .find(|w| w[0] == "--view")
            .map(|w| w[1].clone())
            .unwrap_or_else(|| "combined".to_string());

        let search = args
            .windows(2)
            .find(|w| w[0] == "--search")
            .map(|w| w[1].clone())
            .unwrap_or_default();

        let page = args.windows(2).find(|w| w[0] == "--page").map(|w| w[1].clone());
        let per_page = args
            .windows(2)
            .find(|w| w[0] == "--per-page")
            .map(|w| w[1].clone());

        Ok(Self {
            month,
            view,
            search,
            pagination: Pagination::from_params(page.as_deref(), per_page.as_deref()),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let args = DashboardArgs::from_args()?;
    let config = Config::from_env();

    let store = Arc::new(SqliteStore::open(&config.db_path)?);
    let engine = QueryEngine::new(store);

    let request = ListingRequest::new(args.month.clone())
        .with_search(args.search.clone())
        .with_pagination(args.pagination);

    let output = match args.view.as_str() {
        "list" => serde_json::to_string_pretty(&engine.list(&request).await?)?,
        "statistics" => serde_json::to_string_pretty(&engine.statistics(&args.month).await?)?,
        "barchart" => serde_json::to_string_pretty(&engine.price_histogram(&args.month).await?)?,
        "piechart" => {
            serde_json::to_string_pretty(&engine.category_breakdown(&args.month).await?)?
        }
        "combined" => serde_json::to_string_pretty(&engine.combined(&request).await?)?,
        other => {
            return Err(format!(
                "Unknown view: {} (expected list|statistics|barchart|piechart|combined)",
                other
            )
            .into())
        }
    };

    println!("{}", output);

    Ok(())
}
