//! Runtime configuration from environment variables

use std::env;

/// Seed dataset published by the upstream source
pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

const DEFAULT_DB_PATH: &str = "data/salescope.db";

/// Settings shared by the binaries.
///
/// Environment variables:
/// - `SALESCOPE_DB_PATH` (default: data/salescope.db)
/// - `SALESCOPE_SEED_URL` (default: the upstream product-transaction dataset)
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: String,
    pub seed_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            db_path: env::var("SALESCOPE_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            seed_url: env::var("SALESCOPE_SEED_URL")
                .unwrap_or_else(|_| DEFAULT_SEED_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env mutations are process-global, so defaults and overrides share one test
    #[test]
    fn test_config_from_env() {
        env::remove_var("SALESCOPE_DB_PATH");
        env::remove_var("SALESCOPE_SEED_URL");

        let config = Config::from_env();
        assert_eq!(config.db_path, "data/salescope.db");
        assert_eq!(config.seed_url, DEFAULT_SEED_URL);

        env::set_var("SALESCOPE_DB_PATH", "/tmp/sales-test.db");
        env::set_var("SALESCOPE_SEED_URL", "http://localhost:9999/sales.json");

        let config = Config::from_env();
        assert_eq!(config.db_path, "/tmp/sales-test.db");
        assert_eq!(config.seed_url, "http://localhost:9999/sales.json");

        env::remove_var("SALESCOPE_DB_PATH");
        env::remove_var("SALESCOPE_SEED_URL");
    }
}
