use spidermatch_core::{Catalog, CatalogError};
use std::path::PathBuf;

/// Seeds derived from the clock are reduced modulo this value.
const CLOCK_SEED_MODULUS: i64 = 1000;

/// CLI configuration, loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// TOML catalog replacing the built-in one.
    pub catalog_path: Option<PathBuf>,
    /// Pretty-print JSON output.
    pub pretty: bool,
    /// Fixed seed for simulated analyses (default: derived from the clock).
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from `SPIDERMATCH_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_path: var("SPIDERMATCH_CATALOG")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            pretty: var("SPIDERMATCH_PRETTY").map(|v| v != "0").unwrap_or(true),
            seed: var("SPIDERMATCH_SEED").and_then(|v| v.trim().parse().ok()),
        }
    }

    /// Build the catalog once for the whole run.
    pub fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Catalog::builtin(),
        }
    }

    /// Explicit seed, else the configured one, else the clock.
    pub fn resolve_seed(&self, explicit: Option<u64>) -> u64 {
        explicit.or(self.seed).unwrap_or_else(clock_seed)
    }
}

/// Current time in milliseconds, reduced to a small seed.
fn clock_seed() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .rem_euclid(CLOCK_SEED_MODULUS) as u64
}
