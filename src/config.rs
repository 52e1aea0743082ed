//! Ledger configuration
//!
//! The configuration names the data file, the allowed categories with their
//! seeding proportions, and the seed parameters. It is read from an optional
//! JSON file; any field left out takes its default:
//!
//! ```json
//! {
//!     "data_file": "data/transactions.json",
//!     "seed": 42,
//!     "seed_count": 10000,
//!     "categories": [
//!         { "name": "Alimentação", "proportion": 0.4 },
//!         { "name": "Transporte", "proportion": 0.6 }
//!     ]
//! }
//! ```

use crate::core::{CategoryShare, SeedPlan};
use crate::types::{CategorySet, LedgerError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_DATA_FILE: &str = "data/transactions.json";
const DEFAULT_SEED: u64 = 42;
const DEFAULT_SEED_COUNT: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    pub data_file: PathBuf,
    pub categories: Vec<CategoryShare>,
    pub seed: u64,
    pub seed_count: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            categories: vec![
                CategoryShare::new("alimentação", Decimal::new(30, 2)),
                CategoryShare::new("transporte", Decimal::new(20, 2)),
                CategoryShare::new("moradia", Decimal::new(25, 2)),
                CategoryShare::new("saúde", Decimal::new(10, 2)),
                CategoryShare::new("lazer", Decimal::new(15, 2)),
            ],
            seed: DEFAULT_SEED,
            seed_count: DEFAULT_SEED_COUNT,
        }
    }
}

impl LedgerConfig {
    /// Read a configuration file
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file cannot be read or is not valid configuration JSON.
    pub fn load(path: &Path) -> Result<Self, LedgerError> {
        let content = fs::read_to_string(path).map_err(|e| {
            LedgerError::config(format!("unable to read {}: {}", path.display(), e))
        })?;
        let config: LedgerConfig = serde_json::from_str(&content).map_err(|e| {
            LedgerError::config(format!("unable to parse {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), categories = config.categories.len(), "loaded configuration");
        Ok(config)
    }

    /// Read `path` when given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, LedgerError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn category_set(&self) -> CategorySet {
        CategorySet::new(self.categories.iter().map(|share| share.name.as_str()))
    }

    pub fn seed_plan(&self) -> SeedPlan {
        SeedPlan {
            shares: self.categories.clone(),
            count: self.seed_count,
            seed: self.seed,
        }
    }
}
