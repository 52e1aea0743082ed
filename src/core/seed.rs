//! Synthetic seed data for an empty ledger
//!
//! When no data file exists yet, the store is populated once from a
//! category-proportion table. Amounts are drawn from a seeded RNG so the same
//! seed always reproduces the same amounts; ids are always fresh.
//!
//! # Rounding
//!
//! Each category receives `floor(count * proportion)` records and the
//! remainder is dropped, so the generated total can be lower than `count`
//! (e.g. three categories at 1/3 each and `count = 10` yield 9 records).
//! Changing that would change the seed data produced for a given seed.

use crate::types::{normalize_category, LedgerError, Transaction};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Smallest generated amount, in cents (1.00)
const MIN_CENTS: i64 = 100;

/// Largest generated amount, in cents (1000.00)
const MAX_CENTS: i64 = 100_000;

/// A category and the fraction of seed records it receives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    #[serde(with = "crate::types::transaction::decimal_as_number")]
    pub proportion: Decimal,
}

impl CategoryShare {
    pub fn new(name: impl Into<String>, proportion: Decimal) -> Self {
        CategoryShare {
            name: name.into(),
            proportion,
        }
    }
}

/// Everything needed to seed an empty store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    pub shares: Vec<CategoryShare>,
    pub count: usize,
    pub seed: u64,
}

impl SeedPlan {
    pub fn generate(&self) -> Result<Vec<Transaction>, LedgerError> {
        generate(&self.shares, self.count, self.seed)
    }
}

/// Generate seed transactions in configuration order
///
/// # Arguments
///
/// * `shares` - Categories and their proportions; must sum to exactly 1
/// * `count` - Requested number of records (an upper bound, see module docs)
/// * `seed` - RNG seed for the amounts
///
/// # Errors
///
/// Returns `InvalidProportions` when the proportions do not sum to exactly 1
/// or any proportion lies outside `[0, 1]`.
pub fn generate(
    shares: &[CategoryShare],
    count: usize,
    seed: u64,
) -> Result<Vec<Transaction>, LedgerError> {
    let sum: Decimal = shares.iter().map(|share| share.proportion).sum();
    let out_of_range = shares
        .iter()
        .any(|share| share.proportion < Decimal::ZERO || share.proportion > Decimal::ONE);
    if sum != Decimal::ONE || out_of_range {
        return Err(LedgerError::InvalidProportions { sum });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut transactions = Vec::with_capacity(count);

    for share in shares {
        let category = normalize_category(&share.name);
        let quantity = (Decimal::from(count) * share.proportion)
            .floor()
            .to_usize()
            .unwrap_or(0);

        for _ in 0..quantity {
            let amount = Decimal::new(rng.gen_range(MIN_CENTS..=MAX_CENTS), 2);
            transactions.push(Transaction::from_parts(
                Uuid::new_v4(),
                amount,
                category.clone(),
            ));
        }
    }

    if transactions.len() < count {
        debug!(
            requested = count,
            generated = transactions.len(),
            "seed remainder dropped by per-category rounding"
        );
    }
    info!(count = transactions.len(), seed, "generated seed transactions");
    Ok(transactions)
}
