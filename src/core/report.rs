//! Reporting engine
//!
//! Read-only aggregation and selection over a snapshot of the ledger. Every
//! function here is pure and deterministic for a given snapshot; none of them
//! mutate or persist anything.
//!
//! # Tie-breaking
//!
//! Orderings use stable sorts, so records with equal keys keep their relative
//! order from the step before:
//! - `top_n_by_value` sorts the snapshot ascending by amount; `Max` walks that
//!   order backwards, `Min` forwards.
//! - `nearest_to_median` sorts the snapshot (in store order) by distance to the
//!   median only.

use crate::types::{LedgerError, Transaction};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Which end of the amount ordering `top_n_by_value` selects from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Largest amounts first
    Max,
    /// Smallest amounts first
    Min,
}

/// Count, sum and average of a group of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub count: usize,
    pub sum: Decimal,
    /// `sum / count`, or zero for an empty group
    pub average: Decimal,
}

impl Stats {
    fn add(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.sum = self
            .sum
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("sum"))?;
        self.count += 1;
        Ok(())
    }

    fn finish(mut self) -> Self {
        self.average = if self.count == 0 {
            Decimal::ZERO
        } else {
            self.sum / Decimal::from(self.count)
        };
        self
    }
}

/// Totals for the whole ledger and for each category
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub overall: Stats,
    /// Keyed by canonical category, in order of first appearance
    pub per_category: IndexMap<String, Stats>,
}

/// Aggregate count, sum and average overall and per category
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if a sum does not fit in a `Decimal`.
pub fn total_and_average(snapshot: &[Transaction]) -> Result<Summary, LedgerError> {
    let mut overall = Stats::default();
    let mut per_category: IndexMap<String, Stats> = IndexMap::new();

    for transaction in snapshot {
        overall.add(transaction.amount())?;
        per_category
            .entry(transaction.category().to_string())
            .or_default()
            .add(transaction.amount())?;
    }

    Ok(Summary {
        overall: overall.finish(),
        per_category: per_category
            .into_iter()
            .map(|(category, stats)| (category, stats.finish()))
            .collect(),
    })
}

/// The `n` largest or smallest transactions by amount
///
/// Returns every record when the snapshot holds fewer than `n`.
pub fn top_n_by_value(snapshot: &[Transaction], n: usize, direction: Direction) -> Vec<Transaction> {
    let sorted = sorted_by_amount(snapshot);

    match direction {
        Direction::Max => sorted.into_iter().rev().take(n).cloned().collect(),
        Direction::Min => sorted.into_iter().take(n).cloned().collect(),
    }
}

/// Median amount of the snapshot
///
/// For an even count this is the mean of the two middle amounts.
///
/// # Errors
///
/// - `EmptyCollection` for an empty snapshot
/// - `ArithmeticOverflow` if the two middle amounts cannot be added
pub fn median(snapshot: &[Transaction]) -> Result<Decimal, LedgerError> {
    if snapshot.is_empty() {
        return Err(LedgerError::empty_collection("median"));
    }

    let sorted = sorted_by_amount(snapshot);
    let middle = sorted.len() / 2;

    if sorted.len() % 2 == 0 {
        let pair = sorted[middle - 1]
            .amount()
            .checked_add(sorted[middle].amount())
            .ok_or_else(|| LedgerError::arithmetic_overflow("median"))?;
        Ok(pair / Decimal::from(2))
    } else {
        Ok(sorted[middle].amount())
    }
}

/// The `n` transactions whose amounts are closest to the median
///
/// # Errors
///
/// Same as [`median`].
pub fn nearest_to_median(snapshot: &[Transaction], n: usize) -> Result<Vec<Transaction>, LedgerError> {
    if snapshot.is_empty() {
        return Err(LedgerError::empty_collection("nearest-to-median"));
    }

    let median = median(snapshot)?;
    let mut ranked: Vec<&Transaction> = snapshot.iter().collect();
    ranked.sort_by_key(|t| (t.amount() - median).abs());

    Ok(ranked.into_iter().take(n).cloned().collect())
}

fn sorted_by_amount(snapshot: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = snapshot.iter().collect();
    sorted.sort_by_key(|t| t.amount());
    sorted
}
