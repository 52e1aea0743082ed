//! Plain-text rendering of reports
//!
//! Turns reporting engine results into the fixed-width text shown on stdout
//! and written to export files. Amounts are printed with two decimals; no
//! locale-specific currency formatting is applied.

use crate::core::{Stats, Summary};
use crate::types::{LedgerError, Transaction, AMOUNT_SCALE};
use std::io::Write;

const RULE_WIDTH: usize = 55;
const LISTING_RULE_WIDTH: usize = 80;

/// Write the per-category and overall totals table
pub fn write_summary(summary: &Summary, output: &mut dyn Write) -> Result<(), LedgerError> {
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(
        output,
        "{:<15} {:>6} {:>14} {:>14}",
        "Category", "Count", "Sum", "Average"
    )?;
    writeln!(output, "{}", rule)?;
    for (category, stats) in &summary.per_category {
        write_stats_row(&capitalize(category), stats, output)?;
    }
    writeln!(output, "{}", rule)?;
    write_stats_row("Total", &summary.overall, output)?;

    Ok(())
}

fn write_stats_row(label: &str, stats: &Stats, output: &mut dyn Write) -> Result<(), LedgerError> {
    writeln!(
        output,
        "{:<15} {:>6} {:>14.2} {:>14.2}",
        label,
        stats.count,
        stats.sum.round_dp(AMOUNT_SCALE),
        stats.average.round_dp(AMOUNT_SCALE)
    )?;
    Ok(())
}

/// Write a titled, numbered list of transactions
pub fn write_transactions(
    title: &str,
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let rule = "=".repeat(LISTING_RULE_WIDTH);

    writeln!(output, "{}", rule)?;
    writeln!(output, "{}", title)?;
    writeln!(output, "{}", rule)?;
    for (position, transaction) in transactions.iter().enumerate() {
        writeln!(output, "{}. {}", position + 1, describe(transaction))?;
    }

    Ok(())
}

/// One-line description of a transaction
pub fn describe(transaction: &Transaction) -> String {
    format!(
        "UUID: {} | Amount: {:.2} | Category: {}",
        transaction.id(),
        transaction.amount(),
        capitalize(transaction.category())
    )
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
