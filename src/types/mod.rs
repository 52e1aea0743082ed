//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: the ledger record, its id and amount parsing
//! - `category`: category canonicalization and the configured category set
//! - `error`: Error types for the ledger

pub mod category;
pub mod error;
pub mod transaction;

pub use category::{normalize_category, CategorySet};
pub use error::LedgerError;
pub use transaction::{
    is_valid_amount, max_amount, parse_amount, parse_id, Transaction, TransactionId, AMOUNT_SCALE,
    MAX_AMOUNT_CENTS,
};
