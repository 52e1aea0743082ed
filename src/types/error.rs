//! Error types for the personal ledger
//!
//! This module defines every error the ledger core can report. Errors carry
//! enough context to be shown to an operator as-is.
//!
//! # Error Categories
//!
//! - **Validation Errors**: invalid amount, invalid category, invalid proportions.
//!   The input was rejected; the caller may retry with different input.
//! - **Lookup Errors**: a transaction id or the data file does not exist.
//! - **Storage Errors**: corrupt persisted state, I/O failures.
//!   The system cannot continue without operator intervention.
//! - **Report Errors**: a report was requested over zero records, or its
//!   arithmetic overflowed.

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is not a number, or is not strictly positive after rounding
    #[error("Invalid amount '{input}': expected a number greater than zero")]
    InvalidAmount {
        /// The raw amount as supplied
        input: String,
    },

    /// Category does not belong to the configured category set
    #[error("Invalid category '{input}'")]
    InvalidCategory {
        /// The raw category as supplied
        input: String,
    },

    /// Category proportions used for seeding do not add up to exactly 1
    #[error("Category proportions must sum to 1, got {sum}")]
    InvalidProportions {
        /// The actual sum of all proportions
        sum: Decimal,
    },

    /// No transaction with the given id exists in the store
    #[error("Transaction {id} not found")]
    TransactionNotFound {
        /// The id that was looked up
        id: String,
    },

    /// The data file does not exist
    ///
    /// During startup this is not fatal: the caller seeds a fresh store.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// Persisted state could not be deserialized or violates the record invariants
    ///
    /// Fatal during startup; no repair is attempted.
    #[error("Corrupt store{}: {message}", .path.as_ref().map(|p| format!(" at {}", p)).unwrap_or_default())]
    CorruptStore {
        /// Path of the offending file (if known)
        path: Option<String>,
        /// Description of what was wrong
        message: String,
    },

    /// I/O error while reading or writing the data file
    #[error("I/O error: {message}")]
    IoFailure {
        /// Description of the I/O error
        message: String,
    },

    /// A report that needs at least one record was requested on an empty collection
    #[error("Cannot compute {report} of an empty collection")]
    EmptyCollection {
        /// Name of the report that was requested
        report: String,
    },

    /// A report total does not fit in a decimal
    ///
    /// The report is rejected; nothing is modified.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Report step that would overflow
        operation: String,
    },

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoFailure {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(error: serde_json::Error) -> Self {
        LedgerError::CorruptStore {
            path: None,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        LedgerError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create an InvalidCategory error
    pub fn invalid_category(input: &str) -> Self {
        LedgerError::InvalidCategory {
            input: input.to_string(),
        }
    }

    /// Create a TransactionNotFound error
    pub fn transaction_not_found(id: &str) -> Self {
        LedgerError::TransactionNotFound { id: id.to_string() }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        LedgerError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a CorruptStore error for a specific file
    pub fn corrupt_store(path: &str, message: impl Into<String>) -> Self {
        LedgerError::CorruptStore {
            path: Some(path.to_string()),
            message: message.into(),
        }
    }

    /// Create an IoFailure error with the path prepended to the cause
    pub fn io_failure(path: &str, cause: impl std::fmt::Display) -> Self {
        LedgerError::IoFailure {
            message: format!("{}: {}", path, cause),
        }
    }

    /// Create an EmptyCollection error
    pub fn empty_collection(report: &str) -> Self {
        LedgerError::EmptyCollection {
            report: report.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl Into<String>) -> Self {
        LedgerError::Config {
            message: message.into(),
        }
    }

    /// True when the error means "input rejected, try again"
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount { .. }
                | LedgerError::InvalidCategory { .. }
                | LedgerError::InvalidProportions { .. }
        )
    }

    /// True when the error means the system cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LedgerError::CorruptStore { .. }
                | LedgerError::IoFailure { .. }
                | LedgerError::Config { .. }
        )
    }
}
