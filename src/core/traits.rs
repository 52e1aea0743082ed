//! Core traits for persistence
//!
//! The transaction store is generic over where its records live, which lets
//! tests observe or fail saves without touching the file system.

use crate::types::{LedgerError, Transaction};

/// Durable whole-collection storage
///
/// Implementations replace the complete stored collection on every save;
/// there are no partial updates.
pub trait Persistence {
    /// Load the stored collection in its stored order
    ///
    /// Returns `FileNotFound` when nothing has been stored yet.
    fn load(&self) -> Result<Vec<Transaction>, LedgerError>;

    /// Replace the stored collection with `records`
    fn save(&mut self, records: &[Transaction]) -> Result<(), LedgerError>;

    /// Human-readable location of the storage, used in logs and errors
    fn location(&self) -> String;
}
