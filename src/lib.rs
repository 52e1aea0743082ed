//! Personal Ledger Library
//! # Overview
//!
//! A transaction store for personal finances plus a reporting engine over it.
//! The whole collection is persisted as a single JSON document and is seeded
//! with synthetic data the first time a data file is missing.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Transaction, CategorySet, LedgerError)
//! - [`config`] - Categories, seeding proportions and data file location
//! - [`core`] - Business logic components:
//!   - [`core::transaction_store`] - Validated CRUD over the collection, persisted on every change
//!   - [`core::report`] - Totals, averages, top-N, median and nearest-to-median
//!   - [`core::seed`] - Deterministic synthetic data generation
//!   - [`core::shared`] - Thread-safe handle serializing access to one store
//! - [`io`] - JSON persistence and plain-text report rendering
//! - [`cli`] - CLI arguments parsing and command execution
//!
//! # Transactions
//!
//! Each transaction carries:
//! - `id`: a random UUID assigned on creation, never changed
//! - `amount`: a strictly positive decimal with two fractional digits
//! - `category`: the canonical (lowercase, accent-free) name of an allowed category

pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod types;

pub use config::LedgerConfig;
pub use core::{Direction, SeedPlan, SharedStore, Stats, Summary, TransactionStore};
pub use io::JsonFile;
pub use types::{CategorySet, LedgerError, Transaction, TransactionId};
