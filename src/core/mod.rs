//! Core business logic module
//!
//! This module contains the ledger's core components:
//! - `traits` - Persistence abstraction the store is generic over
//! - `transaction_store` - Owned collection with CRUD and persist-after-mutation
//! - `shared` - Mutex-guarded store handle for concurrent callers
//! - `report` - Pure aggregation and selection over a snapshot
//! - `seed` - Deterministic synthetic population for an empty store

pub mod report;
pub mod seed;
pub mod shared;
pub mod traits;
pub mod transaction_store;

#[cfg(test)]
pub(crate) mod test_support;

pub use report::{Direction, Stats, Summary};
pub use seed::{CategoryShare, SeedPlan};
pub use shared::SharedStore;
pub use traits::Persistence;
pub use transaction_store::TransactionStore;
