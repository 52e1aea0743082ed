//! Transaction store
//!
//! This module provides the TransactionStore component that owns the ledger's
//! in-memory collection. It is the single writer: every create, update and
//! delete goes through it, is validated against the record rules, and is
//! written back to persistence before the call returns.
//!
//! # Lifecycle
//!
//! A store only exists once it has been opened. `open` loads the persisted
//! collection, or seeds, saves and reloads it when nothing is persisted yet.
//! There is no way to call CRUD operations before that.
//!
//! # Persistence Failures
//!
//! A failed save does not roll back the mutation. The error is returned and
//! the store is marked dirty until a later save (any mutation or `flush`)
//! succeeds.

use crate::core::seed::SeedPlan;
use crate::core::traits::Persistence;
use crate::io::json_store::JsonFile;
use crate::types::{
    is_valid_amount, normalize_category, parse_amount, parse_id, CategorySet, LedgerError,
    Transaction,
};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Owner of the ledger's transactions
pub struct TransactionStore<P: Persistence = JsonFile> {
    /// Records in insertion order
    transactions: Vec<Transaction>,
    categories: CategorySet,
    backend: P,
    /// Memory holds mutations the backend has not accepted yet
    dirty: bool,
}

impl<P: Persistence> TransactionStore<P> {
    /// Load the store from `backend`, seeding it first if nothing is stored
    ///
    /// # Arguments
    ///
    /// * `backend` - Where the collection is persisted
    /// * `categories` - The configured category set
    /// * `seed` - Used only when the backend reports `FileNotFound`
    ///
    /// # Errors
    ///
    /// - `CorruptStore` if stored data cannot be read or breaks a record invariant
    /// - `InvalidProportions` if seeding is needed and the plan is invalid
    /// - `IoFailure` if reading or the initial save fails
    pub fn open(
        mut backend: P,
        categories: CategorySet,
        seed: &SeedPlan,
    ) -> Result<Self, LedgerError> {
        let transactions = match backend.load() {
            Ok(records) => records,
            Err(LedgerError::FileNotFound { .. }) => {
                info!(location = %backend.location(), "no stored transactions, seeding");
                let seeded = seed.generate()?;
                backend.save(&seeded)?;
                backend.load()?
            }
            Err(e) => return Err(e),
        };

        Self::with_records(backend, categories, transactions)
    }

    /// Build a store around records that are already in memory
    ///
    /// The records are checked against the store invariants but not saved.
    ///
    /// # Errors
    ///
    /// Returns `CorruptStore` for duplicate ids, amounts that are not positive,
    /// carry more than two decimals or exceed the maximum, or categories that
    /// are not canonical members of `categories`.
    pub fn with_records(
        backend: P,
        categories: CategorySet,
        transactions: Vec<Transaction>,
    ) -> Result<Self, LedgerError> {
        check_invariants(&transactions, &categories)
            .map_err(|message| LedgerError::corrupt_store(&backend.location(), message))?;

        debug!(count = transactions.len(), "transaction store ready");
        Ok(TransactionStore {
            transactions,
            categories,
            backend,
            dirty: false,
        })
    }

    /// Validate and append a new transaction, then persist
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` / `InvalidCategory` from record validation; nothing changes
    /// - `IoFailure` if the save fails. The record stays in memory as the last
    ///   entry of `all()` and `is_dirty()` turns true, so callers can still
    ///   recover the new id.
    pub fn create(&mut self, amount: &str, category: &str) -> Result<Transaction, LedgerError> {
        let transaction = Transaction::create(amount, category, &self.categories)?;
        self.transactions.push(transaction.clone());
        debug!(id = %transaction.id(), "created transaction");

        self.persist()?;
        Ok(transaction)
    }

    /// Look up a transaction by id (any casing)
    ///
    /// # Errors
    ///
    /// Returns `TransactionNotFound` when no record matches, including when
    /// `id` is not a UUID at all.
    pub fn find(&self, id: &str) -> Result<&Transaction, LedgerError> {
        self.position(id)
            .map(|index| &self.transactions[index])
            .ok_or_else(|| LedgerError::transaction_not_found(id))
    }

    /// Change the amount and/or category of a transaction
    ///
    /// `None` or a blank string leaves a field unchanged. Every provided field
    /// is validated before anything is modified. The store is only persisted
    /// when a field actually changed; otherwise the unchanged record is
    /// returned.
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound` if `id` does not match a record
    /// - `InvalidAmount` / `InvalidCategory` if a provided field is invalid
    /// - `IoFailure` if the save fails; the change stays in memory
    pub fn update(
        &mut self,
        id: &str,
        amount: Option<&str>,
        category: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        let index = self
            .position(id)
            .ok_or_else(|| LedgerError::transaction_not_found(id))?;

        let new_amount: Option<Decimal> = amount
            .filter(|raw| !raw.trim().is_empty())
            .map(parse_amount)
            .transpose()?;
        let new_category = category
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| self.categories.resolve(raw))
            .transpose()?;

        let record = &mut self.transactions[index];
        let mut changed = false;

        if let Some(amount) = new_amount.filter(|amount| *amount != record.amount()) {
            record.set_amount(amount);
            changed = true;
        }
        if let Some(category) = new_category.filter(|category| category != record.category()) {
            record.set_category(category);
            changed = true;
        }

        let updated = record.clone();
        if changed {
            debug!(id = %updated.id(), "updated transaction");
            self.persist()?;
        } else {
            debug!(id = %updated.id(), "update left transaction unchanged");
        }
        Ok(updated)
    }

    /// Remove a transaction and return it, then persist
    ///
    /// # Errors
    ///
    /// - `TransactionNotFound` if `id` does not match a record
    /// - `IoFailure` if the save fails; the record stays removed in memory
    pub fn delete(&mut self, id: &str) -> Result<Transaction, LedgerError> {
        let index = self
            .position(id)
            .ok_or_else(|| LedgerError::transaction_not_found(id))?;

        let removed = self.transactions.remove(index);
        debug!(id = %removed.id(), "deleted transaction");

        self.persist()?;
        Ok(removed)
    }

    /// Owned copy of every transaction, in insertion order
    pub fn all(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Retry persisting the current collection
    ///
    /// Clears the dirty flag on success.
    pub fn flush(&mut self) -> Result<(), LedgerError> {
        self.persist()
    }

    /// True when the last save failed and memory is ahead of storage
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id = parse_id(id)?;
        self.transactions.iter().position(|t| t.id() == id)
    }

    fn persist(&mut self) -> Result<(), LedgerError> {
        match self.backend.save(&self.transactions) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                warn!(location = %self.backend.location(), error = %e, "save failed, memory is ahead of storage");
                Err(e)
            }
        }
    }
}

fn check_invariants(transactions: &[Transaction], categories: &CategorySet) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(transactions.len());

    for transaction in transactions {
        let id = transaction.id();
        if !seen.insert(id) {
            return Err(format!("duplicate transaction id {}", id));
        }
        if !is_valid_amount(transaction.amount()) {
            return Err(format!(
                "transaction {} has invalid amount {}",
                id,
                transaction.amount()
            ));
        }
        let category = transaction.category();
        if normalize_category(category) != category || !categories.contains(category) {
            return Err(format!(
                "transaction {} has unknown category '{}'",
                id, category
            ));
        }
    }
    Ok(())
}
