//! Thread-safe handle to a transaction store
//!
//! The ledger itself is single-threaded. When it is embedded somewhere with
//! several concurrent callers, every mutation and the save that follows it
//! must run as one critical section. `SharedStore` provides that by holding a
//! single mutex across validate, mutate and persist.

use crate::core::traits::Persistence;
use crate::core::transaction_store::TransactionStore;
use crate::io::json_store::JsonFile;
use crate::types::{LedgerError, Transaction};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-protected transaction store
///
/// Clones share the same underlying store.
pub struct SharedStore<P: Persistence = JsonFile> {
    inner: Arc<Mutex<TransactionStore<P>>>,
}

impl<P: Persistence> Clone for SharedStore<P> {
    fn clone(&self) -> Self {
        SharedStore {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: Persistence> SharedStore<P> {
    pub fn new(store: TransactionStore<P>) -> Self {
        SharedStore {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn create(&self, amount: &str, category: &str) -> Result<Transaction, LedgerError> {
        self.lock().create(amount, category)
    }

    pub fn find(&self, id: &str) -> Result<Transaction, LedgerError> {
        self.lock().find(id).cloned()
    }

    pub fn update(
        &self,
        id: &str,
        amount: Option<&str>,
        category: Option<&str>,
    ) -> Result<Transaction, LedgerError> {
        self.lock().update(id, amount, category)
    }

    pub fn delete(&self, id: &str) -> Result<Transaction, LedgerError> {
        self.lock().delete(id)
    }

    pub fn all(&self) -> Vec<Transaction> {
        self.lock().all()
    }

    pub fn flush(&self) -> Result<(), LedgerError> {
        self.lock().flush()
    }

    pub fn is_dirty(&self) -> bool {
        self.lock().is_dirty()
    }

    /// Run `f` with exclusive access to the store
    ///
    /// Use this to compose several operations into one critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut TransactionStore<P>) -> R) -> R {
        f(&mut self.lock())
    }

    // A panic inside a critical section cannot leave the collection half
    // written: every mutation is a single Vec operation.
    fn lock(&self) -> MutexGuard<'_, TransactionStore<P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
