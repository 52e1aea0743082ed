//! In-memory persistence backend for unit tests

use crate::core::traits::Persistence;
use crate::types::{LedgerError, Transaction};

/// Records every save and can be told to fail them
#[derive(Debug, Default)]
pub struct MemoryBackend {
    pub stored: Option<Vec<Transaction>>,
    pub saves: usize,
    pub fail_saves: bool,
}

impl MemoryBackend {
    pub fn with(records: Vec<Transaction>) -> Self {
        MemoryBackend {
            stored: Some(records),
            ..Default::default()
        }
    }
}

impl Persistence for MemoryBackend {
    fn load(&self) -> Result<Vec<Transaction>, LedgerError> {
        self.stored
            .clone()
            .ok_or_else(|| LedgerError::file_not_found("memory"))
    }

    fn save(&mut self, records: &[Transaction]) -> Result<(), LedgerError> {
        if self.fail_saves {
            return Err(LedgerError::io_failure("memory", "disk full"));
        }
        self.saves += 1;
        self.stored = Some(records.to_vec());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
