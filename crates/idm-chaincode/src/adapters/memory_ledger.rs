//! # In-Memory Ledger
//!
//! Ledger state held in a map. Used by hosts that embed the chaincode
//! without a real ledger, and by tests.

use crate::errors::LedgerError;
use crate::ports::outbound::Ledger;
use std::collections::BTreeMap;

/// In-memory ledger state.
#[derive(Clone, Debug, Default)]
pub struct InMemoryLedger {
    state: BTreeMap<String, Vec<u8>>,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, bypassing the chaincode.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.state.insert(key.into(), value.into());
        self
    }

    /// Number of keys present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if no key is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Present keys, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.state.keys().map(String::as_str)
    }
}

impl Ledger for InMemoryLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.state.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
