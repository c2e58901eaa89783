//! # Driven Ports (SPI - Outbound)
//!
//! The one dependency of the chaincode: the external key-value ledger.
//!
//! Production: the host ledger's state interface.
//! Testing: `InMemoryLedger` (adapters), `RecordingLedger` / `FailingLedger`
//! (`test_utils`).

use crate::errors::LedgerError;

/// Abstract interface for ledger state access.
///
/// The ledger is assumed linearizable per key; the chaincode issues at most
/// one read followed by at most one write per invocation.
pub trait Ledger: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Some(bytes)` - If the key is present (possibly with an empty value)
    /// * `None` - If nothing was ever stored under the key
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Check if a key is present.
    ///
    /// Presence, not emptiness: a key holding zero bytes exists.
    fn contains(&self, key: &str) -> Result<bool, LedgerError> {
        Ok(self.get_state(key)?.is_some())
    }
}

// =============================================================================
// TESTS
// =============================================================================
