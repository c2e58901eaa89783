//! Ledger stubs and argument fixtures shared by unit and integration tests.

use crate::adapters::InMemoryLedger;
use crate::errors::LedgerError;
use crate::ports::outbound::Ledger;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// RECORDING LEDGER
// =============================================================================

/// Wraps a ledger and counts every call made through it.
#[derive(Debug, Default)]
pub struct RecordingLedger<L = InMemoryLedger> {
    inner: L,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl<L: Ledger> RecordingLedger<L> {
    /// Wrap `inner` with both counters at zero.
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            gets: AtomicUsize::new(0),
            puts: AtomicUsize::new(0),
        }
    }

    /// `get_state` calls so far.
    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    /// `put_state` calls so far.
    pub fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }

    /// All ledger calls so far.
    pub fn total_calls(&self) -> usize {
        self.gets() + self.puts()
    }

    /// The wrapped ledger.
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Ledger> Ledger for RecordingLedger<L> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put_state(key, value)
    }
}

// =============================================================================
// FAILING LEDGER
// =============================================================================

/// In-memory ledger whose reads and/or writes fail on demand.
#[derive(Debug, Default)]
pub struct FailingLedger {
    inner: InMemoryLedger,
    fail_reads: bool,
    fail_writes: bool,
}

impl FailingLedger {
    /// Every call fails.
    pub fn all() -> Self {
        Self {
            inner: InMemoryLedger::new(),
            fail_reads: true,
            fail_writes: true,
        }
    }

    /// Reads fail, writes go through.
    pub fn reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    /// Writes fail over the given state; reads go through.
    pub fn writes(inner: InMemoryLedger) -> Self {
        Self {
            inner,
            fail_reads: false,
            fail_writes: true,
        }
    }

    /// The backing state, as left by writes that went through.
    pub fn inner(&self) -> &InMemoryLedger {
        &self.inner
    }
}

impl Ledger for FailingLedger {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        if self.fail_reads {
            return Err(LedgerError::Unavailable);
        }
        self.inner.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), LedgerError> {
        if self.fail_writes {
            return Err(LedgerError::Rejected(format!("write to {key} refused")));
        }
        self.inner.put_state(key, value)
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// 13 `InitGeneralInfo` arguments for `key`.
pub fn identity_args(key: &str) -> Vec<String> {
    owned(&[
        key,
        "Alice Smith",
        "Robert Smith",
        "34",
        "F",
        "1990-01-01",
        "ABCDE1234F",
        "1234-5678-9012",
        "1 Main St, Springfield",
        "2 Oak Ave, Shelbyville",
        "750",
        "2024-01-01",
        "REF-0001",
    ])
}

/// 13 `UpdateGeneralInfo` arguments for `key`, every field different from
/// [`identity_args`], including the ignored trailing value.
pub fn identity_update_args(key: &str) -> Vec<String> {
    owned(&[
        key,
        "Alice Jones",
        "Carl Jones",
        "35",
        "X",
        "1989-12-31",
        "ZYXWV9876K",
        "9999-8888-7777",
        "3 Elm St, Capital City",
        "4 Pine Rd, Ogdenville",
        "812",
        "2025-06-30",
        "REF-9999",
    ])
}

/// 3 `InitDocument` arguments.
pub fn document_args(key: &str, certificate: &str, image: &str) -> Vec<String> {
    owned(&[key, certificate, image])
}
