//! # Document Record Manager
//!
//! Create and read of supporting-document records. Documents have no update
//! path.

use crate::codec;
use crate::config::KeyLayout;
use crate::domain::entities::{DocumentRecord, Record, RecordKind};
use crate::domain::validation::{validate, DOCUMENT_CREATE_ARITY, READ_ARITY};
use crate::errors::ChaincodeError;
use crate::ports::outbound::Ledger;
use crate::service::helpers::{ensure_absent, read_existing, write};
use tracing::{debug, info};

const KIND: RecordKind = DocumentRecord::KIND;

/// Document record operations against one ledger.
pub struct DocumentManager<'l, L: Ledger + ?Sized> {
    ledger: &'l mut L,
    layout: KeyLayout,
}

impl<'l, L: Ledger + ?Sized> DocumentManager<'l, L> {
    /// Create a manager over `ledger`.
    pub fn new(ledger: &'l mut L, layout: KeyLayout) -> Self {
        Self { ledger, layout }
    }

    /// Create a record from `[key, certificate, image]`.
    ///
    /// # Errors
    ///
    /// - `Arity` / `EmptyArgument` before any ledger access
    /// - `AlreadyExists` if anything is stored under the key
    /// - `LedgerAccess` if the read or the write fails
    pub fn create(&mut self, args: &[String]) -> Result<(), ChaincodeError> {
        validate(args, DOCUMENT_CREATE_ARITY)?;
        let record = DocumentRecord::from_args(args)?;
        let ledger_key = self.layout.ledger_key(KIND, &record.key);

        ensure_absent(&*self.ledger, KIND, &ledger_key, &record.key)?;

        let bytes = codec::encode(&record).map_err(|source| ChaincodeError::Codec {
            kind: KIND,
            key: record.key.clone(),
            source,
        })?;
        write(&mut *self.ledger, &ledger_key, &record.key, &bytes)?;

        info!(key = %record.key, "document record created");
        Ok(())
    }

    /// Return the stored bytes for `[key]`, unmodified.
    ///
    /// # Errors
    ///
    /// - `Arity` / `EmptyArgument` before any ledger access
    /// - `NotFound` if nothing is stored under the key
    /// - `LedgerAccess` if the read fails
    pub fn read(&self, args: &[String]) -> Result<Vec<u8>, ChaincodeError> {
        validate(args, READ_ARITY)?;
        let key = &args[0];
        let ledger_key = self.layout.ledger_key(KIND, key);

        let bytes = read_existing(&*self.ledger, KIND, &ledger_key, key)?;
        debug!(key = %key, len = bytes.len(), "document record read");
        Ok(bytes)
    }
}

// =============================================================================
// TESTS
// =============================================================================
