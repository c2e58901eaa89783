//! # Identity Record Manager
//!
//! Create, read, and update of personal-identity records.
//!
//! ## Ledger Access Per Call
//!
//! | Operation | Reads | Writes (success path only) |
//! |-----------|-------|----------------------------|
//! | `create` | 1 | 1 |
//! | `read` | 1 | 0 |
//! | `update` | 1 | 1 |
//!
//! Validation failures touch the ledger zero times.

use crate::codec;
use crate::config::KeyLayout;
use crate::domain::entities::{IdentityRecord, Record, RecordKind};
use crate::domain::validation::{validate, IDENTITY_WRITE_ARITY, READ_ARITY};
use crate::errors::{ChaincodeError, CodecError};
use crate::ports::outbound::Ledger;
use crate::service::helpers::{ensure_absent, read_existing, write};
use tracing::{debug, info};

const KIND: RecordKind = IdentityRecord::KIND;

/// Identity record operations against one ledger.
pub struct IdentityManager<'l, L: Ledger + ?Sized> {
    ledger: &'l mut L,
    layout: KeyLayout,
}

impl<'l, L: Ledger + ?Sized> IdentityManager<'l, L> {
    /// Create a manager over `ledger`.
    pub fn new(ledger: &'l mut L, layout: KeyLayout) -> Self {
        Self { ledger, layout }
    }

    /// Create a record from `[key, 12 fields]`.
    ///
    /// # Errors
    ///
    /// - `Arity` / `EmptyArgument` before any ledger access
    /// - `AlreadyExists` if anything is stored under the key
    /// - `LedgerAccess` if the read or the write fails
    pub fn create(&mut self, args: &[String]) -> Result<(), ChaincodeError> {
        validate(args, IDENTITY_WRITE_ARITY)?;
        let record = IdentityRecord::from_args(args)?;
        let ledger_key = self.layout.ledger_key(KIND, &record.key);

        ensure_absent(&*self.ledger, KIND, &ledger_key, &record.key)?;

        let bytes = codec::encode(&record).map_err(|source| ChaincodeError::Codec {
            kind: KIND,
            key: record.key.clone(),
            source,
        })?;
        write(&mut *self.ledger, &ledger_key, &record.key, &bytes)?;

        info!(key = %record.key, "identity record created");
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
        debug!(key = %key, len = bytes.len(), "identity record read");
        Ok(bytes)
    }

    /// Overwrite the eleven mutable fields from `[key, 12 values]`.
    ///
    /// The key, the discriminator and `external_reference_number` keep their
    /// stored values; the 13th argument is validated but not applied.
    ///
    /// # Errors
    ///
    /// - `Arity` / `EmptyArgument` before any ledger access
    /// - `NotFound` if nothing is stored under the key
    /// - `Codec` if the stored payload is not an identity record
    /// - `LedgerAccess` if the read or the write fails
    pub fn update(&mut self, args: &[String]) -> Result<(), ChaincodeError> {
        validate(args, IDENTITY_WRITE_ARITY)?;
        let key = &args[0];
        let ledger_key = self.layout.ledger_key(KIND, key);

        let stored = read_existing(&*self.ledger, KIND, &ledger_key, key)?;
        let codec_err = |source: CodecError| ChaincodeError::Codec {
            kind: KIND,
            key: key.clone(),
            source,
        };

        let mut record: IdentityRecord = codec::decode(&stored).map_err(codec_err)?;
        record.apply_update(args)?;
        let bytes = codec::encode(&record).map_err(codec_err)?;
        write(&mut *self.ledger, &ledger_key, key, &bytes)?;

        info!(key = %key, "identity record updated");
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
