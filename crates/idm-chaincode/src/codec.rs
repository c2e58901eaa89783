//! # Record Codec
//!
//! JSON encoding of records for the ledger. Field order follows the struct
//! declaration, so `encode` is stable and `decode(encode(r)) == r`.
//!
//! Absence of a ledger entry is never seen here: callers map "no bytes" to
//! `NotFound` before decoding. A present payload with zero bytes is
//! [`CodecError::Empty`].

use crate::domain::entities::{Record, RecordKind};
use crate::errors::CodecError;
use serde::Deserialize;
use serde_json::Value;

/// Only the discriminator, read before the full record.
#[derive(Deserialize)]
struct Discriminator {
    #[serde(rename = "docType")]
    record_kind: RecordKind,
}

/// Encodes a record.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] if serialization fails.
pub fn encode<R: Record>(record: &R) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(record).map_err(|e| CodecError::Malformed(e.to_string()))
}

/// Decodes a stored payload into a record of kind `R::KIND`.
///
/// # Errors
///
/// - [`CodecError::Empty`] for a zero-length payload
/// - [`CodecError::KindMismatch`] if the payload is another kind's record
/// - [`CodecError::Malformed`] for anything that is not a complete record
pub fn decode<R: Record>(bytes: &[u8]) -> Result<R, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::Empty);
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| CodecError::Malformed(e.to_string()))?;

    let Discriminator { record_kind } =
        Discriminator::deserialize(&value).map_err(|e| CodecError::Malformed(e.to_string()))?;
    if record_kind != R::KIND {
        return Err(CodecError::KindMismatch {
            expected: R::KIND,
            found: record_kind,
        });
    }

    R::deserialize(value).map_err(|e| CodecError::Malformed(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================
