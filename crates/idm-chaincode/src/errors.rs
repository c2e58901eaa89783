//! # Error Types
//!
//! All error types for record validation, encoding, and ledger access.

use crate::domain::entities::RecordKind;
use thiserror::Error;

// =============================================================================
// VALIDATION ERRORS
// =============================================================================

/// Errors raised by the input validator before any ledger access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Argument count does not match the operation's declared arity.
    #[error("incorrect number of arguments: expecting {expected}, got {actual}")]
    Arity {
        /// Count the operation declares.
        expected: usize,
        /// Count received.
        actual: usize,
    },

    /// A positional argument is the empty string. `position` is zero-based;
    /// the message counts from one.
    #[error("argument {} must be a non-empty string", .position + 1)]
    EmptyArgument {
        /// Zero-based index of the first empty argument.
        position: usize,
    },
}

// =============================================================================
// CODEC ERRORS
// =============================================================================

/// Errors from decoding a stored payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Payload is present but has no bytes.
    #[error("empty payload")]
    Empty,

    /// Payload is not a well-formed record.
    #[error("malformed payload: {0}")]
    Malformed(String),

    /// Payload decoded, but carries another record kind's discriminator.
    #[error("record kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        /// Kind the caller asked for.
        expected: RecordKind,
        /// Kind carried by the payload.
        found: RecordKind,
    },
}

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Errors reported by a [`Ledger`](crate::ports::outbound::Ledger) implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The ledger could not be reached.
    #[error("ledger unavailable")]
    Unavailable,

    /// The ledger refused the request.
    #[error("ledger rejected request: {0}")]
    Rejected(String),

    /// Other ledger error.
    #[error("ledger error: {0}")]
    Other(String),
}

// =============================================================================
// CHAINCODE ERRORS
// =============================================================================

/// Error category, one per failure class surfaced to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong argument count.
    Arity,
    /// Empty positional argument.
    EmptyArgument,
    /// Create on an occupied key.
    AlreadyExists,
    /// Read or update on an absent key.
    NotFound,
    /// Stored payload could not be decoded.
    Codec,
    /// Ledger call failed.
    LedgerAccess,
    /// Dispatch miss.
    UnknownOperation,
}

/// Every failure an invocation can end with.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChaincodeError {
    /// Malformed request (wrong arity or an empty argument).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record already exists under the target key.
    #[error("this {} already exists: {key}", .kind.label())]
    AlreadyExists {
        /// Kind the caller tried to create.
        kind: RecordKind,
        /// Caller's record key.
        key: String,
    },

    /// No record exists under the target key.
    #[error("{} does not exist: {key}", .kind.label())]
    NotFound {
        /// Kind the caller asked for.
        kind: RecordKind,
        /// Caller's record key.
        key: String,
    },

    /// Stored payload could not be encoded or decoded.
    #[error("malformed {kind} record under {key}: {source}")]
    Codec {
        /// Kind being encoded or decoded.
        kind: RecordKind,
        /// Caller's record key.
        key: String,
        /// Underlying codec failure.
        #[source]
        source: CodecError,
    },

    /// The underlying ledger call failed.
    #[error("failed to access state for {key}: {source}")]
    LedgerAccess {
        /// Caller's record key, not the layout-derived ledger key.
        key: String,
        /// Failure reported by the ledger.
        #[source]
        source: LedgerError,
    },

    /// No handler is registered for the function name.
    #[error("received unknown function: {0}")]
    UnknownOperation(String),
}

impl ChaincodeError {
    /// Returns the failure category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(ValidationError::Arity { .. }) => ErrorKind::Arity,
            Self::Validation(ValidationError::EmptyArgument { .. }) => ErrorKind::EmptyArgument,
            Self::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Codec { .. } => ErrorKind::Codec,
            Self::LedgerAccess { .. } => ErrorKind::LedgerAccess,
            Self::UnknownOperation(_) => ErrorKind::UnknownOperation,
        }
    }

    /// Returns the ledger key the failure concerns, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::AlreadyExists { key, .. }
            | Self::NotFound { key, .. }
            | Self::Codec { key, .. }
            | Self::LedgerAccess { key, .. } => Some(key),
            Self::Validation(_) | Self::UnknownOperation(_) => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
