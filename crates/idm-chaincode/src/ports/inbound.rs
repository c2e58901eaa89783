//! # Driving Ports (API - Inbound)
//!
//! What the invocation transport hands to the chaincode and what it gets
//! back: a function name with ordered string arguments in, a status-coded
//! response out.

use crate::domain::validation::{DOCUMENT_CREATE_ARITY, IDENTITY_WRITE_ARITY, READ_ARITY};
use crate::errors::ChaincodeError;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// INVOCATION
// =============================================================================

/// One request: an operation name plus positional arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Operation name, matched exactly.
    pub function: String,
    /// Positional arguments.
    pub args: Vec<String>,
}

impl Invocation {
    /// Creates an invocation from a function name and its arguments.
    pub fn new<F, I, A>(function: F, args: I) -> Self
    where
        F: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a raw argument vector: the first element names the function,
    /// the rest are its parameters.
    ///
    /// An empty vector yields an empty function name, which no operation
    /// matches.
    #[must_use]
    pub fn from_args(mut raw: Vec<String>) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        let function = raw.remove(0);
        Self {
            function,
            args: raw,
        }
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Result of one invocation, as returned to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// [`Response::OK`] or [`Response::ERROR`].
    pub status: i32,
    /// Error description; empty on success.
    pub message: String,
    /// Read payload; empty for writes and errors.
    pub payload: Vec<u8>,
}

impl Response {
    /// Success status.
    pub const OK: i32 = 200;

    /// Error status.
    pub const ERROR: i32 = 500;

    /// Successful response carrying `payload`.
    #[must_use]
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Self::OK,
            message: String::new(),
            payload,
        }
    }

    /// Error response carrying `message`.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Self::ERROR,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Returns true for a success response.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }
}

impl From<Result<Vec<u8>, ChaincodeError>> for Response {
    fn from(result: Result<Vec<u8>, ChaincodeError>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(err) => Self::error(err.to_string()),
        }
    }
}

// =============================================================================
// OPERATION
// =============================================================================

/// The operations the chaincode exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create an identity record.
    InitGeneralInfo,
    /// Read an identity record.
    ReadGeneralInfo,
    /// Overwrite the mutable fields of an identity record.
    UpdateGeneralInfo,
    /// Create a document record.
    InitDocument,
    /// Read a document record.
    ReadDocument,
}

impl Operation {
    /// Every operation, in dispatch-table order.
    pub const ALL: [Operation; 5] = [
        Operation::InitGeneralInfo,
        Operation::ReadGeneralInfo,
        Operation::UpdateGeneralInfo,
        Operation::InitDocument,
        Operation::ReadDocument,
    ];

    /// Wire name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InitGeneralInfo => "InitGeneralInfo",
            Self::ReadGeneralInfo => "ReadGeneralInfo",
            Self::UpdateGeneralInfo => "UpdateGeneralInfo",
            Self::InitDocument => "InitDocument",
            Self::ReadDocument => "ReadDocument",
        }
    }

    /// Declared argument count.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::InitGeneralInfo | Self::UpdateGeneralInfo => IDENTITY_WRITE_ARITY,
            Self::InitDocument => DOCUMENT_CREATE_ARITY,
            Self::ReadGeneralInfo | Self::ReadDocument => READ_ARITY,
        }
    }

    /// Returns true if the operation may write to the ledger.
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(
            self,
            Self::InitGeneralInfo | Self::UpdateGeneralInfo | Self::InitDocument
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ChaincodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| ChaincodeError::UnknownOperation(s.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
