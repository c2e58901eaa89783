//! # IDM Chaincode - Identity and Document Records
//!
//! Validation and state transitions for two record kinds kept in an external
//! key-value ledger: personal-identity records and supporting-document records.
//!
//! ## Operations
//!
//! | Function | Arguments | Effect |
//! |----------|-----------|--------|
//! | `InitGeneralInfo` | key + 12 fields | Create an identity record |
//! | `ReadGeneralInfo` | key | Return the stored identity bytes |
//! | `UpdateGeneralInfo` | key + 12 values | Overwrite eleven mutable fields |
//! | `InitDocument` | key, certificate, image | Create a document record |
//! | `ReadDocument` | key | Return the stored document bytes |
//!
//! ## Record Invariants
//!
//! - A create never overwrites: any value present under the key fails the call.
//! - Key, discriminator and external reference number never change after create.
//! - Validation runs before any ledger access.
//! - At most one read and one write per invocation.
//!
//! ## Outbound Dependencies
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | `Ledger` | Read/write raw bytes by string key |
//!
//! ## Usage Example
//!
//! ```
//! use idm_chaincode::prelude::*;
//!
//! let mut chaincode = Chaincode::new(ChaincodeConfig::default());
//! let mut ledger = InMemoryLedger::new();
//!
//! let response = chaincode.invoke(
//!     &mut ledger,
//!     &Invocation::new("InitDocument", ["doc1", "CERT", "IMG"]),
//! );
//! assert!(response.is_ok());
//!
//! let response = chaincode.invoke(&mut ledger, &Invocation::new("ReadDocument", ["doc1"]));
//! let record: DocumentRecord = idm_chaincode::codec::decode(&response.payload).unwrap();
//! assert_eq!(record.certificate_blob, "CERT");
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod codec;
pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{DocumentRecord, IdentityRecord, Record, RecordKind};

    // Validation
    pub use crate::domain::validation::{
        validate, DOCUMENT_CREATE_ARITY, IDENTITY_WRITE_ARITY, READ_ARITY,
    };

    // Ports
    pub use crate::ports::inbound::{Invocation, Operation, Response};
    pub use crate::ports::outbound::Ledger;

    // Errors
    pub use crate::errors::{ChaincodeError, CodecError, ErrorKind, LedgerError, ValidationError};

    // Config
    pub use crate::config::{ChaincodeConfig, ConfigError, KeyLayout};

    // Adapters
    pub use crate::adapters::InMemoryLedger;

    // Service
    pub use crate::service::{Chaincode, DispatchState, DocumentManager, IdentityManager};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
