//! # Input Validation
//!
//! Shape checks that run before any ledger access, so malformed requests
//! never reach the ledger.

use crate::errors::ValidationError;

// =============================================================================
// ARITY CONSTANTS
// =============================================================================

/// `InitGeneralInfo` / `UpdateGeneralInfo`: key plus twelve fields.
pub const IDENTITY_WRITE_ARITY: usize = 13;

/// `InitDocument`: key, certificate, image.
pub const DOCUMENT_CREATE_ARITY: usize = 3;

/// `ReadGeneralInfo` / `ReadDocument`: key only.
pub const READ_ARITY: usize = 1;

// =============================================================================
// VALIDATOR
// =============================================================================

/// Checks argument count, then that every argument is non-empty.
///
/// Pure: no side effects.
///
/// # Errors
///
/// - [`ValidationError::Arity`] if `args.len() != expected`
/// - [`ValidationError::EmptyArgument`] naming the first empty argument
pub fn validate(args: &[String], expected: usize) -> Result<(), ValidationError> {
    if args.len() != expected {
        return Err(ValidationError::Arity {
            expected,
            actual: args.len(),
        });
    }

    match args.iter().position(String::is_empty) {
        Some(position) => Err(ValidationError::EmptyArgument { position }),
        None => Ok(()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
