//! # Domain Layer (Inner Hexagon)
//!
//! Record shapes and input rules.
//! NO I/O, NO ledger access.

pub mod entities;
pub mod validation;

pub use entities::*;
pub use validation::*;
