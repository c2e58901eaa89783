//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Port (Inbound)**: `Invocation` in, `Response` out
//! - **Driven Port (Outbound)**: `Ledger`
//! - No concrete implementations in this module

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
