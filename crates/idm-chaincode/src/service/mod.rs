//! # Service Layer
//!
//! Record managers and the dispatcher that routes invocations to them.

pub mod dispatcher;
pub mod document;
mod helpers;
pub mod identity;

pub use dispatcher::{handler, Chaincode, DispatchState, Handler};
pub use document::DocumentManager;
pub use identity::IdentityManager;
