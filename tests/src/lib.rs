//! # IDM Chaincode Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/
//! │   └── dispatch_benchmarks.rs  # Invocation throughput
//! └── src/integration/
//!     ├── identity_flows.rs       # Identity lifecycle through the dispatcher
//!     ├── document_flows.rs       # Document lifecycle, key namespaces
//!     └── validation_flows.rs     # Rejected requests and ledger failures
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p idm-tests
//! cargo test -p idm-tests integration::identity_flows
//!
//! # Benchmarks
//! cargo bench -p idm-tests
//! ```
