//! # IDM Telemetry
//!
//! Structured logging for processes hosting the IDM chaincode.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use idm_telemetry::{init_tracing, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_tracing(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `idm-chaincode` | Service name in logs |
//! | `IDM_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `IDM_CONSOLE_OUTPUT` | `true` | Emit logs at all |
//! | `IDM_JSON_LOGS` | `false` (`true` in containers) | JSON instead of pretty output |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use tracing_setup::{env_filter, init_test_tracing, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// The log level directive did not parse.
    #[error("invalid log filter {0:?}: {1}")]
    Filter(String, String),

    /// A global subscriber could not be installed.
    #[error("failed to initialize subscriber: {0}")]
    SubscriberInit(String),
}
