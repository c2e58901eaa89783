//! # Operation Dispatcher
//!
//! Routes an [`Invocation`] to the record manager that implements it and folds
//! the outcome into a [`Response`].
//!
//! ## Dispatch Table
//!
//! | Function | Handler | Arity |
//! |----------|---------|-------|
//! | `InitGeneralInfo` | `IdentityManager::create` | 13 |
//! | `ReadGeneralInfo` | `IdentityManager::read` | 1 |
//! | `UpdateGeneralInfo` | `IdentityManager::update` | 13 |
//! | `InitDocument` | `DocumentManager::create` | 3 |
//! | `ReadDocument` | `DocumentManager::read` | 1 |
//!
//! Names match exactly. Anything else is `UnknownOperation`.

use crate::config::ChaincodeConfig;
use crate::errors::ChaincodeError;
use crate::ports::inbound::{Invocation, Operation, Response};
use crate::ports::outbound::Ledger;
use crate::service::document::DocumentManager;
use crate::service::identity::IdentityManager;
use tracing::{debug, info, instrument, warn};

/// Plain function implementing one operation.
pub type Handler<L> = fn(&ChaincodeConfig, &mut L, &[String]) -> Result<Vec<u8>, ChaincodeError>;

/// Handler registered for `operation`.
#[must_use]
pub fn handler<L: Ledger + ?Sized>(operation: Operation) -> Handler<L> {
    match operation {
        Operation::InitGeneralInfo => init_general_info::<L>,
        Operation::ReadGeneralInfo => read_general_info::<L>,
        Operation::UpdateGeneralInfo => update_general_info::<L>,
        Operation::InitDocument => init_document::<L>,
        Operation::ReadDocument => read_document::<L>,
    }
}

fn init_general_info<L: Ledger + ?Sized>(
    config: &ChaincodeConfig,
    ledger: &mut L,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    IdentityManager::new(ledger, config.key_layout).create(args)?;
    Ok(Vec::new())
}

fn read_general_info<L: Ledger + ?Sized>(
    config: &ChaincodeConfig,
    ledger: &mut L,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    IdentityManager::new(ledger, config.key_layout).read(args)
}

fn update_general_info<L: Ledger + ?Sized>(
    config: &ChaincodeConfig,
    ledger: &mut L,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    IdentityManager::new(ledger, config.key_layout).update(args)?;
    Ok(Vec::new())
}

fn init_document<L: Ledger + ?Sized>(
    config: &ChaincodeConfig,
    ledger: &mut L,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    DocumentManager::new(ledger, config.key_layout).create(args)?;
    Ok(Vec::new())
}

fn read_document<L: Ledger + ?Sized>(
    config: &ChaincodeConfig,
    ledger: &mut L,
    args: &[String],
) -> Result<Vec<u8>, ChaincodeError> {
    DocumentManager::new(ledger, config.key_layout).read(args)
}

// =============================================================================
// CHAINCODE
// =============================================================================

/// Whether an invocation is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchState {
    /// Waiting for an invocation.
    #[default]
    Idle,
    /// Running a handler.
    Processing,
}

/// Chaincode entry point.
///
/// Holds no record state; everything lives in the ledger passed to each call.
#[derive(Debug, Default)]
pub struct Chaincode {
    config: ChaincodeConfig,
    state: DispatchState,
}

impl Chaincode {
    /// Create a chaincode with the given configuration.
    #[must_use]
    pub fn new(config: ChaincodeConfig) -> Self {
        Self {
            config,
            state: DispatchState::Idle,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ChaincodeConfig {
        &self.config
    }

    /// Current dispatch state.
    #[must_use]
    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Instantiation hook. Touches no state.
    pub fn init(&mut self) -> Response {
        info!(key_layout = %self.config().key_layout, "chaincode initialized");
        Response::success(Vec::new())
    }

    /// Run one invocation and fold the outcome into a [`Response`].
    #[instrument(skip(self, ledger, invocation), fields(function = %invocation.function))]
    pub fn invoke<L: Ledger + ?Sized>(&mut self, ledger: &mut L, invocation: &Invocation) -> Response {
        self.execute(ledger, invocation).into()
    }

    /// Run one invocation.
    ///
    /// Writes return an empty payload; reads return the stored bytes.
    ///
    /// # Errors
    ///
    /// `UnknownOperation` for an unregistered function name, otherwise
    /// whatever the handler returned.
    pub fn execute<L: Ledger + ?Sized>(
        &mut self,
        ledger: &mut L,
        invocation: &Invocation,
    ) -> Result<Vec<u8>, ChaincodeError> {
        debug!(function = %invocation.function, "invoke is running");

        let operation = invocation.function.parse::<Operation>().inspect_err(|_| {
            warn!(function = %invocation.function, "invoke did not find func");
        })?;

        self.state = DispatchState::Processing;
        debug!(%operation, write = operation.is_write(), "dispatching");
        let result = handler::<L>(operation)(&self.config, ledger, &invocation.args);
        self.state = DispatchState::Idle;

        if let Err(err) = &result {
            warn!(%operation, error = %err, "operation failed");
        }
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
