//! Ledger access shared by the record managers.
//!
//! Every ledger failure is wrapped with the caller's record key, never the
//! layout-derived ledger key.

use crate::domain::entities::RecordKind;
use crate::errors::ChaincodeError;
use crate::ports::outbound::Ledger;

/// Read the raw value under `ledger_key`, failing if absent.
pub(crate) fn read_existing<L: Ledger + ?Sized>(
    ledger: &L,
    kind: RecordKind,
    ledger_key: &str,
    key: &str,
) -> Result<Vec<u8>, ChaincodeError> {
    ledger
        .get_state(ledger_key)
        .map_err(|source| ChaincodeError::LedgerAccess {
            key: key.to_string(),
            source,
        })?
        .ok_or_else(|| ChaincodeError::NotFound {
            kind,
            key: key.to_string(),
        })
}

/// Fail if anything is stored under `ledger_key`.
pub(crate) fn ensure_absent<L: Ledger + ?Sized>(
    ledger: &L,
    kind: RecordKind,
    ledger_key: &str,
    key: &str,
) -> Result<(), ChaincodeError> {
    let present = ledger
        .contains(ledger_key)
        .map_err(|source| ChaincodeError::LedgerAccess {
            key: key.to_string(),
            source,
        })?;

    if present {
        return Err(ChaincodeError::AlreadyExists {
            kind,
            key: key.to_string(),
        });
    }
    Ok(())
}

/// Write `value` under `ledger_key`.
pub(crate) fn write<L: Ledger + ?Sized>(
    ledger: &mut L,
    ledger_key: &str,
    key: &str,
    value: &[u8],
) -> Result<(), ChaincodeError> {
    ledger
        .put_state(ledger_key, value)
        .map_err(|source| ChaincodeError::LedgerAccess {
            key: key.to_string(),
            source,
        })
}
