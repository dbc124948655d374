//! Confirmation registry.
//!
//! A confirmation exists at most once per `(item, orchestrator)`; writing it
//! again replaces the previous record.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use peggy_types::{BatchConfirm, EthAddress, Nonce, ValsetConfirm};

use super::{BATCH_CONFIRMS, VALSET_CONFIRMS};

/// Get the confirmation `orchestrator` submitted for the valset at `nonce`
/// # Errors
/// Returns an error if the stored confirmation cannot be decoded
pub fn get_valset_confirm(
    storage: &dyn Storage,
    nonce: Nonce,
    orchestrator: &Addr,
) -> StdResult<Option<ValsetConfirm>> {
    VALSET_CONFIRMS.may_load(storage, (nonce, orchestrator))
}

/// Store a valset confirmation under its own `(nonce, orchestrator)`,
/// replacing any earlier one from the same orchestrator
/// # Errors
/// Returns an error if the confirmation cannot be serialized
pub fn set_valset_confirm(storage: &mut dyn Storage, confirm: &ValsetConfirm) -> StdResult<()> {
    VALSET_CONFIRMS.save(storage, (confirm.nonce, &confirm.orchestrator), confirm)
}

/// Iterates the confirmations of the valset at `nonce`, ordered by
/// orchestrator address. Lazy and restartable; dropping the iterator stops
/// the scan.
pub fn valset_confirms_by_nonce(
    storage: &dyn Storage,
    nonce: Nonce,
) -> impl Iterator<Item = StdResult<ValsetConfirm>> + '_ {
    VALSET_CONFIRMS
        .prefix(nonce)
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, confirm)| confirm))
}

/// Get the confirmation `orchestrator` submitted for the batch `(nonce, token_contract)`
/// # Errors
/// Returns an error if the stored confirmation cannot be decoded
pub fn get_batch_confirm(
    storage: &dyn Storage,
    nonce: Nonce,
    token_contract: &EthAddress,
    orchestrator: &Addr,
) -> StdResult<Option<BatchConfirm>> {
    BATCH_CONFIRMS.may_load(storage, (nonce, token_contract.as_slice(), orchestrator))
}

/// Store a batch confirmation under its own `(nonce, token_contract, orchestrator)`,
/// replacing any earlier one from the same orchestrator
/// # Errors
/// Returns an error if the confirmation cannot be serialized
pub fn set_batch_confirm(storage: &mut dyn Storage, confirm: &BatchConfirm) -> StdResult<()> {
    BATCH_CONFIRMS.save(
        storage,
        (
            confirm.nonce,
            confirm.token_contract.as_slice(),
            &confirm.orchestrator,
        ),
        confirm,
    )
}

/// Iterates the confirmations of the batch `(nonce, token_contract)`, ordered
/// by orchestrator address
pub fn batch_confirms_by_nonce_and_token<'a>(
    storage: &'a dyn Storage,
    nonce: Nonce,
    token_contract: &EthAddress,
) -> impl Iterator<Item = StdResult<BatchConfirm>> + 'a {
    BATCH_CONFIRMS
        .prefix((nonce, token_contract.as_slice()))
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, confirm)| confirm))
}
