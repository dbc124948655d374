//! Valset repository

use cosmwasm_std::{Order, StdResult, Storage};
use peggy_types::{Nonce, Valset};

use super::{CURRENT_VALSET, VALSET_REQUESTS};

/// Get the valset snapshot stored at `nonce`
/// # Errors
/// Returns an error if the stored valset cannot be decoded
pub fn get_valset_request(storage: &dyn Storage, nonce: Nonce) -> StdResult<Option<Valset>> {
    VALSET_REQUESTS.may_load(storage, nonce)
}

/// Store a valset snapshot under its nonce
/// # Errors
/// Returns an error if the valset cannot be serialized
pub fn set_valset_request(storage: &mut dyn Storage, valset: &Valset) -> StdResult<()> {
    VALSET_REQUESTS.save(storage, valset.nonce, valset)
}

/// Iterates every stored valset snapshot in nonce order.
///
/// The iterator is lazy: nothing past the last consumed entry is read or
/// decoded. Each call starts a fresh pass over the store.
pub fn valset_requests(
    storage: &dyn Storage,
    order: Order,
) -> impl Iterator<Item = StdResult<Valset>> + '_ {
    VALSET_REQUESTS
        .range(storage, None, None, order)
        .map(|item| item.map(|(_, valset)| valset))
}

/// Get the live validator set.
///
/// It is written at instantiation and kept current by the write path, so it
/// is always present.
/// # Errors
/// Returns an error if the current valset is missing or cannot be decoded
pub fn get_current_valset(storage: &dyn Storage) -> StdResult<Valset> {
    CURRENT_VALSET.load(storage)
}

/// Replace the live validator set
/// # Errors
/// Returns an error if the valset cannot be serialized
pub fn set_current_valset(storage: &mut dyn Storage, valset: &Valset) -> StdResult<()> {
    CURRENT_VALSET.save(storage, valset)
}
