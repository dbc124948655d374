//! This module contains the query message handlers.
//!
//! Every handler decodes its arguments before reading the store. Lookups that
//! find nothing answer with an empty payload, except [`batch`] and
//! [`signed_batch`], which fail with [`ContractError::BatchNotFound`]:
//! relayers in the field rely on that difference.

use cosmwasm_std::{Binary, Deps, Order, StdResult};
use peggy_types::{SignedOutgoingTxBatch, ValsetMultisig};
use serde::Serialize;

use crate::{
    codec::{parse_eth_address, parse_local_address, parse_nonce},
    pending::{oldest_unsigned_batch, oldest_unsigned_valset},
    state::{
        batch_confirms_by_nonce_and_token, get_current_valset, get_outgoing_tx_batch, get_params,
        get_valset_confirm, get_valset_request, outgoing_tx_batches, valset_confirms_by_nonce,
        valset_requests,
    },
    ContractError,
};

/// Maximum number of valsets returned by [`last_valset_requests`]
pub const MAX_VALSET_REQUESTS_RETURNED: usize = 5;
/// Maximum number of batches returned by [`last_batches`]
pub const MAX_BATCHES_RETURNED: usize = 100;

/// Encodes a response as indented JSON
fn to_indented_json<T: Serialize>(value: &T) -> Result<Binary, ContractError> {
    serde_json::to_vec_pretty(value)
        .map(Binary::from)
        .map_err(ContractError::SerializeResponseFailed)
}

/// Encodes `value`, or answers with an empty payload when there is nothing
fn to_json_or_empty<T: Serialize>(value: Option<&T>) -> Result<Binary, ContractError> {
    value.map_or_else(|| Ok(Binary::default()), to_indented_json)
}

/// Encodes a list, or answers with an empty payload when it is empty
fn list_to_json_or_empty<T: Serialize>(items: &[T]) -> Result<Binary, ContractError> {
    if items.is_empty() {
        return Ok(Binary::default());
    }
    to_indented_json(&items)
}

/// Gets the live validator set
/// # Errors
/// Returns an error if the current valset cannot be read
pub fn current_valset(deps: Deps) -> Result<Binary, ContractError> {
    to_indented_json(&get_current_valset(deps.storage)?)
}

/// Gets the valset stored at `nonce`
/// # Errors
/// Returns an error if the nonce is malformed
/// # Returns
/// The valset, or an empty payload if there is none
pub fn valset_request(deps: Deps, nonce: &str) -> Result<Binary, ContractError> {
    let nonce = parse_nonce(nonce)?;

    to_json_or_empty(get_valset_request(deps.storage, nonce)?.as_ref())
}

/// Gets the confirmation `address` submitted for the valset at `nonce`
/// # Errors
/// Returns an error if the nonce or the address is malformed
/// # Returns
/// The confirmation, or an empty payload if there is none
pub fn valset_confirm(deps: Deps, nonce: &str, address: &str) -> Result<Binary, ContractError> {
    let nonce = parse_nonce(nonce)?;
    let orchestrator = parse_local_address(deps.api, address)?;

    to_json_or_empty(get_valset_confirm(deps.storage, nonce, &orchestrator)?.as_ref())
}

/// Gets every confirmation of the valset at `nonce`, ordered by orchestrator
/// # Errors
/// Returns an error if the nonce is malformed
/// # Returns
/// The confirmations, or an empty payload if there are none
pub fn valset_confirms(deps: Deps, nonce: &str) -> Result<Binary, ContractError> {
    let nonce = parse_nonce(nonce)?;

    let confirms = valset_confirms_by_nonce(deps.storage, nonce).collect::<StdResult<Vec<_>>>()?;
    list_to_json_or_empty(&confirms)
}

/// Gets the [`MAX_VALSET_REQUESTS_RETURNED`] most recent valsets, newest first
/// # Errors
/// Returns an error if a stored valset cannot be decoded
pub fn last_valset_requests(deps: Deps) -> Result<Binary, ContractError> {
    let valsets = valset_requests(deps.storage, Order::Descending)
        .take(MAX_VALSET_REQUESTS_RETURNED)
        .collect::<StdResult<Vec<_>>>()?;
    list_to_json_or_empty(&valsets)
}

/// Gets the oldest valset `address` has not confirmed
/// # Errors
/// Returns an error if the address is malformed
/// # Returns
/// The valset, or an empty payload if every valset is confirmed
pub fn last_pending_valset_request(deps: Deps, address: &str) -> Result<Binary, ContractError> {
    let orchestrator = parse_local_address(deps.api, address)?;

    to_json_or_empty(oldest_unsigned_valset(deps.storage, &orchestrator)?.as_ref())
}

/// Gets the batch of `token_contract` at `nonce`
/// # Errors
/// Returns an error if the arguments are malformed, or if no such batch exists
pub fn batch(deps: Deps, nonce: &str, token_contract: &str) -> Result<Binary, ContractError> {
    let nonce = parse_nonce(nonce)?;
    let token_contract = parse_eth_address(token_contract)?;

    let batch = get_outgoing_tx_batch(deps.storage, &token_contract, nonce)?.ok_or(
        ContractError::BatchNotFound {
            nonce,
            token_contract,
        },
    )?;
    to_indented_json(&batch)
}

/// Gets every confirmation of the batch of `token_contract` at `nonce`
/// # Errors
/// Returns an error if the arguments are malformed
/// # Returns
/// The confirmations, or an empty payload if there are none
pub fn batch_confirms(
    deps: Deps,
    nonce: &str,
    token_contract: &str,
) -> Result<Binary, ContractError> {
    let nonce = parse_nonce(nonce)?;
    let token_contract = parse_eth_address(token_contract)?;

    let confirms = batch_confirms_by_nonce_and_token(deps.storage, nonce, &token_contract)
        .collect::<StdResult<Vec<_>>>()?;
    list_to_json_or_empty(&confirms)
}

/// Gets the oldest batch `address` has not confirmed
/// # Errors
/// Returns an error if the address is malformed
/// # Returns
/// The batch, or an empty payload if every batch is confirmed
pub fn last_pending_batch_request(deps: Deps, address: &str) -> Result<Binary, ContractError> {
    let orchestrator = parse_local_address(deps.api, address)?;

    to_json_or_empty(oldest_unsigned_batch(deps.storage, &orchestrator)?.as_ref())
}

/// Gets up to [`MAX_BATCHES_RETURNED`] batches of any token, in store order
/// # Errors
/// Returns an error if a stored batch cannot be decoded
pub fn last_batches(deps: Deps) -> Result<Binary, ContractError> {
    let batches = outgoing_tx_batches(deps.storage)
        .take(MAX_BATCHES_RETURNED)
        .collect::<StdResult<Vec<_>>>()?;
    list_to_json_or_empty(&batches)
}

/// Gets the valset at `nonce` with a signature slot per member
/// # Errors
/// Returns an error if the nonce is malformed
/// # Returns
/// The valset and its signatures, or an empty payload if there is no such valset
pub fn valset_multisig(deps: Deps, nonce: &str) -> Result<Binary, ContractError> {
    let nonce = parse_nonce(nonce)?;

    let Some(valset) = get_valset_request(deps.storage, nonce)? else {
        return Ok(Binary::default());
    };
    let confirms = valset_confirms_by_nonce(deps.storage, nonce).collect::<StdResult<Vec<_>>>()?;

    to_indented_json(&ValsetMultisig::assemble(valset, confirms))
}

/// Gets the batch of `token_contract` at `nonce` with its signatures
/// # Errors
/// Returns an error if the arguments are malformed, or if no such batch exists
pub fn signed_batch(
    deps: Deps,
    nonce: &str,
    token_contract: &str,
) -> Result<Binary, ContractError> {
    let nonce = parse_nonce(nonce)?;
    let token_contract = parse_eth_address(token_contract)?;

    let batch = get_outgoing_tx_batch(deps.storage, &token_contract, nonce)?.ok_or(
        ContractError::BatchNotFound {
            nonce,
            token_contract,
        },
    )?;
    let confirms = batch_confirms_by_nonce_and_token(deps.storage, nonce, &token_contract)
        .collect::<StdResult<Vec<_>>>()?;

    to_indented_json(&SignedOutgoingTxBatch::assemble(batch, confirms))
}

/// Gets the bridge parameters
/// # Errors
/// Returns an error if the params cannot be read
pub fn params(deps: Deps) -> Result<Binary, ContractError> {
    to_indented_json(&get_params(deps.storage)?)
}
