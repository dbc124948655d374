//! This module contains the `CosmWasm` entrypoints for the peggy contract

use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response};
use tracing::debug;

use crate::msg::{InstantiateMsg, QueryMsg};
use crate::{instantiate, query, ContractError};

/// The version of the contracts state.
/// It is used to determine if the state needs to be migrated in the migrate entry point.
const STATE_VERSION: &str = env!("CARGO_PKG_VERSION");
const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");

/// The instantiate entry point for the CosmWasm contract.
/// # Errors
/// Will return an error if the bridge parameters or the initial validator set are invalid.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, STATE_VERSION)?;

    instantiate::bridge(deps.storage, &env, msg)?;

    Ok(Response::default())
}

/// The query entry point for the CosmWasm contract.
/// It routes the message to the appropriate handler.
/// # Errors
/// Will return an error if the handler returns an error.
#[entry_point]
#[allow(clippy::needless_pass_by_value)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    dispatch(deps, &msg)
}

/// Serves a query given in the legacy path form, `peggy/<query>/<arg>/...`.
/// # Errors
/// Will return an error if the path is malformed or the handler returns an error.
pub fn query_path(deps: Deps, path: &str) -> Result<Binary, ContractError> {
    dispatch(deps, &QueryMsg::from_path(path)?)
}

fn dispatch(deps: Deps, msg: &QueryMsg) -> Result<Binary, ContractError> {
    debug!(query = msg.name(), "serving query");

    match msg {
        QueryMsg::CurrentValset {} => query::current_valset(deps),
        QueryMsg::ValsetRequest { nonce } => query::valset_request(deps, nonce),
        QueryMsg::ValsetConfirm { nonce, address } => query::valset_confirm(deps, nonce, address),
        QueryMsg::ValsetConfirms { nonce } => query::valset_confirms(deps, nonce),
        QueryMsg::LastValsetRequests {} => query::last_valset_requests(deps),
        QueryMsg::LastPendingValsetRequest { address } => {
            query::last_pending_valset_request(deps, address)
        }
        QueryMsg::Batch {
            nonce,
            token_contract,
        } => query::batch(deps, nonce, token_contract),
        QueryMsg::BatchConfirms {
            nonce,
            token_contract,
        } => query::batch_confirms(deps, nonce, token_contract),
        QueryMsg::LastPendingBatchRequest { address } => {
            query::last_pending_batch_request(deps, address)
        }
        QueryMsg::LastBatches {} => query::last_batches(deps),
        QueryMsg::ValsetMultisig { nonce } => query::valset_multisig(deps, nonce),
        QueryMsg::SignedBatch {
            nonce,
            token_contract,
        } => query::signed_batch(deps, nonce, token_contract),
        QueryMsg::Params {} => query::params(deps),
    }
}
