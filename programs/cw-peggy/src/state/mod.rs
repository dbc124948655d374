//! Store layout of the bridge registry.
//!
//! Every namespace is keyed so that ascending key order is ascending nonce,
//! then ascending secondary key (token contract bytes, then orchestrator
//! address). The pending scans and the "last N" queries depend on this order,
//! and the write path must use these same maps.

use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::{Item, Map};
use peggy_types::{BatchConfirm, EthAddress, Nonce, OutgoingTxBatch, Valset, ValsetConfirm};
use serde::{Deserialize, Serialize};

pub mod batches;
pub mod confirms;
pub mod valsets;

pub use batches::{get_outgoing_tx_batch, outgoing_tx_batches, set_outgoing_tx_batch};
pub use confirms::{
    batch_confirms_by_nonce_and_token, get_batch_confirm, get_valset_confirm, set_batch_confirm,
    set_valset_confirm, valset_confirms_by_nonce,
};
pub use valsets::{
    get_current_valset, get_valset_request, set_current_valset, set_valset_request,
    valset_requests,
};

/// Valset snapshots by nonce
pub const VALSET_REQUESTS: Map<Nonce, Valset> = Map::new("valset_requests");
/// The live validator set
pub const CURRENT_VALSET: Item<Valset> = Item::new("current_valset");
/// Valset confirmations by `(nonce, orchestrator)`
pub const VALSET_CONFIRMS: Map<(Nonce, &Addr), ValsetConfirm> = Map::new("valset_confirms");
/// Outgoing batches by `(nonce, token contract bytes)`
pub const OUTGOING_TX_BATCHES: Map<(Nonce, &[u8]), OutgoingTxBatch> =
    Map::new("outgoing_tx_batches");
/// Batch confirmations by `(nonce, token contract bytes, orchestrator)`
pub const BATCH_CONFIRMS: Map<(Nonce, &[u8], &Addr), BatchConfirm> = Map::new("batch_confirms");
/// Bridge parameters, written once at instantiation
pub const PARAMS: Item<Params> = Item::new("params");

/// Parameters binding this registry to one Ethereum bridge deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Unique identifier of the bridge, mixed into every signed checkpoint
    pub peggy_id: String,
    /// The bridge contract on Ethereum
    pub bridge_ethereum_address: EthAddress,
    /// Chain id of the Ethereum network the bridge contract lives on
    pub bridge_chain_id: u64,
}

/// Get the bridge parameters
/// # Errors
/// Returns an error if the contract was not instantiated or the params cannot be decoded
pub fn get_params(storage: &dyn Storage) -> StdResult<Params> {
    PARAMS.load(storage)
}

/// Store the bridge parameters
/// # Errors
/// Returns an error if the params cannot be serialized
pub fn set_params(storage: &mut dyn Storage, params: &Params) -> StdResult<()> {
    PARAMS.save(storage, params)
}
