//! Outgoing batch repository

use cosmwasm_std::{Order, StdResult, Storage};
use peggy_types::{EthAddress, Nonce, OutgoingTxBatch};

use super::OUTGOING_TX_BATCHES;

/// Get the batch of `token_contract` stored at `nonce`
/// # Errors
/// Returns an error if the stored batch cannot be decoded
pub fn get_outgoing_tx_batch(
    storage: &dyn Storage,
    token_contract: &EthAddress,
    nonce: Nonce,
) -> StdResult<Option<OutgoingTxBatch>> {
    OUTGOING_TX_BATCHES.may_load(storage, (nonce, token_contract.as_slice()))
}

/// Store a batch under `(batch_nonce, token_contract)`
/// # Errors
/// Returns an error if the batch cannot be serialized
pub fn set_outgoing_tx_batch(storage: &mut dyn Storage, batch: &OutgoingTxBatch) -> StdResult<()> {
    OUTGOING_TX_BATCHES.save(
        storage,
        (batch.batch_nonce, batch.token_contract.as_slice()),
        batch,
    )
}

/// Iterates every stored batch of every token, ascending by nonce then token
/// contract. Lazy like [`super::valset_requests`].
pub fn outgoing_tx_batches(
    storage: &dyn Storage,
) -> impl Iterator<Item = StdResult<OutgoingTxBatch>> + '_ {
    OUTGOING_TX_BATCHES
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, batch)| batch))
}
