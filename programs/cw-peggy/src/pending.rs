//! Pending item scans: finding the oldest valset or batch an orchestrator
//! still has to sign.

use cosmwasm_std::{Addr, Order, StdResult, Storage};
use peggy_types::{OutgoingTxBatch, Valset};
use tracing::debug;

use crate::state::{get_batch_confirm, get_valset_confirm, outgoing_tx_batches, valset_requests};

/// Returns the first item, in iteration order, that `is_confirmed` rejects.
///
/// Stops at the first hit; later items are neither read nor decoded.
fn first_unconfirmed<T>(
    items: impl Iterator<Item = StdResult<T>>,
    mut is_confirmed: impl FnMut(&T) -> StdResult<bool>,
) -> StdResult<Option<T>> {
    for item in items {
        let item = item?;
        if !is_confirmed(&item)? {
            return Ok(Some(item));
        }
    }

    Ok(None)
}

/// The valset with the smallest nonce that `orchestrator` has not confirmed
/// # Errors
/// Returns an error if a stored valset or confirmation cannot be decoded
pub fn oldest_unsigned_valset(
    storage: &dyn Storage,
    orchestrator: &Addr,
) -> StdResult<Option<Valset>> {
    let pending = first_unconfirmed(valset_requests(storage, Order::Ascending), |valset| {
        Ok(get_valset_confirm(storage, valset.nonce, orchestrator)?.is_some())
    })?;

    if let Some(valset) = &pending {
        debug!(nonce = valset.nonce, %orchestrator, "found unsigned valset");
    }
    Ok(pending)
}

/// The batch with the smallest `(nonce, token contract)` key that
/// `orchestrator` has not confirmed
/// # Errors
/// Returns an error if a stored batch or confirmation cannot be decoded
pub fn oldest_unsigned_batch(
    storage: &dyn Storage,
    orchestrator: &Addr,
) -> StdResult<Option<OutgoingTxBatch>> {
    let pending = first_unconfirmed(outgoing_tx_batches(storage), |batch| {
        Ok(
            get_batch_confirm(storage, batch.batch_nonce, &batch.token_contract, orchestrator)?
                .is_some(),
        )
    })?;

    if let Some(batch) = &pending {
        debug!(
            nonce = batch.batch_nonce,
            token_contract = %batch.token_contract,
            %orchestrator,
            "found unsigned batch"
        );
    }
    Ok(pending)
}
