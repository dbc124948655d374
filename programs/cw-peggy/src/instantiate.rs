//! This module contains the instantiate helper functions

use std::collections::BTreeSet;

use cosmwasm_std::{ensure, Env, Storage};
use peggy_types::{BridgeValidator, Valset};
use tracing::debug;

use crate::{
    codec::parse_eth_address,
    msg::{InstantiateMsg, MemberMsg},
    state::{set_current_valset, set_params, Params},
    ContractError,
};

/// Nonce of the validator set installed at instantiation
pub const GENESIS_VALSET_NONCE: u64 = 0;

/// Validates and stores the bridge parameters and the initial validator set
/// # Errors
/// Will return an error if an address is malformed, the peggy id is empty,
/// or the validator set is empty, has a zero-power member or repeats a key.
pub fn bridge(storage: &mut dyn Storage, env: &Env, msg: InstantiateMsg) -> Result<(), ContractError> {
    ensure!(
        !msg.peggy_id.is_empty(),
        ContractError::InvalidParams {
            reason: "peggy id must not be empty".to_string(),
        }
    );
    let params = Params {
        peggy_id: msg.peggy_id,
        bridge_ethereum_address: parse_eth_address(&msg.bridge_ethereum_address)?,
        bridge_chain_id: msg.bridge_chain_id,
    };

    let members = initial_members(&msg.initial_members)?;
    let valset = Valset::new(GENESIS_VALSET_NONCE, env.block.height, members);

    set_params(storage, &params)?;
    set_current_valset(storage, &valset)?;

    debug!(
        peggy_id = %params.peggy_id,
        members = valset.members.len(),
        total_power = valset.total_power(),
        "instantiated bridge"
    );
    Ok(())
}

fn initial_members(members: &[MemberMsg]) -> Result<Vec<BridgeValidator>, ContractError> {
    let invalid = |reason: String| ContractError::InvalidValset { reason };

    ensure!(
        !members.is_empty(),
        invalid("validator set must not be empty".to_string())
    );

    let mut seen = BTreeSet::new();
    members
        .iter()
        .map(|member| {
            let ethereum_address = parse_eth_address(&member.ethereum_address)?;
            ensure!(
                member.power > 0,
                invalid(format!("member {ethereum_address} has no power"))
            );
            ensure!(
                seen.insert(ethereum_address),
                invalid(format!("member {ethereum_address} is listed twice"))
            );

            Ok(BridgeValidator {
                power: member.power,
                ethereum_address,
            })
        })
        .collect()
}
