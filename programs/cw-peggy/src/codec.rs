//! Decoding of the identifiers carried by queries.
//!
//! Every query handler runs its arguments through these before touching the
//! store, so malformed input is always reported as
//! [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument).

use cosmwasm_std::{Addr, Api};
use peggy_types::{EthAddress, Nonce};

use crate::ContractError;

/// Parses a decimal valset or batch nonce
/// # Errors
/// Returns an error if `text` is not a well-formed `u64`
pub fn parse_nonce(text: &str) -> Result<Nonce, ContractError> {
    Ok(peggy_types::parse_nonce(text)?)
}

/// Parses an Ethereum address and checks it passes basic validation
/// # Errors
/// Returns an error if `text` is not 40 hex characters with an optional `0x` prefix
pub fn parse_eth_address(text: &str) -> Result<EthAddress, ContractError> {
    Ok(EthAddress::parse(text)?)
}

/// Decodes a bech32 account address of the local chain
/// # Errors
/// Returns an error if the checksum, prefix or length is wrong
pub fn parse_local_address(api: &dyn Api, text: &str) -> Result<Addr, ContractError> {
    api.addr_validate(text)
        .map_err(|e| ContractError::InvalidLocalAddress {
            address: text.to_string(),
            reason: e.to_string(),
        })
}
