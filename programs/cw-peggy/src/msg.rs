//! The messages accepted by the contract
#![allow(clippy::module_name_repetitions)]

use cosmwasm_schema::cw_serde;

/// The message to instantiate the contract
#[cw_serde]
pub struct InstantiateMsg {
    /// Unique identifier of the bridge deployment
    pub peggy_id: String,
    /// Address of the bridge contract on Ethereum
    pub bridge_ethereum_address: String,
    /// Chain id of the Ethereum network
    pub bridge_chain_id: u64,
    /// The validator set the bridge starts with
    pub initial_members: Vec<MemberMsg>,
}

/// A validator of the initial set
#[cw_serde]
pub struct MemberMsg {
    /// Voting power
    pub power: u64,
    /// Ethereum signing key, as hex
    pub ethereum_address: String,
}

/// The query messages.
///
/// Arguments are carried in their text encoding, exactly as relayers send
/// them on the legacy query path; they are decoded by the handlers before the
/// store is read.
#[cw_serde]
pub enum QueryMsg {
    /// The live validator set
    CurrentValset {},
    /// The valset stored at `nonce`
    ValsetRequest {
        /// Decimal valset nonce
        nonce: String,
    },
    /// The confirmation `address` submitted for the valset at `nonce`
    ValsetConfirm {
        /// Decimal valset nonce
        nonce: String,
        /// Bech32 orchestrator address
        address: String,
    },
    /// Every confirmation of the valset at `nonce`
    ValsetConfirms {
        /// Decimal valset nonce
        nonce: String,
    },
    /// The most recent valsets
    LastValsetRequests {},
    /// The oldest valset `address` has not confirmed
    LastPendingValsetRequest {
        /// Bech32 orchestrator address
        address: String,
    },
    /// The batch of `token_contract` at `nonce`
    Batch {
        /// Decimal batch nonce
        nonce: String,
        /// Hex ERC20 contract address
        token_contract: String,
    },
    /// Every confirmation of the batch of `token_contract` at `nonce`
    BatchConfirms {
        /// Decimal batch nonce
        nonce: String,
        /// Hex ERC20 contract address
        token_contract: String,
    },
    /// The oldest batch `address` has not confirmed
    LastPendingBatchRequest {
        /// Bech32 orchestrator address
        address: String,
    },
    /// The first batches in store order, of every token
    LastBatches {},
    /// The valset at `nonce` with its signatures placed by member
    ValsetMultisig {
        /// Decimal valset nonce
        nonce: String,
    },
    /// The batch of `token_contract` at `nonce` with its signatures
    SignedBatch {
        /// Decimal batch nonce
        nonce: String,
        /// Hex ERC20 contract address
        token_contract: String,
    },
    /// The bridge parameters
    Params {},
}
