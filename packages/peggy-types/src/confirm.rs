//! Confirmations submitted by orchestrators.
//!
//! Only the presence of a confirmation is meaningful to the query engine; the
//! signature is carried verbatim for relayers and is never verified here.

use cosmwasm_std::Addr;
use serde::{Deserialize, Serialize};

use crate::{EthAddress, Nonce};

/// Attestation that an orchestrator signed the valset at `nonce`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValsetConfirm {
    /// The confirmed valset nonce
    pub nonce: Nonce,
    /// The orchestrator that submitted the confirmation
    pub orchestrator: Addr,
    /// The Ethereum key that produced `signature`
    pub eth_address: EthAddress,
    /// Hex encoded Ethereum signature over the valset checkpoint
    pub signature: String,
}

/// Attestation that an orchestrator signed the batch `(nonce, token_contract)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfirm {
    /// The confirmed batch nonce
    pub nonce: Nonce,
    /// The token contract of the confirmed batch
    pub token_contract: EthAddress,
    /// The Ethereum key that produced `signature`
    pub eth_signer: EthAddress,
    /// The orchestrator that submitted the confirmation
    pub orchestrator: Addr,
    /// Hex encoded Ethereum signature over the batch checkpoint
    pub signature: String,
}
