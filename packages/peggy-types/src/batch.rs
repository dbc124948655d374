//! Outgoing transaction batches

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{EthAddress, Nonce};

/// An amount of an ERC20 token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Erc20Token {
    /// The token amount, in the token's base unit. Encoded as a base-10 string.
    #[serde(with = "decimal")]
    pub amount: U256,
    /// The ERC20 contract of the token
    pub contract: EthAddress,
}

/// A single transfer from the local chain to Ethereum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingTransferTx {
    /// Unique id of the transfer
    pub id: u64,
    /// Bech32 address of the local sender
    pub sender: String,
    /// Ethereum recipient
    pub dest_address: EthAddress,
    /// The amount sent
    pub erc20_token: Erc20Token,
    /// The fee paid to the relayer submitting the batch
    pub erc20_fee: Erc20Token,
}

/// A batch of transfers of a single token bound for Ethereum.
///
/// Keyed by `(batch_nonce, token_contract)`: batches of different tokens share
/// the nonce space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingTxBatch {
    /// The batch nonce
    pub batch_nonce: Nonce,
    /// The transfers in the batch, in submission order
    pub transactions: Vec<OutgoingTransferTx>,
    /// The ERC20 contract every transfer in the batch moves
    pub token_contract: EthAddress,
    /// Height of the local chain the batch was created at
    pub block: u64,
}

impl OutgoingTxBatch {
    /// Sum of the fees of every transfer in the batch
    #[must_use]
    pub fn total_fee(&self) -> U256 {
        self.transactions
            .iter()
            .fold(U256::ZERO, |total, tx| {
                total.saturating_add(tx.erc20_fee.amount)
            })
    }
}

/// Token amounts travel as base-10 strings, like the chain's other integer encodings
mod decimal {
    use alloy_primitives::U256;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(D::Error::custom(format!(
                "invalid amount {text:?}: expected a base-10 integer"
            )));
        }
        U256::from_str_radix(&text, 10).map_err(D::Error::custom)
    }
}
