//! Query responses that correlate confirmations with the keys that produced
//! them.
//!
//! Valsets and batches can pass without every member signing, so a relayer
//! submitting to Ethereum has to know whose signature sits in each slot.

use serde::{Deserialize, Serialize};

use crate::{BatchConfirm, EthAddress, OutgoingTxBatch, Valset, ValsetConfirm};

/// A valset together with the signatures collected for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValsetMultisig {
    /// The valset
    pub valset: Valset,
    /// One slot per member, in member order, `None` where the member has not signed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<Option<String>>,
}

impl ValsetMultisig {
    /// Places every confirmation in the slot of the member whose Ethereum key
    /// produced it. Confirmations from keys outside the set are ignored; if a
    /// key confirmed twice the last confirmation wins.
    #[must_use]
    pub fn assemble(valset: Valset, confirms: impl IntoIterator<Item = ValsetConfirm>) -> Self {
        let mut signatures = vec![None; valset.members.len()];
        for confirm in confirms {
            if let Some(index) = valset.member_index(&confirm.eth_address) {
                signatures[index] = Some(confirm.signature);
            }
        }

        Self { valset, signatures }
    }

    /// Voting power of the members that have signed
    #[must_use]
    pub fn signed_power(&self) -> u64 {
        self.valset
            .members
            .iter()
            .zip(&self.signatures)
            .filter(|(_, signature)| signature.is_some())
            .fold(0u64, |total, (member, _)| total.saturating_add(member.power))
    }
}

/// An Ethereum signature along with the key that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureWithAddress {
    /// Hex encoded signature
    pub eth_signature: String,
    /// The signing key
    pub eth_address: EthAddress,
}

/// A batch together with the signatures collected for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedOutgoingTxBatch {
    /// The batch
    pub batch: OutgoingTxBatch,
    /// Signatures in confirmation store order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<SignatureWithAddress>,
}

impl SignedOutgoingTxBatch {
    /// Pairs each confirmation's signature with its signing key
    #[must_use]
    pub fn assemble(batch: OutgoingTxBatch, confirms: impl IntoIterator<Item = BatchConfirm>) -> Self {
        let signatures = confirms
            .into_iter()
            .map(|confirm| SignatureWithAddress {
                eth_signature: confirm.signature,
                eth_address: confirm.eth_signer,
            })
            .collect();

        Self { batch, signatures }
    }
}
