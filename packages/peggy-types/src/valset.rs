//! Validator-set snapshots

use serde::{Deserialize, Serialize};

use crate::{EthAddress, Nonce};

/// A validator as seen by the Ethereum bridge contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeValidator {
    /// Voting power of the validator
    pub power: u64,
    /// The Ethereum key the validator signs bridge updates with
    pub ethereum_address: EthAddress,
}

/// Snapshot of the active validator set at a given nonce.
///
/// Immutable once stored; only confirmations accumulate against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valset {
    /// The valset nonce
    pub nonce: Nonce,
    /// Members sorted by power (descending), ties broken by address (ascending)
    pub members: Vec<BridgeValidator>,
    /// Height of the local chain the snapshot was taken at
    pub height: u64,
}

impl Valset {
    /// Creates a snapshot, putting members in canonical order so that two
    /// snapshots of the same set always compare (and serialize) equal.
    #[must_use]
    pub fn new(nonce: Nonce, height: u64, mut members: Vec<BridgeValidator>) -> Self {
        members.sort_by(|a, b| {
            b.power
                .cmp(&a.power)
                .then_with(|| a.ethereum_address.cmp(&b.ethereum_address))
        });

        Self {
            nonce,
            members,
            height,
        }
    }

    /// Total voting power of the set
    #[must_use]
    pub fn total_power(&self) -> u64 {
        self.members
            .iter()
            .fold(0u64, |total, member| total.saturating_add(member.power))
    }

    /// Position of the member signing with `ethereum_address`, if any
    #[must_use]
    pub fn member_index(&self, ethereum_address: &EthAddress) -> Option<usize> {
        self.members
            .iter()
            .position(|member| &member.ethereum_address == ethereum_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator(power: u64, byte: u8) -> BridgeValidator {
        BridgeValidator {
            power,
            ethereum_address: EthAddress::from([byte; 20]),
        }
    }

    #[test]
    fn members_are_sorted_by_power_then_address() {
        let valset = Valset::new(
            1,
            10,
            vec![validator(5, 3), validator(10, 2), validator(5, 1)],
        );

        assert_eq!(
            valset.members,
            vec![validator(10, 2), validator(5, 1), validator(5, 3)]
        );
    }

    #[test]
    fn member_order_does_not_depend_on_input_order() {
        let a = Valset::new(1, 10, vec![validator(1, 1), validator(2, 2)]);
        let b = Valset::new(1, 10, vec![validator(2, 2), validator(1, 1)]);
        assert_eq!(a, b);
    }

    #[test]
    fn total_power_saturates() {
        let valset = Valset::new(1, 1, vec![validator(u64::MAX, 1), validator(1, 2)]);
        assert_eq!(valset.total_power(), u64::MAX);
    }

    #[test]
    fn member_index_finds_signer() {
        let valset = Valset::new(1, 1, vec![validator(1, 1), validator(2, 2)]);
        assert_eq!(valset.member_index(&EthAddress::from([2; 20])), Some(0));
        assert_eq!(valset.member_index(&EthAddress::from([1; 20])), Some(1));
        assert_eq!(valset.member_index(&EthAddress::from([9; 20])), None);
    }
}
