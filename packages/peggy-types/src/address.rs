//! Ethereum addresses as carried by valsets, batches and confirmations

use std::{fmt, str::FromStr};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::IdentifierError;

/// Length of the hex body of an Ethereum address, without the `0x` prefix
const ADDRESS_HEX_LEN: usize = 40;

/// A 20-byte account or contract address on the Ethereum side of the bridge.
///
/// Serializes as a `0x`-prefixed hex string. Ordering is the byte ordering of
/// the address, which is also the order used in store keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EthAddress(Address);

impl EthAddress {
    /// Parses and validates an address given as 40 hex characters with an
    /// optional `0x` prefix. Checksum casing is not enforced.
    /// # Errors
    /// Returns [`IdentifierError::InvalidEthAddress`] if the text has the wrong
    /// length or contains a non-hex character.
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        let invalid = |reason: String| IdentifierError::InvalidEthAddress {
            input: text.to_string(),
            reason,
        };

        let body = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        if body.len() != ADDRESS_HEX_LEN {
            return Err(invalid(format!(
                "expected {ADDRESS_HEX_LEN} hex characters, got {}",
                body.len()
            )));
        }
        if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("address must only contain hex characters".to_string()));
        }

        Address::from_str(body)
            .map(Self)
            .map_err(|e| invalid(e.to_string()))
    }

    /// The raw 20 address bytes
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Rebuilds an address from the raw bytes of a store key
    /// # Errors
    /// Returns [`IdentifierError::InvalidEthAddress`] if `bytes` is not 20 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, IdentifierError> {
        <[u8; 20]>::try_from(bytes)
            .map(Self::from)
            .map_err(|e| IdentifierError::InvalidEthAddress {
                input: format!("{bytes:02x?}"),
                reason: e.to_string(),
            })
    }
}

impl From<[u8; 20]> for EthAddress {
    fn from(bytes: [u8; 20]) -> Self {
        Self(Address::from(bytes))
    }
}

impl From<Address> for EthAddress {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<EthAddress> for Address {
    fn from(address: EthAddress) -> Self {
        address.0
    }
}

impl FromStr for EthAddress {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EthAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
