//! Defines the [`IdentifierError`] type.

use thiserror::Error;

/// Errors returned when decoding identifiers from their text encoding
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum IdentifierError {
    /// The nonce is not a well-formed unsigned 64-bit decimal integer
    #[error("invalid nonce {input:?}: {reason}")]
    InvalidNonce {
        /// The rejected input
        input: String,
        /// Reason for error
        reason: String,
    },

    /// The Ethereum address does not pass basic validation
    #[error("invalid ethereum address {input:?}: {reason}")]
    InvalidEthAddress {
        /// The rejected input
        input: String,
        /// Reason for error
        reason: String,
    },
}
