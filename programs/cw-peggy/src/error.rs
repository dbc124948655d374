//! Defines the [`ContractError`] type.

use cosmwasm_std::StdError;
use peggy_types::{EthAddress, IdentifierError, Nonce};
use thiserror::Error;

/// Machine-readable class of a [`ContractError`], relayed to the caller
/// along with the message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed query arguments. The store was not read.
    InvalidArgument,
    /// Unknown query endpoint, or a lookup whose absence is an error
    UnknownRequest,
    /// A response could not be encoded
    SerializationFailure,
    /// Stored state could not be read or decoded
    Internal,
}

/// Error types that can be returned by contract operations
#[derive(Error, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ContractError {
    /// Standard `CosmWasm` error
    #[error("{0}")]
    Std(#[from] StdError),

    /// Malformed nonce or Ethereum address
    #[error("invalid request: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    /// Malformed or badly checksummed local account address
    #[error("invalid request: invalid address {address:?}: {reason}")]
    InvalidLocalAddress {
        /// The rejected address
        address: String,
        /// Reason for error
        reason: String,
    },

    /// A query path carries the wrong number of arguments
    #[error("invalid request: {query} expects {expected} argument(s), got {got}")]
    WrongArity {
        /// The query name
        query: String,
        /// Number of arguments the query takes
        expected: usize,
        /// Number of arguments received
        got: usize,
    },

    /// The validator set given at instantiation is unusable
    #[error("invalid request: invalid valset: {reason}")]
    InvalidValset {
        /// Reason for error
        reason: String,
    },

    /// The bridge parameters given at instantiation are unusable
    #[error("invalid request: invalid params: {reason}")]
    InvalidParams {
        /// Reason for error
        reason: String,
    },

    /// The query path is routed to another module
    #[error("unknown request: unknown query route {module:?}")]
    UnknownModule {
        /// The module segment of the path
        module: String,
    },

    /// The query name is not served by this module
    #[error("unknown request: unknown {module} query endpoint {endpoint:?}")]
    UnknownQueryEndpoint {
        /// This module's name
        module: &'static str,
        /// The offending query name
        endpoint: String,
    },

    /// No batch is stored for the requested nonce and token contract
    #[error("unknown request: cannot find tx batch {nonce} for token {token_contract}")]
    BatchNotFound {
        /// The requested nonce
        nonce: Nonce,
        /// The requested token contract
        token_contract: EthAddress,
    },

    /// Serializing a query response failed
    #[error("json marshal: {0}")]
    SerializeResponseFailed(#[source] serde_json::Error),
}

impl ContractError {
    /// The class of this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIdentifier(_)
            | Self::InvalidLocalAddress { .. }
            | Self::WrongArity { .. }
            | Self::InvalidValset { .. }
            | Self::InvalidParams { .. } => ErrorKind::InvalidArgument,
            Self::UnknownModule { .. }
            | Self::UnknownQueryEndpoint { .. }
            | Self::BatchNotFound { .. } => ErrorKind::UnknownRequest,
            Self::SerializeResponseFailed(_) => ErrorKind::SerializationFailure,
            Self::Std(_) => ErrorKind::Internal,
        }
    }
}
