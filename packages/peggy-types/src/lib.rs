#![doc = include_str!("../README.md")]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod address;
pub mod batch;
pub mod confirm;
pub mod error;
pub mod nonce;
pub mod response;
pub mod valset;

pub use address::EthAddress;
pub use batch::{Erc20Token, OutgoingTransferTx, OutgoingTxBatch};
pub use confirm::{BatchConfirm, ValsetConfirm};
pub use error::IdentifierError;
pub use nonce::{parse_nonce, Nonce};
pub use response::{SignatureWithAddress, SignedOutgoingTxBatch, ValsetMultisig};
pub use valset::{BridgeValidator, Valset};
