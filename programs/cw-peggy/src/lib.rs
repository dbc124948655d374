#![doc = include_str!("../README.md")]
#![deny(
    clippy::nursery,
    clippy::pedantic,
    warnings,
    missing_docs,
    unused_crate_dependencies
)]

pub mod codec;
pub mod contract;
pub mod error;
pub mod instantiate;
pub mod msg;
pub mod path;
pub mod pending;
pub mod query;
pub mod state;

#[cfg(test)]
pub mod test;

pub use error::{ContractError, ErrorKind};
