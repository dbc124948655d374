//! The legacy query path form, `peggy/<query>/<arg>/...`.
//!
//! Query names are a wire contract with independently built relayers and
//! must not be renamed. Paths are turned into a [`QueryMsg`] here, with the
//! arity of every query checked, so handlers never index into raw segments.

use crate::{msg::QueryMsg, ContractError};

/// Name of this module, the first segment of every query path
pub const MODULE_NAME: &str = "peggy";
/// Optional routing segment placed in front of the module by relayers
const CUSTOM_ROUTE: &str = "custom";

/// `currentValset`
pub const QUERY_CURRENT_VALSET: &str = "currentValset";
/// `valsetRequest/<nonce>`
pub const QUERY_VALSET_REQUEST: &str = "valsetRequest";
/// `valsetConfirm/<nonce>/<address>`
pub const QUERY_VALSET_CONFIRM: &str = "valsetConfirm";
/// `valsetConfirms/<nonce>`
pub const QUERY_VALSET_CONFIRMS_BY_NONCE: &str = "valsetConfirms";
/// `lastValsetRequests`
pub const QUERY_LAST_VALSET_REQUESTS: &str = "lastValsetRequests";
/// `lastPendingValsetRequest/<address>`
pub const QUERY_LAST_PENDING_VALSET_REQUEST: &str = "lastPendingValsetRequest";
/// `batch/<nonce>/<token_contract>`
pub const QUERY_BATCH: &str = "batch";
/// `batchConfirms/<nonce>/<token_contract>`
pub const QUERY_BATCH_CONFIRMS: &str = "batchConfirms";
/// `lastPendingBatchRequest/<address>`
pub const QUERY_LAST_PENDING_BATCH_REQUEST: &str = "lastPendingBatchRequest";
/// `lastBatches`
pub const QUERY_LAST_BATCHES: &str = "lastBatches";
/// `valsetMultisig/<nonce>`
pub const QUERY_VALSET_MULTISIG: &str = "valsetMultisig";
/// `signedBatch/<nonce>/<token_contract>`
pub const QUERY_SIGNED_BATCH: &str = "signedBatch";
/// `params`
pub const QUERY_PARAMS: &str = "params";

impl QueryMsg {
    /// Parses a full query path.
    ///
    /// A leading `custom/` route and surrounding slashes are accepted.
    /// # Errors
    /// Returns an error if the path is routed to another module, names an
    /// unknown query or carries the wrong number of arguments
    pub fn from_path(path: &str) -> Result<Self, ContractError> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        let segments = match segments.as_slice() {
            [CUSTOM_ROUTE, rest @ ..] => rest,
            all => all,
        };

        match segments {
            [MODULE_NAME, rest @ ..] => Self::from_segments(rest),
            [module, ..] => Err(ContractError::UnknownModule {
                module: (*module).to_string(),
            }),
            [] => Err(ContractError::UnknownModule {
                module: String::new(),
            }),
        }
    }

    /// Parses the query name and arguments, without the module segment
    /// # Errors
    /// Returns an error if the query is unknown or the arity is wrong
    pub fn from_segments(segments: &[&str]) -> Result<Self, ContractError> {
        let Some((&name, args)) = segments.split_first() else {
            return Err(ContractError::UnknownQueryEndpoint {
                module: MODULE_NAME,
                endpoint: String::new(),
            });
        };

        let msg = match name {
            QUERY_CURRENT_VALSET => {
                let [] = expect_args::<0>(name, args)?;
                Self::CurrentValset {}
            }
            QUERY_VALSET_REQUEST => {
                let [nonce] = expect_args::<1>(name, args)?;
                Self::ValsetRequest {
                    nonce: nonce.to_string(),
                }
            }
            QUERY_VALSET_CONFIRM => {
                let [nonce, address] = expect_args::<2>(name, args)?;
                Self::ValsetConfirm {
                    nonce: nonce.to_string(),
                    address: address.to_string(),
                }
            }
            QUERY_VALSET_CONFIRMS_BY_NONCE => {
                let [nonce] = expect_args::<1>(name, args)?;
                Self::ValsetConfirms {
                    nonce: nonce.to_string(),
                }
            }
            QUERY_LAST_VALSET_REQUESTS => {
                let [] = expect_args::<0>(name, args)?;
                Self::LastValsetRequests {}
            }
            QUERY_LAST_PENDING_VALSET_REQUEST => {
                let [address] = expect_args::<1>(name, args)?;
                Self::LastPendingValsetRequest {
                    address: address.to_string(),
                }
            }
            QUERY_BATCH => {
                let [nonce, token_contract] = expect_args::<2>(name, args)?;
                Self::Batch {
                    nonce: nonce.to_string(),
                    token_contract: token_contract.to_string(),
                }
            }
            QUERY_BATCH_CONFIRMS => {
                let [nonce, token_contract] = expect_args::<2>(name, args)?;
                Self::BatchConfirms {
                    nonce: nonce.to_string(),
                    token_contract: token_contract.to_string(),
                }
            }
            QUERY_LAST_PENDING_BATCH_REQUEST => {
                let [address] = expect_args::<1>(name, args)?;
                Self::LastPendingBatchRequest {
                    address: address.to_string(),
                }
            }
            QUERY_LAST_BATCHES => {
                let [] = expect_args::<0>(name, args)?;
                Self::LastBatches {}
            }
            QUERY_VALSET_MULTISIG => {
                let [nonce] = expect_args::<1>(name, args)?;
                Self::ValsetMultisig {
                    nonce: nonce.to_string(),
                }
            }
            QUERY_SIGNED_BATCH => {
                let [nonce, token_contract] = expect_args::<2>(name, args)?;
                Self::SignedBatch {
                    nonce: nonce.to_string(),
                    token_contract: token_contract.to_string(),
                }
            }
            QUERY_PARAMS => {
                let [] = expect_args::<0>(name, args)?;
                Self::Params {}
            }
            unknown => {
                return Err(ContractError::UnknownQueryEndpoint {
                    module: MODULE_NAME,
                    endpoint: unknown.to_string(),
                })
            }
        };

        Ok(msg)
    }

    /// The path name of the query
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CurrentValset {} => QUERY_CURRENT_VALSET,
            Self::ValsetRequest { .. } => QUERY_VALSET_REQUEST,
            Self::ValsetConfirm { .. } => QUERY_VALSET_CONFIRM,
            Self::ValsetConfirms { .. } => QUERY_VALSET_CONFIRMS_BY_NONCE,
            Self::LastValsetRequests {} => QUERY_LAST_VALSET_REQUESTS,
            Self::LastPendingValsetRequest { .. } => QUERY_LAST_PENDING_VALSET_REQUEST,
            Self::Batch { .. } => QUERY_BATCH,
            Self::BatchConfirms { .. } => QUERY_BATCH_CONFIRMS,
            Self::LastPendingBatchRequest { .. } => QUERY_LAST_PENDING_BATCH_REQUEST,
            Self::LastBatches {} => QUERY_LAST_BATCHES,
            Self::ValsetMultisig { .. } => QUERY_VALSET_MULTISIG,
            Self::SignedBatch { .. } => QUERY_SIGNED_BATCH,
            Self::Params {} => QUERY_PARAMS,
        }
    }
}

fn expect_args<'a, const N: usize>(
    query: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], ContractError> {
    <[&str; N]>::try_from(args).map_err(|_| ContractError::WrongArity {
        query: query.to_string(),
        expected: N,
        got: args.len(),
    })
}
