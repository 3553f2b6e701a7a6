//! # Chain Subsystem
//!
//! The node's view of recorded history and the rules for changing it.
//!
//! ## Components
//!
//! - [`validator`] — pure functions deciding whether a candidate chain is
//!   acceptable: canonical genesis, per-block linkage and proof of work,
//!   and an economically valid transaction history (globally unique ids,
//!   one reward per block, every spend claim equal to the spender's
//!   balance over strictly earlier blocks).
//! - [`store`] — [`store::ChainStore`], the single authoritative chain,
//!   offering `append` (mine locally on the tail) and `replace` (adopt a
//!   strictly longer valid peer chain). Writers are mutually exclusive;
//!   readers always observe a complete chain, before or after a swap,
//!   never between.
//!
//! A rejected candidate leaves the store untouched; every rejection names
//! the offending block height or transaction id.

pub mod errors;
pub mod store;
pub mod validator;

pub use errors::{ChainError, ChainResult, ReplaceError};
pub use store::ChainStore;
pub use validator::{validate_block_payload, validate_chain, validate_transaction_history};
