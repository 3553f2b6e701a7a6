//! Error types for chain validation and replacement.

use ec_block::BlockError;
use ec_wallet::TransactionError;
use shared_types::{Amount, TxId};

/// Why a candidate chain (or block payload) is invalid.
///
/// Every variant names the offending block height or transaction id, so
/// callers can log or disconnect a misbehaving peer without re-scanning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The candidate has no blocks at all.
    #[error("candidate chain is empty")]
    EmptyChain,

    /// Block 0 is not the canonical genesis block.
    #[error("genesis block does not match the canonical genesis")]
    InvalidGenesis,

    /// A block fails linkage or proof-of-work checks against its
    /// predecessor.
    #[error("invalid block at height {height}: {source}")]
    InvalidLinkage {
        height: usize,
        #[source]
        source: BlockError,
    },

    /// A transaction fails structural checks before any economic rule is
    /// applied.
    #[error("malformed transaction {id}: {source}")]
    MalformedTransaction {
        id: TxId,
        #[source]
        source: TransactionError,
    },

    /// The same transaction id appears more than once across the chain.
    #[error("transaction {id} appears more than once")]
    DuplicateTransaction { id: TxId },

    /// A block carries more than one mining reward.
    #[error("multiple mining rewards in block at height {height}")]
    MultipleRewards { height: usize },

    /// A spend claims an input amount that history does not support.
    #[error("transaction {id} claims input amount {claimed}, history shows {actual}")]
    InvalidInputAmount {
        id: TxId,
        claimed: Amount,
        actual: Amount,
    },

    /// A transaction fails its own record validity check.
    #[error("invalid transaction {id}: {source}")]
    InvalidTransaction {
        id: TxId,
        #[source]
        source: TransactionError,
    },
}

/// Why a chain replacement was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplaceError {
    /// The candidate does not strictly exceed the current length. Ties are
    /// rejected to prevent flip-flopping between equal-length forks.
    #[error("candidate length {candidate} does not exceed current length {current}")]
    NotLonger { current: usize, candidate: usize },

    /// The candidate failed validation.
    #[error("candidate chain is invalid: {0}")]
    InvalidChain(#[from] ChainError),
}

/// Result type for chain operations.
pub type ChainResult<T> = Result<T, ChainError>;
