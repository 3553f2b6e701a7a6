//! Error types for transaction construction and validation.

use shared_crypto::CryptoError;
use shared_types::Amount;

/// Why a transaction record could not be built or does not hold up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    /// A spend asked for more than the sender's balance.
    #[error("spend of {amount} exceeds balance {balance}")]
    ExceedsBalance { amount: Amount, balance: Amount },

    /// The output map is empty.
    #[error("transaction has no outputs")]
    EmptyOutput,

    /// The output amounts do not fit in the amount type.
    #[error("output amounts overflow")]
    OutputOverflow,

    /// A reward input carries something other than the issuer marker.
    #[error("reward input carries address {address:?} instead of the issuer marker")]
    InvalidRewardIssuer { address: String },

    /// A reward record must pay the fixed reward to a single recipient.
    #[error("reward must pay exactly {expected} to a single recipient")]
    InvalidRewardShape { expected: Amount },

    /// Output total disagrees with the claimed input amount.
    #[error("outputs total {total} but the input claims {claimed}")]
    OutputSumMismatch { claimed: Amount, total: Amount },

    /// The spend signature does not verify against the carried key.
    #[error("spend signature is invalid: {0}")]
    InvalidSignature(#[source] CryptoError),

    /// Attempted to extend a reward record.
    #[error("cannot update a reward transaction")]
    NotASpend,

    /// Attempted to extend a spend issued by a different wallet.
    #[error("transaction was issued by {issuer}, not this wallet")]
    NotOwner { issuer: String },
}

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;
