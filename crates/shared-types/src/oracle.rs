//! Cross-subsystem traits.
//!
//! Traits whose implementor and consumer live in different crates are
//! defined here so neither side depends on the other.

use crate::entities::{Amount, Block};

/// Computes an address's spendable balance from recorded history.
///
/// The chain validator consults this for every spend claim it checks; the
/// wallet subsystem provides the implementation. `prefix` is always an
/// immutable snapshot: either the candidate slice under validation or the
/// committed chain, never a sequence that may be replaced mid-computation.
pub trait BalanceOracle: Send + Sync {
    /// The balance of `address` after replaying every block in `prefix`.
    fn balance_of(&self, prefix: &[Block], address: &str) -> Amount;
}
