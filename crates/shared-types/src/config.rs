//! Protocol constants.
//!
//! These values are consensus-critical: nodes disagreeing on any of them
//! will reject each other's chains.

use crate::entities::{Amount, Timestamp};

/// Nanoseconds per second.
pub const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// Target interval between mined blocks, in nanoseconds.
///
/// Difficulty adjusts by one bit per block toward this rate.
pub const MINE_RATE_NANOS: u64 = 4 * NANOS_PER_SECOND;

/// Balance every address starts with before any recorded history.
pub const STARTING_BALANCE: Amount = 1000;

/// Amount minted to the miner by a block's reward transaction.
pub const MINING_REWARD: Amount = 50;

/// Well-known issuer address carried by reward transaction inputs.
pub const MINING_REWARD_ADDRESS: &str = "*--official-mining-reward--*";

/// Fixed timestamp of the genesis block.
pub const GENESIS_TIMESTAMP: Timestamp = 1;

/// Fixed difficulty of the genesis block, in leading zero bits.
pub const GENESIS_DIFFICULTY: u32 = 3;

/// Fixed nonce of the genesis block.
pub const GENESIS_NONCE: u64 = 0;

/// Seed bytes hashed to produce the genesis block's `last_hash`.
pub const GENESIS_LAST_HASH_SEED: &[u8] = b"ember-genesis-last-hash";

/// Seed bytes hashed to produce the genesis block's `hash`.
pub const GENESIS_HASH_SEED: &[u8] = b"ember-genesis-hash";
