//! Block production and linkage validation.
//!
//! A block's hash must carry `difficulty` leading zero bits. Difficulty
//! moves one bit per block: up when the previous block was mined faster
//! than [`MINE_RATE_NANOS`], down (floor 1) when slower.

use crate::errors::{BlockError, BlockResult};
use shared_crypto::{leading_zero_bits, sha256};
use shared_types::config::{
    GENESIS_DIFFICULTY, GENESIS_HASH_SEED, GENESIS_LAST_HASH_SEED, GENESIS_NONCE,
    GENESIS_TIMESTAMP, MINE_RATE_NANOS,
};
use shared_types::{Block, Timestamp, Transaction};
use tracing::debug;

/// The canonical genesis block.
///
/// Every field is fixed by protocol constants; index 0 of every valid chain
/// equals this value bit for bit.
pub fn genesis() -> Block {
    Block {
        timestamp: GENESIS_TIMESTAMP,
        last_hash: sha256(&[GENESIS_LAST_HASH_SEED]),
        hash: sha256(&[GENESIS_HASH_SEED]),
        data: Vec::new(),
        difficulty: GENESIS_DIFFICULTY,
        nonce: GENESIS_NONCE,
    }
}

/// Current time in nanoseconds since the Unix epoch.
pub fn now_nanos() -> Timestamp {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as Timestamp
}

/// Difficulty for a block stamped at `now` on top of `last_block`.
pub fn adjusted_difficulty(last_block: &Block, now: Timestamp) -> u32 {
    if now.saturating_sub(last_block.timestamp) < MINE_RATE_NANOS {
        last_block.difficulty + 1
    } else {
        last_block.difficulty.saturating_sub(1).max(1)
    }
}

/// Mines a block holding `data` on top of `last_block`.
///
/// The timestamp and difficulty are re-derived on every attempt, so a long
/// search converges on a lower difficulty instead of stalling.
pub fn mine_block(last_block: &Block, data: Vec<Transaction>) -> Block {
    let mut nonce = 0u64;
    loop {
        let timestamp = now_nanos();
        let difficulty = adjusted_difficulty(last_block, timestamp);
        let hash = Block::payload_hash(timestamp, &last_block.hash, &data, difficulty, nonce);

        if leading_zero_bits(&hash) >= difficulty {
            debug!(difficulty, nonce, transactions = data.len(), "mined block");
            return Block {
                timestamp,
                last_hash: last_block.hash,
                hash,
                data,
                difficulty,
                nonce,
            };
        }
        nonce = nonce.wrapping_add(1);
    }
}

/// Checks that `candidate` is a valid successor of `prev`.
///
/// In order: linkage, stated proof of work, difficulty step, and finally
/// the recomputed hash (the expensive check runs last, matching the cheap
/// to expensive ordering of the other checks).
pub fn validate_successor(prev: &Block, candidate: &Block) -> BlockResult<()> {
    if candidate.last_hash != prev.hash {
        return Err(BlockError::LastHashMismatch);
    }

    let bits = leading_zero_bits(&candidate.hash);
    if bits < candidate.difficulty {
        return Err(BlockError::InsufficientWork {
            difficulty: candidate.difficulty,
            bits,
        });
    }

    if prev.difficulty.abs_diff(candidate.difficulty) > 1 {
        return Err(BlockError::DifficultyJump {
            previous: prev.difficulty,
            candidate: candidate.difficulty,
        });
    }

    let expected = Block::payload_hash(
        candidate.timestamp,
        &candidate.last_hash,
        &candidate.data,
        candidate.difficulty,
        candidate.nonce,
    );
    if expected != candidate.hash {
        return Err(BlockError::HashMismatch);
    }

    Ok(())
}
