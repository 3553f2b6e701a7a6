//! Error types for block linkage validation.

/// Why a candidate block is not a valid successor of its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    /// The candidate's `last_hash` does not match the predecessor's hash.
    #[error("last_hash does not match the previous block's hash")]
    LastHashMismatch,

    /// The stated hash does not meet the stated difficulty.
    #[error("proof of work not met: {bits} leading zero bits, difficulty requires {difficulty}")]
    InsufficientWork { difficulty: u32, bits: u32 },

    /// Difficulty moved by more than one bit between adjacent blocks.
    #[error("difficulty jumped from {previous} to {candidate}")]
    DifficultyJump { previous: u32, candidate: u32 },

    /// Recomputing the block hash over its fields gives a different value.
    #[error("block hash does not match its contents")]
    HashMismatch,
}

/// Result type for block operations.
pub type BlockResult<T> = Result<T, BlockError>;
