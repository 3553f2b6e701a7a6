//! The authoritative chain store.
//!
//! One store per node. The chain is held behind an `Arc` that is swapped
//! wholesale, so readers clone the pointer and observe either the old or
//! the new chain in full, never a mix. A separate writer gate serializes
//! `append` and `replace` without making readers wait out a mining run.

use crate::errors::{ChainError, ReplaceError};
use crate::validator::{validate_block_payload, validate_chain};
use ec_block::{genesis, mine_block};
use parking_lot::{Mutex, RwLock};
use shared_types::{BalanceOracle, Block, Transaction};
use std::sync::Arc;
use tracing::{info, warn};

/// Owns the node's accepted sequence of blocks.
pub struct ChainStore<O: BalanceOracle> {
    /// Swapped as a whole under `writer`; never mutated in place.
    chain: RwLock<Arc<Vec<Block>>>,
    /// Serializes the two writing operations.
    writer: Mutex<()>,
    oracle: O,
}

impl<O: BalanceOracle> ChainStore<O> {
    /// A store holding only the genesis block.
    pub fn new(oracle: O) -> Self {
        Self {
            chain: RwLock::new(Arc::new(vec![genesis()])),
            writer: Mutex::new(()),
            oracle,
        }
    }

    /// An immutable snapshot of the current chain.
    pub fn snapshot(&self) -> Arc<Vec<Block>> {
        Arc::clone(&self.chain.read())
    }

    /// Number of blocks currently accepted.
    pub fn height(&self) -> usize {
        self.chain.read().len()
    }

    /// Mines a block holding `data` on the current tail and appends it.
    ///
    /// The payload must satisfy the same duplicate/reward/balance rules the
    /// validator applies to incoming chains; a payload that would make the
    /// chain invalid is refused before any mining work is spent.
    pub fn append(&self, data: Vec<Transaction>) -> Result<Block, ChainError> {
        let _writing = self.writer.lock();
        let current = self.snapshot();

        validate_block_payload(&current, &data, &self.oracle)?;

        let tail = current.last().expect("store chain always has genesis");
        let block = mine_block(tail, data);

        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend_from_slice(&current);
        next.push(block.clone());
        *self.chain.write() = Arc::new(next);

        info!(
            height = current.len(),
            transactions = block.data.len(),
            "appended mined block"
        );
        Ok(block)
    }

    /// Replaces the stored chain with a strictly longer, valid candidate.
    ///
    /// Validation runs against the caller's immutable candidate before the
    /// writer gate is taken, so a slow validation never blocks readers or
    /// an ongoing append. The length rule is re-checked against whatever is
    /// current once the gate is held: a chain that grew in the meantime is
    /// not clobbered by a now-stale candidate.
    pub fn replace(&self, candidate: Vec<Block>) -> Result<(), ReplaceError> {
        let current = self.height();
        if candidate.len() <= current {
            warn!(
                current,
                candidate = candidate.len(),
                "rejected replacement: not longer"
            );
            return Err(ReplaceError::NotLonger {
                current,
                candidate: candidate.len(),
            });
        }

        if let Err(source) = validate_chain(&candidate, &self.oracle) {
            warn!(error = %source, "rejected replacement: invalid chain");
            return Err(ReplaceError::InvalidChain(source));
        }

        let _writing = self.writer.lock();
        let mut chain = self.chain.write();
        if candidate.len() <= chain.len() {
            return Err(ReplaceError::NotLonger {
                current: chain.len(),
                candidate: candidate.len(),
            });
        }

        info!(
            from = chain.len(),
            to = candidate.len(),
            "replaced chain with longer valid candidate"
        );
        *chain = Arc::new(candidate);
        Ok(())
    }
}
