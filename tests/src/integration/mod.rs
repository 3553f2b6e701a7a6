//! Cross-subsystem integration scenarios.

pub mod fork_choice;
pub mod pool_flow;
pub mod wire;

use ec_block::{genesis, mine_block};
use shared_types::{Block, Transaction};

/// Mines a chain from genesis with one block per payload.
pub fn mine_chain(payloads: Vec<Vec<Transaction>>) -> Vec<Block> {
    let mut chain = vec![genesis()];
    for data in payloads {
        chain.push(mine_block(chain.last().unwrap(), data));
    }
    chain
}
