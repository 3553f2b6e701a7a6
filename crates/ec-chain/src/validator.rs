//! Candidate-chain validation.
//!
//! Pure functions over immutable block slices: no side effects, no
//! interior state, safe to run concurrently for different candidates.
//! Checks run in document order (block order, then transaction order
//! within a block) and fail fast, so the first reported violation is
//! deterministic for a given candidate.

use crate::errors::{ChainError, ChainResult};
use ec_block::{genesis, validate_successor};
use ec_wallet::transaction::{check_shape, verify_transaction};
use shared_types::{BalanceOracle, Block, Transaction, TransactionInput};
use std::collections::HashSet;

/// Validates a whole candidate chain: canonical genesis, linkage and proof
/// of work per block, then the transaction history.
pub fn validate_chain(chain: &[Block], oracle: &dyn BalanceOracle) -> ChainResult<()> {
    let Some(first) = chain.first() else {
        return Err(ChainError::EmptyChain);
    };
    if *first != genesis() {
        return Err(ChainError::InvalidGenesis);
    }

    for height in 1..chain.len() {
        validate_successor(&chain[height - 1], &chain[height])
            .map_err(|source| ChainError::InvalidLinkage { height, source })?;
    }

    validate_transaction_history(chain, oracle)
}

/// Validates the transaction history of a chain in one left-to-right scan.
///
/// Ids are collected across the whole scan: a transaction recorded in
/// block 2 and again in block 5 is a duplicate. The reward flag resets per
/// block. Each spend claim is checked against the balance over the blocks
/// strictly before it, so a transaction can never fund itself from its own
/// block.
pub fn validate_transaction_history(
    chain: &[Block],
    oracle: &dyn BalanceOracle,
) -> ChainResult<()> {
    let mut seen = HashSet::new();
    for (height, block) in chain.iter().enumerate() {
        validate_block_transactions(&chain[..height], height, &block.data, &mut seen, oracle)?;
    }
    Ok(())
}

/// Validates a payload for a block about to be mined on top of `chain`.
///
/// Applies the same rules as [`validate_transaction_history`] with the
/// whole accepted chain as the prefix: ids must be new to both the chain
/// and the payload, at most one reward, and every spend claim must match
/// the spender's current recorded balance.
pub fn validate_block_payload(
    chain: &[Block],
    data: &[Transaction],
    oracle: &dyn BalanceOracle,
) -> ChainResult<()> {
    let mut seen: HashSet<&str> = chain
        .iter()
        .flat_map(|block| block.data.iter())
        .map(|tx| tx.id.as_str())
        .collect();
    validate_block_transactions(chain, chain.len(), data, &mut seen, oracle)
}

fn validate_block_transactions<'c>(
    prefix: &'c [Block],
    height: usize,
    data: &'c [Transaction],
    seen: &mut HashSet<&'c str>,
    oracle: &dyn BalanceOracle,
) -> ChainResult<()> {
    let mut reward_seen = false;
    for tx in data {
        check_shape(tx).map_err(|source| ChainError::MalformedTransaction {
            id: tx.id.clone(),
            source,
        })?;

        if !seen.insert(tx.id.as_str()) {
            return Err(ChainError::DuplicateTransaction { id: tx.id.clone() });
        }

        match &tx.input {
            TransactionInput::Reward(_) => {
                if reward_seen {
                    return Err(ChainError::MultipleRewards { height });
                }
                reward_seen = true;
            }
            TransactionInput::Spend(input) => {
                let actual = oracle.balance_of(prefix, &input.address);
                if actual != input.amount {
                    return Err(ChainError::InvalidInputAmount {
                        id: tx.id.clone(),
                        claimed: input.amount,
                        actual,
                    });
                }
            }
        }

        verify_transaction(tx).map_err(|source| ChainError::InvalidTransaction {
            id: tx.id.clone(),
            source,
        })?;
    }
    Ok(())
}
