//! Chain replacement scenarios across validator, store, wallet, and pool.

#![cfg(test)]

use super::mine_chain;
use ec_chain::{validate_chain, ChainError, ChainStore, ReplaceError};
use ec_mempool::PendingPool;
use ec_wallet::transaction::{new_spend, reward_transaction};
use ec_wallet::{calculate_balance, Wallet, WalletBalanceOracle};
use shared_types::config::{MINING_REWARD, STARTING_BALANCE};

#[test]
fn test_node_adopts_longer_peer_chain() {
    let local = ChainStore::new(WalletBalanceOracle);
    let miner = Wallet::from_seed([1; 32]);
    local.append(vec![reward_transaction(&miner)]).unwrap();

    let peer = mine_chain(vec![
        vec![reward_transaction(&miner)],
        vec![reward_transaction(&miner)],
        vec![reward_transaction(&miner)],
    ]);

    local.replace(peer.clone()).unwrap();
    assert_eq!(*local.snapshot(), peer);
}

#[test]
fn test_equal_length_fork_never_flips() {
    let local = ChainStore::new(WalletBalanceOracle);
    let miner = Wallet::from_seed([1; 32]);
    local.append(vec![reward_transaction(&miner)]).unwrap();

    // A different but equally long fork.
    let fork = mine_chain(vec![vec![reward_transaction(&miner)]]);

    let before = local.snapshot();
    let result = local.replace(fork);

    assert!(matches!(result, Err(ReplaceError::NotLonger { .. })));
    assert_eq!(*local.snapshot(), *before);
}

#[test]
fn test_longer_chain_with_bad_history_rejected() {
    let local = ChainStore::new(WalletBalanceOracle);
    let alice = Wallet::from_seed([2; 32]);

    // Peer chain where alice's second spend claims her pre-spend balance.
    let first = new_spend(&alice, &local.snapshot(), "bob", 300).unwrap();
    let second = new_spend(&alice, &local.snapshot(), "carol", 300).unwrap();
    let peer = mine_chain(vec![vec![first], vec![second]]);

    let result = local.replace(peer);

    assert!(matches!(
        result,
        Err(ReplaceError::InvalidChain(
            ChainError::InvalidInputAmount { .. }
        ))
    ));
    assert_eq!(local.height(), 1);
}

/// The full lifecycle: mine a reward, spend it, then fend off a forged
/// competitor that reuses a recorded transaction id.
#[test]
fn test_end_to_end_reward_spend_and_forged_competitor() {
    let store = ChainStore::new(WalletBalanceOracle);
    let mut pool = PendingPool::new();
    let miner = Wallet::from_seed([1; 32]);
    let bob = Wallet::from_seed([2; 32]);

    // Block 1: one reward to the miner.
    let reward = reward_transaction(&miner);
    pool.set_transaction(reward.clone());
    store.append(pool.snapshot_as_records()).unwrap();
    pool.reconcile(&store.snapshot());
    assert!(pool.is_empty());
    assert_eq!(
        miner.balance(&store.snapshot()),
        STARTING_BALANCE + MINING_REWARD
    );

    // Block 2: the miner pays bob 50.
    let spend = new_spend(&miner, &store.snapshot(), bob.address(), MINING_REWARD).unwrap();
    pool.set_transaction(spend.clone());
    store.append(pool.snapshot_as_records()).unwrap();
    pool.reconcile(&store.snapshot());

    assert!(pool.is_empty());
    assert_eq!(store.height(), 3);
    assert!(validate_chain(&store.snapshot(), &WalletBalanceOracle).is_ok());
    assert_eq!(
        bob.balance(&store.snapshot()),
        STARTING_BALANCE + MINING_REWARD
    );
    assert_eq!(miner.balance(&store.snapshot()), STARTING_BALANCE);

    // A longer competitor reuses the recorded reward id in its last block.
    let forged = mine_chain(vec![
        vec![reward.clone()],
        vec![],
        vec![reward.clone()],
    ]);
    let before = store.snapshot();
    let result = store.replace(forged);

    assert_eq!(
        result,
        Err(ReplaceError::InvalidChain(ChainError::DuplicateTransaction {
            id: reward.id
        }))
    );
    assert_eq!(*store.snapshot(), *before);
    assert_eq!(
        calculate_balance(&store.snapshot(), bob.address()),
        STARTING_BALANCE + MINING_REWARD
    );
}
