//! Pending pool consistency with the chain store.

#![cfg(test)]

use ec_chain::ChainStore;
use ec_mempool::PendingPool;
use ec_wallet::transaction::{new_spend, reward_transaction, update_spend};
use ec_wallet::{Wallet, WalletBalanceOracle};

#[test]
fn test_pool_drained_by_local_mining() {
    let store = ChainStore::new(WalletBalanceOracle);
    let mut pool = PendingPool::new();
    let alice = Wallet::from_seed([2; 32]);

    let tx = new_spend(&alice, &store.snapshot(), "bob", 25).unwrap();
    pool.set_transaction(tx.clone());

    store.append(pool.snapshot_as_records()).unwrap();
    pool.reconcile(&store.snapshot());

    assert!(pool.is_empty());
    assert_eq!(store.snapshot()[1].data, vec![tx]);
}

#[test]
fn test_pool_drained_by_adopting_peer_chain() {
    // Node A mines a transaction that node B also holds as pending.
    let node_a = ChainStore::new(WalletBalanceOracle);
    let node_b = ChainStore::new(WalletBalanceOracle);
    let mut pool_b = PendingPool::new();
    let alice = Wallet::from_seed([2; 32]);

    let shared = new_spend(&alice, &node_b.snapshot(), "bob", 10).unwrap();
    pool_b.set_transaction(shared.clone());

    node_a.append(vec![shared.clone()]).unwrap();
    let miner = Wallet::from_seed([1; 32]);
    node_a.append(vec![reward_transaction(&miner)]).unwrap();

    // B adopts A's longer chain; its pool must drop the confirmed spend.
    node_b.replace(node_a.snapshot().to_vec()).unwrap();
    pool_b.reconcile(&node_b.snapshot());

    assert!(pool_b.get(&shared.id).is_none());
}

#[test]
fn test_unconfirmed_transactions_survive_reconcile() {
    let store = ChainStore::new(WalletBalanceOracle);
    let mut pool = PendingPool::new();
    let alice = Wallet::from_seed([2; 32]);
    let carol = Wallet::from_seed([3; 32]);

    let mined = new_spend(&alice, &store.snapshot(), "bob", 25).unwrap();
    let waiting = new_spend(&carol, &store.snapshot(), "bob", 40).unwrap();
    pool.set_transaction(mined.clone());
    pool.set_transaction(waiting.clone());

    store.append(vec![mined]).unwrap();
    pool.reconcile(&store.snapshot());

    assert_eq!(pool.len(), 1);
    assert!(pool.get(&waiting.id).is_some());
}

#[test]
fn test_one_pending_spend_per_address_workflow() {
    // The client-side rule: before issuing a spend, reuse any pending one.
    let store = ChainStore::new(WalletBalanceOracle);
    let mut pool = PendingPool::new();
    let alice = Wallet::from_seed([2; 32]);

    let tx = new_spend(&alice, &store.snapshot(), "bob", 25).unwrap();
    pool.set_transaction(tx);

    let mut existing = pool
        .existing_transaction_for(alice.address())
        .cloned()
        .unwrap();
    update_spend(&mut existing, &alice, "carol", 15).unwrap();
    pool.set_transaction(existing);

    // Still a single pending record, now paying both recipients, and the
    // whole batch mines cleanly.
    assert_eq!(pool.len(), 1);
    store.append(pool.snapshot_as_records()).unwrap();
    pool.reconcile(&store.snapshot());
    assert!(pool.is_empty());

    let tail = &store.snapshot()[1];
    assert_eq!(tail.data[0].output.get("bob"), Some(&25));
    assert_eq!(tail.data[0].output.get("carol"), Some(&15));
}
