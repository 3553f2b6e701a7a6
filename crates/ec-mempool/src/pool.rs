//! The pending-transaction pool.

use shared_types::{Block, Transaction, TxId};
use std::collections::HashMap;
use tracing::debug;

/// Unconfirmed transactions keyed by id.
///
/// Keys are unique by construction: setting an id again overwrites the
/// previous record. Iteration order carries no meaning; the only ordered
/// view is [`PendingPool::snapshot_as_records`].
#[derive(Debug, Default)]
pub struct PendingPool {
    transactions: HashMap<TxId, Transaction>,
}

impl PendingPool {
    /// An empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Gets a pending transaction by id.
    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.transactions.get(id)
    }

    /// Upserts a transaction by id.
    pub fn set_transaction(&mut self, tx: Transaction) {
        self.transactions.insert(tx.id.clone(), tx);
    }

    /// Any pending spend issued by `address`.
    ///
    /// Used to extend an existing unconfirmed spend instead of issuing a
    /// second one; under correct client behavior at most one matches.
    pub fn existing_transaction_for(&self, address: &str) -> Option<&Transaction> {
        self.transactions
            .values()
            .find(|tx| tx.spend_address() == Some(address))
    }

    /// Drops every pooled transaction whose id is recorded in `chain`.
    ///
    /// Ids on-chain but not pooled are ignored; runs after every accepted
    /// append or replacement.
    pub fn reconcile(&mut self, chain: &[Block]) {
        let before = self.transactions.len();
        for block in chain {
            for tx in &block.data {
                self.transactions.remove(&tx.id);
            }
        }
        let removed = before - self.transactions.len();
        if removed > 0 {
            debug!(removed, remaining = self.transactions.len(), "reconciled pool");
        }
    }

    /// A point-in-time copy of the pending records for block building.
    ///
    /// Sorted by id: the order carries no meaning, but it must be stable
    /// within one call because the block hash commits to it.
    pub fn snapshot_as_records(&self) -> Vec<Transaction> {
        let mut records: Vec<Transaction> = self.transactions.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    /// Removes everything from the pool.
    pub fn clear(&mut self) {
        self.transactions.clear();
    }
}
