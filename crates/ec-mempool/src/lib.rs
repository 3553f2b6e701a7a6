//! # Pending Pool Subsystem
//!
//! Holds transactions the node has originated or received but that are not
//! yet recorded on-chain. The pool is kept consistent with whatever chain
//! the store currently accepts: after every successful append or
//! replacement, [`PendingPool::reconcile`] drops every transaction the new
//! chain has confirmed, whether confirmation came from local mining or
//! from adopting a peer's longer chain.

pub mod pool;

pub use pool::PendingPool;
