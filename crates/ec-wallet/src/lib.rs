//! # Wallet Subsystem
//!
//! Owns everything about transaction records that requires keys or history:
//!
//! - [`Wallet`] — an Ed25519 keypair plus the address derived from it.
//! - [`transaction`] — constructing spends, extending unconfirmed spends,
//!   minting reward records, and the two validation layers every other
//!   subsystem calls: [`transaction::check_shape`] (structural, keyless)
//!   and [`transaction::verify_transaction`] (economic + signature).
//! - [`balance`] — replaying a chain prefix into an address's spendable
//!   balance, exposed to the chain validator as [`WalletBalanceOracle`].

pub mod balance;
pub mod errors;
pub mod transaction;
pub mod wallet;

pub use balance::{calculate_balance, WalletBalanceOracle};
pub use errors::{TransactionError, TransactionResult};
pub use wallet::Wallet;
