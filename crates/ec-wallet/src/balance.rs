//! Balance computation over recorded history.

use shared_types::config::STARTING_BALANCE;
use shared_types::{Amount, BalanceOracle, Block};

/// Replays `chain` and returns the spendable balance of `address`.
///
/// Every address starts at [`STARTING_BALANCE`]. A spend *by* the address
/// resets the running balance to that record's change output, because a
/// spend claims the sender's entire balance and returns the remainder
/// through the output map. A payment *to* the address adds.
pub fn calculate_balance(chain: &[Block], address: &str) -> Amount {
    let mut balance = STARTING_BALANCE;
    for block in chain {
        for tx in &block.data {
            if tx.spend_address() == Some(address) {
                balance = tx.output.get(address).copied().unwrap_or(0);
            } else if let Some(received) = tx.output.get(address) {
                balance = balance.saturating_add(*received);
            }
        }
    }
    balance
}

/// [`BalanceOracle`] backed by [`calculate_balance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WalletBalanceOracle;

impl BalanceOracle for WalletBalanceOracle {
    fn balance_of(&self, prefix: &[Block], address: &str) -> Amount {
        calculate_balance(prefix, address)
    }
}
