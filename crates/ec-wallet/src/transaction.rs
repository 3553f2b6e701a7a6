//! Transaction construction and validation.
//!
//! A spend claims the sender's entire balance and distributes it across the
//! output map: the paid amounts plus the sender's own change entry. The
//! input signature covers the canonical output-map encoding, so any change
//! to the outputs invalidates the record.
//!
//! Two validation layers, called separately by the chain validator:
//!
//! - [`check_shape`]: structural rules enforceable without keys or history.
//! - [`verify_transaction`]: full record validity, output-total equality
//!   and the Ed25519 signature.

use crate::errors::{TransactionError, TransactionResult};
use crate::wallet::Wallet;
use shared_types::config::{MINING_REWARD, MINING_REWARD_ADDRESS};
use shared_types::{Amount, Block, SpendInput, Timestamp, Transaction, TransactionInput};
use std::collections::BTreeMap;
use uuid::Uuid;

fn now_nanos() -> Timestamp {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as Timestamp
}

fn signed_spend_input(wallet: &Wallet, amount: Amount, output: &BTreeMap<String, Amount>) -> TransactionInput {
    TransactionInput::Spend(SpendInput {
        timestamp: now_nanos(),
        amount,
        address: wallet.address().to_string(),
        public_key: wallet.public_key(),
        signature: wallet.sign_output(output),
    })
}

/// Builds a new spend of `amount` from `wallet` to `recipient`.
///
/// The claimed input amount is the wallet's full balance over `chain`; the
/// remainder comes back as the wallet's change output.
pub fn new_spend(
    wallet: &Wallet,
    chain: &[Block],
    recipient: &str,
    amount: Amount,
) -> TransactionResult<Transaction> {
    let balance = wallet.balance(chain);
    if amount > balance {
        return Err(TransactionError::ExceedsBalance { amount, balance });
    }

    let mut output = BTreeMap::new();
    output.insert(recipient.to_string(), amount);
    // entry() keeps a self-send consistent: the change accumulates onto the
    // already-inserted recipient amount.
    *output.entry(wallet.address().to_string()).or_insert(0) += balance - amount;

    Ok(Transaction {
        id: Uuid::new_v4().to_string(),
        input: signed_spend_input(wallet, balance, &output),
        output,
    })
}

/// Extends an unconfirmed spend with a further payment.
///
/// Deducts from the wallet's change entry, accumulates onto `recipient`,
/// and re-signs. The claimed input amount is unchanged: the spend is not
/// on-chain yet, so the balance it claimed is still the historical one.
pub fn update_spend(
    tx: &mut Transaction,
    wallet: &Wallet,
    recipient: &str,
    amount: Amount,
) -> TransactionResult<()> {
    let input = match &tx.input {
        TransactionInput::Spend(input) => input,
        TransactionInput::Reward(_) => return Err(TransactionError::NotASpend),
    };
    if input.address != wallet.address() {
        return Err(TransactionError::NotOwner {
            issuer: input.address.clone(),
        });
    }

    let change = tx.output.get(wallet.address()).copied().unwrap_or(0);
    if amount > change {
        return Err(TransactionError::ExceedsBalance {
            amount,
            balance: change,
        });
    }
    let claimed = input.amount;

    *tx.output.entry(recipient.to_string()).or_insert(0) += amount;
    if recipient != wallet.address() {
        *tx.output
            .entry(wallet.address().to_string())
            .or_insert(0) -= amount;
    }
    tx.input = signed_spend_input(wallet, claimed, &tx.output);

    Ok(())
}

/// Mints the block-creation reward record for `miner`.
pub fn reward_transaction(miner: &Wallet) -> Transaction {
    Transaction {
        id: Uuid::new_v4().to_string(),
        input: TransactionInput::reward(),
        output: BTreeMap::from([(miner.address().to_string(), MINING_REWARD)]),
    }
}

/// Structural rules a decoder can enforce without keys or history.
///
/// Rejects empty output maps, overflowing totals, and reward records that
/// do not pay exactly [`MINING_REWARD`] to a single recipient under the
/// issuer marker.
pub fn check_shape(tx: &Transaction) -> TransactionResult<()> {
    if tx.output.is_empty() {
        return Err(TransactionError::EmptyOutput);
    }
    let total = tx.output_total().ok_or(TransactionError::OutputOverflow)?;

    if let TransactionInput::Reward(input) = &tx.input {
        if input.address != MINING_REWARD_ADDRESS {
            return Err(TransactionError::InvalidRewardIssuer {
                address: input.address.clone(),
            });
        }
        if tx.output.len() != 1 || total != MINING_REWARD {
            return Err(TransactionError::InvalidRewardShape {
                expected: MINING_REWARD,
            });
        }
    }

    Ok(())
}

/// Full record validity: shape, output-total equality against the claimed
/// input amount, and the Ed25519 signature over the output map.
pub fn verify_transaction(tx: &Transaction) -> TransactionResult<()> {
    check_shape(tx)?;

    if let TransactionInput::Spend(input) = &tx.input {
        let total = tx.output_total().ok_or(TransactionError::OutputOverflow)?;
        if total != input.amount {
            return Err(TransactionError::OutputSumMismatch {
                claimed: input.amount,
                total,
            });
        }
        input
            .public_key
            .verify(
                &Transaction::output_signing_bytes(&tx.output),
                &input.signature,
            )
            .map_err(TransactionError::InvalidSignature)?;
    }

    Ok(())
}
