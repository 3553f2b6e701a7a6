//! Wire round-trips: decode(encode(x)) == x at every length that matters.

#![cfg(test)]

use super::mine_chain;
use ec_block::{genesis, mine_block};
use ec_chain::validate_chain;
use ec_wallet::transaction::{new_spend, reward_transaction};
use ec_wallet::{Wallet, WalletBalanceOracle};
use shared_types::codec::{decode_chain, decode_transaction, encode_chain, encode_transaction};

#[test]
fn test_genesis_only_chain_roundtrip() {
    let chain = vec![genesis()];
    let decoded = decode_chain(&encode_chain(&chain).unwrap()).unwrap();
    assert_eq!(chain, decoded);
}

#[test]
fn test_two_block_chain_roundtrip() {
    let miner = Wallet::from_seed([1; 32]);
    let chain = mine_chain(vec![vec![reward_transaction(&miner)]]);

    let decoded = decode_chain(&encode_chain(&chain).unwrap()).unwrap();
    assert_eq!(chain, decoded);
}

#[test]
fn test_long_mixed_chain_roundtrip() {
    let miner = Wallet::from_seed([1; 32]);
    let mut chain = vec![genesis()];
    for i in 0..11 {
        let mut data = vec![reward_transaction(&miner)];
        if i % 2 == 1 {
            data.push(new_spend(&miner, &chain, "bob", 10).unwrap());
        }
        chain.push(mine_block(chain.last().unwrap(), data));
    }
    assert!(chain.len() > 10);
    assert!(validate_chain(&chain, &WalletBalanceOracle).is_ok());

    let decoded = decode_chain(&encode_chain(&chain).unwrap()).unwrap();
    assert_eq!(chain, decoded);

    // The decoded copy validates exactly like the original.
    assert!(validate_chain(&decoded, &WalletBalanceOracle).is_ok());
}

#[test]
fn test_spend_transaction_roundtrip() {
    let alice = Wallet::from_seed([2; 32]);
    let tx = new_spend(&alice, &[genesis()], "bob", 30).unwrap();

    let decoded = decode_transaction(&encode_transaction(&tx).unwrap()).unwrap();
    assert_eq!(tx, decoded);

    // Signature material survives the wire intact.
    assert!(ec_wallet::transaction::verify_transaction(&decoded).is_ok());
}

#[test]
fn test_reward_transaction_roundtrip() {
    let miner = Wallet::from_seed([1; 32]);
    let tx = reward_transaction(&miner);

    let decoded = decode_transaction(&encode_transaction(&tx).unwrap()).unwrap();
    assert_eq!(tx, decoded);
    assert!(decoded.is_reward());
}
