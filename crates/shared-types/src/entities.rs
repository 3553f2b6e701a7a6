//! # Core Domain Entities
//!
//! The hash-linked ledger entry (`Block`), the transaction record
//! (`Transaction`), and its two-shaped input (`TransactionInput`).
//!
//! Entities here are plain data with encoding helpers. Behavior lives in
//! the subsystem crates: mining and linkage checks in `ec-block`, record
//! validation and balances in `ec-wallet`, chain validation in `ec-chain`.

use serde::{Deserialize, Serialize};
use shared_crypto::{sha256, Ed25519PublicKey, Ed25519Signature};
use std::collections::BTreeMap;

/// A 32-byte SHA-256 digest.
pub type Hash = shared_crypto::Hash32;

/// A wallet address: a short UUID-derived string, or the well-known
/// reward-issuer marker.
pub type Address = String;

/// An amount in base ledger units.
pub type Amount = u64;

/// A unique transaction identifier.
pub type TxId = String;

/// Nanoseconds since the Unix epoch.
pub type Timestamp = u64;

/// The input of a transaction: either the block-creation reward marker or a
/// signed spend claim.
///
/// Untagged on the wire; the spend shape is tried first, so an object
/// carrying only the issuer address decodes as a reward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionInput {
    /// A spend of previously recorded balance.
    Spend(SpendInput),
    /// The mining incentive; no prior spender, no signature.
    Reward(RewardInput),
}

impl TransactionInput {
    /// The canonical reward input.
    pub fn reward() -> Self {
        Self::Reward(RewardInput::new())
    }

    /// True for the reward marker.
    pub fn is_reward(&self) -> bool {
        matches!(self, Self::Reward(_))
    }

    /// The spend claim, if this is one.
    pub fn as_spend(&self) -> Option<&SpendInput> {
        match self {
            Self::Spend(input) => Some(input),
            Self::Reward(_) => None,
        }
    }
}

/// A signed claim to spend `amount` from `address`.
///
/// `amount` is the spender's entire balance at signing time; the spender's
/// change comes back through its own entry in the output map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpendInput {
    /// When the claim was signed.
    pub timestamp: Timestamp,
    /// The spender's full balance over the chain prefix before this record.
    pub amount: Amount,
    /// The spender's address.
    pub address: Address,
    /// Key the signature verifies against.
    pub public_key: Ed25519PublicKey,
    /// Ed25519 signature over the canonical output-map encoding.
    pub signature: Ed25519Signature,
}

/// The reward marker input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewardInput {
    /// Always [`crate::config::MINING_REWARD_ADDRESS`]; checked during
    /// record validation, not by the decoder.
    pub address: Address,
}

impl RewardInput {
    /// A reward input carrying the well-known issuer address.
    pub fn new() -> Self {
        Self {
            address: crate::config::MINING_REWARD_ADDRESS.to_string(),
        }
    }
}

impl Default for RewardInput {
    fn default() -> Self {
        Self::new()
    }
}

/// An immutable transaction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Globally unique id; at most one occurrence across the whole chain.
    pub id: TxId,
    /// Reward marker or spend claim.
    pub input: TransactionInput,
    /// Recipient address to amount. Ordered so signing and hashing are
    /// byte-stable across nodes.
    pub output: BTreeMap<Address, Amount>,
}

impl Transaction {
    /// Sum of all output amounts; `None` on overflow.
    pub fn output_total(&self) -> Option<Amount> {
        self.output
            .values()
            .try_fold(0u64, |total, amount| total.checked_add(*amount))
    }

    /// True when the input is the reward marker.
    pub fn is_reward(&self) -> bool {
        self.input.is_reward()
    }

    /// The spender's address, if this is a spend.
    pub fn spend_address(&self) -> Option<&str> {
        self.input.as_spend().map(|input| input.address.as_str())
    }

    /// Canonical byte encoding of an output map, used for signing.
    ///
    /// Entries are length-prefixed so adjacent fields cannot alias.
    pub fn output_signing_bytes(output: &BTreeMap<Address, Amount>) -> Vec<u8> {
        let mut buf = Vec::new();
        for (address, amount) in output {
            buf.extend_from_slice(&(address.len() as u64).to_le_bytes());
            buf.extend_from_slice(address.as_bytes());
            buf.extend_from_slice(&amount.to_le_bytes());
        }
        buf
    }

    /// SHA-256 digest over every field of the record.
    ///
    /// Block hashes commit to transaction digests, so any mutation of a
    /// recorded transaction breaks its block's hash.
    pub fn digest(&self) -> Hash {
        let mut buf = Vec::new();
        buf.extend_from_slice(&(self.id.len() as u64).to_le_bytes());
        buf.extend_from_slice(self.id.as_bytes());
        match &self.input {
            TransactionInput::Reward(input) => {
                buf.push(0);
                buf.extend_from_slice(input.address.as_bytes());
            }
            TransactionInput::Spend(input) => {
                buf.push(1);
                buf.extend_from_slice(&input.timestamp.to_le_bytes());
                buf.extend_from_slice(&input.amount.to_le_bytes());
                buf.extend_from_slice(&(input.address.len() as u64).to_le_bytes());
                buf.extend_from_slice(input.address.as_bytes());
                buf.extend_from_slice(input.public_key.as_bytes());
                buf.extend_from_slice(input.signature.as_bytes());
            }
        }
        buf.extend_from_slice(&Self::output_signing_bytes(&self.output));
        sha256(&[&buf])
    }
}

/// One immutable unit of the chain: a batch of transactions plus linkage
/// metadata and the proof value that mined it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// When the block was mined, nanoseconds since the Unix epoch.
    pub timestamp: Timestamp,
    /// Hash of the preceding block.
    pub last_hash: Hash,
    /// This block's own hash over all other fields.
    pub hash: Hash,
    /// The transaction payload.
    pub data: Vec<Transaction>,
    /// Required leading zero bits of `hash`.
    pub difficulty: u32,
    /// Proof-of-work counter.
    pub nonce: u64,
}

impl Block {
    /// The canonical hash over a block's stamped fields.
    ///
    /// Both the miner and successor validation compute the hash through
    /// here, so the two can never disagree on the encoding.
    pub fn payload_hash(
        timestamp: Timestamp,
        last_hash: &Hash,
        data: &[Transaction],
        difficulty: u32,
        nonce: u64,
    ) -> Hash {
        let mut buf = Vec::new();
        buf.extend_from_slice(&timestamp.to_le_bytes());
        buf.extend_from_slice(last_hash);
        buf.extend_from_slice(&difficulty.to_le_bytes());
        buf.extend_from_slice(&nonce.to_le_bytes());
        for tx in data {
            buf.extend_from_slice(&tx.digest());
        }
        sha256(&[&buf])
    }
}
