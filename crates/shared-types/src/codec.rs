//! Wire codec.
//!
//! Nodes exchange chains, blocks, and transactions as JSON. Every record
//! round-trips losslessly: decode(encode(x)) == x, genesis included.

use crate::entities::{Block, Transaction};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Wire encoding/decoding failure.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The value could not be serialized.
    #[error("wire encode failed: {0}")]
    Encode(#[source] serde_json::Error),

    /// The payload is not a well-formed record of the expected shape.
    #[error("wire decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}

fn encode<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(CodecError::Encode)
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, CodecError> {
    serde_json::from_str(raw).map_err(CodecError::Decode)
}

/// Serializes a chain as an ordered JSON array of block records.
pub fn encode_chain(chain: &[Block]) -> Result<String, CodecError> {
    encode(&chain)
}

/// Deserializes an ordered JSON array of block records.
pub fn decode_chain(raw: &str) -> Result<Vec<Block>, CodecError> {
    decode(raw)
}

/// Serializes a single block record.
pub fn encode_block(block: &Block) -> Result<String, CodecError> {
    encode(block)
}

/// Deserializes a single block record.
pub fn decode_block(raw: &str) -> Result<Block, CodecError> {
    decode(raw)
}

/// Serializes a single transaction record.
pub fn encode_transaction(tx: &Transaction) -> Result<String, CodecError> {
    encode(tx)
}

/// Deserializes a single transaction record.
pub fn decode_transaction(raw: &str) -> Result<Transaction, CodecError> {
    decode(raw)
}
