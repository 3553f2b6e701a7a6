//! SHA-256 hashing helpers.
//!
//! Block hashes and proof-of-work checks operate on raw 32-byte digests;
//! hex is only used at display and wire boundaries.

use sha2::{Digest, Sha256};

/// A 32-byte SHA-256 digest.
pub type Hash32 = [u8; 32];

/// Hashes the concatenation of `parts` with SHA-256.
pub fn sha256(parts: &[&[u8]]) -> Hash32 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Counts the leading zero bits of a digest.
///
/// Proof-of-work difficulty is expressed in bits: a hash meets difficulty
/// `d` when its first `d` bits are zero.
pub fn leading_zero_bits(hash: &Hash32) -> u32 {
    let mut bits = 0;
    for byte in hash {
        if *byte == 0 {
            bits += 8;
        } else {
            bits += byte.leading_zeros();
            break;
        }
    }
    bits
}

/// Lowercase hex form of a digest.
pub fn to_hex(hash: &Hash32) -> String {
    hex::encode(hash)
}
