//! Error types for cryptographic operations.

/// Crypto error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    /// The bytes do not encode a valid Ed25519 public key.
    #[error("invalid Ed25519 public key")]
    InvalidPublicKey,

    /// The string is not valid hex.
    #[error("malformed {kind}: not valid hex")]
    InvalidHex { kind: &'static str },

    /// The hex string does not decode to the expected length.
    #[error("malformed {kind}: expected {expected} bytes, got {actual}")]
    MalformedHex {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Signature verification failed.
    #[error("signature verification failed")]
    SignatureVerificationFailed,
}
