//! Wallet identity and signing.

use shared_crypto::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
use shared_types::{Address, Amount, Block, Transaction};
use std::collections::BTreeMap;

/// A node-local spending identity.
///
/// The address is the first eight hex characters of the public key, so two
/// wallets built from the same seed agree on their address without any
/// out-of-band registry.
pub struct Wallet {
    address: Address,
    keypair: Ed25519KeyPair,
}

impl Wallet {
    /// A wallet with a freshly generated keypair.
    pub fn new() -> Self {
        Self::from_keypair(Ed25519KeyPair::generate())
    }

    /// A deterministic wallet from a 32-byte seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::from_keypair(Ed25519KeyPair::from_seed(seed))
    }

    fn from_keypair(keypair: Ed25519KeyPair) -> Self {
        let address = hex::encode(&keypair.public_key().as_bytes()[..4]);
        Self { address, keypair }
    }

    /// This wallet's address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// This wallet's public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Signs the canonical encoding of an output map.
    pub fn sign_output(&self, output: &BTreeMap<Address, Amount>) -> Ed25519Signature {
        self.keypair.sign(&Transaction::output_signing_bytes(output))
    }

    /// Spendable balance over `chain`.
    pub fn balance(&self, chain: &[Block]) -> Amount {
        crate::balance::calculate_balance(chain, &self.address)
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .field("public_key", &self.keypair.public_key())
            .finish()
    }
}
