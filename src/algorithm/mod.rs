//! Internal traits for curve specific operations.

use std::fmt;
use zeroize::Zeroizing;

use crate::error::Result;

pub(super) mod ed25519;
pub(super) mod p256;
pub(super) mod secp256k1;

/// Raw key material produced by a derivation.
pub(crate) struct KeyMaterial {
    pub(crate) public_key: Vec<u8>,
    pub(crate) secret_key: Zeroizing<Vec<u8>>,
}

/// Trait for turning secret bytes into a key pair.
pub(crate) trait Derive: fmt::Debug {
    /// Derives the public key and the canonical secret key from decoded secret bytes.
    fn derive(&self, secret_key: &[u8]) -> Result<KeyMaterial>;

    /// Generates a fresh random key pair.
    fn generate(&self) -> Result<KeyMaterial>;

    /// Checks that decoded public key bytes are a point on the curve.
    fn validate_public_key(&self, public_key: &[u8]) -> Result<()>;

    /// Bytes that go into the encrypted form of the secret key.
    fn exportable_secret<'a>(&self, secret_key: &'a [u8]) -> &'a [u8] {
        secret_key
    }
}

/// Trait for signing digests.
pub(crate) trait Sign: fmt::Debug {
    /// Signs a 32-byte digest with the secret key bytes.
    fn sign(&self, digest: &[u8], secret_key: &[u8]) -> Result<Vec<u8>>;
}

/// Trait for verifying signatures over digests.
pub(crate) trait Verify: fmt::Debug {
    /// Verifies a raw signature against a digest and public key bytes.
    fn verify(&self, digest: &[u8], signature: &[u8], public_key: &[u8]) -> Result<()>;
}

/// Everything a curve provides.
pub(crate) trait Scheme: Derive + Sign + Verify + Sync {}

impl<T: Derive + Sign + Verify + Sync> Scheme for T {}
