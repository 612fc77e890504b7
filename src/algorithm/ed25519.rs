//! Ed25519 keys.

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroizing;

use super::{Derive, KeyMaterial, Sign, Verify};
use crate::{
    error::{Error, Result},
    utils,
};

const SEED_LENGTH: usize = 32;
const KEYPAIR_LENGTH: usize = 64;

#[derive(Debug)]
pub(crate) struct Ed25519;

impl Ed25519 {
    /// Expands a 32-byte seed into the 64-byte secret (seed || public key).
    pub(crate) fn expand(seed: &[u8]) -> Result<KeyMaterial> {
        let seed: &[u8; SEED_LENGTH] = seed.try_into().map_err(|_| Error::InvalidKey)?;
        let signing_key = SigningKey::from_bytes(seed);

        Ok(KeyMaterial {
            public_key: signing_key.verifying_key().to_bytes().to_vec(),
            secret_key: Zeroizing::new(signing_key.to_keypair_bytes().to_vec()),
        })
    }

    fn signing_key(secret_key: &[u8]) -> Result<SigningKey> {
        let seed = secret_key.get(..SEED_LENGTH).ok_or(Error::InvalidKey)?;
        let seed: &[u8; SEED_LENGTH] = seed.try_into().map_err(|_| Error::InvalidKey)?;
        Ok(SigningKey::from_bytes(seed))
    }
}

impl Derive for Ed25519 {
    fn derive(&self, secret_key: &[u8]) -> Result<KeyMaterial> {
        match secret_key.len() {
            SEED_LENGTH => Self::expand(secret_key),
            KEYPAIR_LENGTH => {
                let keypair: &[u8; KEYPAIR_LENGTH] =
                    secret_key.try_into().map_err(|_| Error::InvalidKey)?;
                // rejects a trailing public key that the seed does not expand to
                SigningKey::from_keypair_bytes(keypair).map_err(|_| Error::InvalidKey)?;

                Ok(KeyMaterial {
                    public_key: secret_key[SEED_LENGTH..].to_vec(),
                    secret_key: Zeroizing::new(secret_key.to_vec()),
                })
            }
            _ => Err(Error::InvalidKey),
        }
    }

    fn generate(&self) -> Result<KeyMaterial> {
        let seed = utils::random_bytes::<SEED_LENGTH>()?;
        Self::expand(seed.as_slice())
    }

    fn validate_public_key(&self, public_key: &[u8]) -> Result<()> {
        VerifyingKey::try_from(public_key)
            .map(|_| ())
            .map_err(|_| Error::InvalidKey)
    }

    fn exportable_secret<'a>(&self, secret_key: &'a [u8]) -> &'a [u8] {
        &secret_key[..SEED_LENGTH.min(secret_key.len())]
    }
}

impl Sign for Ed25519 {
    fn sign(&self, digest: &[u8], secret_key: &[u8]) -> Result<Vec<u8>> {
        let signing_key = Self::signing_key(secret_key)?;
        Ok(signing_key.sign(digest).to_bytes().to_vec())
    }
}

impl Verify for Ed25519 {
    fn verify(&self, digest: &[u8], signature: &[u8], public_key: &[u8]) -> Result<()> {
        let signature = Signature::from_slice(signature).map_err(|_| Error::InvalidSignature)?;
        let verifying_key =
            VerifyingKey::try_from(public_key).map_err(|_| Error::InvalidSignature)?;
        verifying_key
            .verify(digest, &signature)
            .map_err(|_| Error::InvalidSignature)
    }
}
