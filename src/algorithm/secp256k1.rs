//! Secp256k1 keys. Only public key derivation is available; signing is not.

use libsecp256k1::{PublicKey as SecPublicKey, PublicKeyFormat, SecretKey as SecSecretKey};
use zeroize::Zeroizing;

use super::{Derive, KeyMaterial, Sign, Verify};
use crate::{
    error::{Error, Result},
    utils, Curve,
};

#[derive(Debug)]
pub(crate) struct Secp256k1;

impl Derive for Secp256k1 {
    fn derive(&self, secret_key: &[u8]) -> Result<KeyMaterial> {
        let scalar = SecSecretKey::parse_slice(secret_key).map_err(|_| Error::InvalidKey)?;
        let public_key = SecPublicKey::from_secret_key(&scalar);

        Ok(KeyMaterial {
            public_key: public_key.serialize_compressed().to_vec(),
            secret_key: Zeroizing::new(secret_key.to_vec()),
        })
    }

    fn generate(&self) -> Result<KeyMaterial> {
        let scalar = utils::random_bytes::<32>()?;
        self.derive(scalar.as_slice())
    }

    fn validate_public_key(&self, public_key: &[u8]) -> Result<()> {
        SecPublicKey::parse_slice(public_key, Some(PublicKeyFormat::Compressed))
            .map(|_| ())
            .map_err(|_| Error::InvalidKey)
    }
}

impl Sign for Secp256k1 {
    fn sign(&self, _digest: &[u8], _secret_key: &[u8]) -> Result<Vec<u8>> {
        Err(Error::UnsupportedCurve(Curve::Secp256k1))
    }
}

impl Verify for Secp256k1 {
    fn verify(&self, _digest: &[u8], _signature: &[u8], _public_key: &[u8]) -> Result<()> {
        Err(Error::UnsupportedCurve(Curve::Secp256k1))
    }
}
