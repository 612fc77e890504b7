//! P-256 placeholder: every operation is rejected.

use super::{Derive, KeyMaterial, Sign, Verify};
use crate::{
    error::{Error, Result},
    Curve,
};

#[derive(Debug)]
pub(crate) struct P256;

impl Derive for P256 {
    fn derive(&self, _secret_key: &[u8]) -> Result<KeyMaterial> {
        Err(Error::UnsupportedCurve(Curve::P256))
    }

    fn generate(&self) -> Result<KeyMaterial> {
        Err(Error::UnsupportedCurve(Curve::P256))
    }

    fn validate_public_key(&self, _public_key: &[u8]) -> Result<()> {
        Err(Error::UnsupportedCurve(Curve::P256))
    }
}

impl Sign for P256 {
    fn sign(&self, _digest: &[u8], _secret_key: &[u8]) -> Result<Vec<u8>> {
        Err(Error::UnsupportedCurve(Curve::P256))
    }
}

impl Verify for P256 {
    fn verify(&self, _digest: &[u8], _signature: &[u8], _public_key: &[u8]) -> Result<()> {
        Err(Error::UnsupportedCurve(Curve::P256))
    }
}
