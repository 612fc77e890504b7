//! Signing and verification of operation bytes.

use tracing::trace;

use crate::{
    codec,
    error::{Error, Result},
    utils, Curve, Key, LedgerTransport, Prefix,
};

/// Output of [`Key::sign`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedBytes {
    /// The signed bytes, hex encoded, as given
    pub bytes: String,
    /// Generic `sig…` signature
    pub signature: String,
    /// Curve specific signature (`edsig…`)
    pub curve_signature: String,
    /// `bytes` followed by the hex encoded signature, ready for injection
    pub signed_bytes: String,
}

/// Watermark followed by the message bytes
fn watermarked(bytes: &str, watermark: Option<&[u8]>) -> Result<Vec<u8>> {
    let bytes = codec::hex_to_bytes(bytes)?;
    Ok(match watermark {
        Some(watermark) => codec::concat_bytes(watermark, &bytes),
        None => bytes,
    })
}

impl Key {
    /// Sign hex encoded bytes, optionally behind a watermark
    ///
    /// The BLAKE2b-256 digest of `watermark || bytes` is what gets signed.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidHex`] for malformed input, [`Error::NoSecretKey`] for a
    /// public key, [`Error::LedgerDelegated`] for a ledger key and
    /// [`Error::UnsupportedCurve`] for anything but Ed25519.
    pub fn sign(&self, bytes: &str, watermark: Option<&[u8]>) -> Result<SignedBytes> {
        if self.is_ledger() {
            return Err(Error::LedgerDelegated);
        }

        let payload = watermarked(bytes, watermark)?;
        let digest = utils::blake2b_256(&payload);
        let secret_key = self.secret_key_bytes().ok_or(Error::NoSecretKey)?;

        trace!(curve = %self.curve(), watermarked = watermark.is_some(), "signing");
        let signature = self.curve().method().sign(&digest, secret_key)?;

        Ok(self.signed(bytes, &signature))
    }

    /// Sign hex encoded bytes on a hardware wallet
    ///
    /// The transport receives `watermark || bytes` and the key's ledger settings.
    pub fn sign_with_ledger(
        &self,
        transport: &dyn LedgerTransport,
        bytes: &str,
        watermark: Option<&[u8]>,
    ) -> Result<SignedBytes> {
        let payload = watermarked(bytes, watermark)?;

        trace!(path = %self.ledger_path(), "signing on ledger");
        let signature = transport.sign(self.ledger(), &payload)?;

        Ok(self.signed(bytes, &signature))
    }

    fn signed(&self, bytes: &str, signature: &[u8]) -> SignedBytes {
        SignedBytes {
            bytes: bytes.to_string(),
            signature: codec::base58check_encode(signature, Prefix::Sig),
            curve_signature: codec::base58check_encode(signature, Prefix::signature(self.curve())),
            signed_bytes: format!("{}{}", bytes, codec::bytes_to_hex(signature)),
        }
    }

    /// Verify a `sig…` or curve specific signature over hex encoded bytes
    ///
    /// `watermark` must be the one given to [`Key::sign`].
    ///
    /// # Errors
    ///
    /// [`Error::CurveMismatch`] for a signature of another curve,
    /// [`Error::InvalidSignature`] for a malformed or non matching signature,
    /// [`Error::UnsupportedCurve`] for anything but Ed25519.
    pub fn verify(&self, bytes: &str, signature: &str, watermark: Option<&[u8]>) -> Result<()> {
        if self.public_key_bytes().is_empty() {
            return Err(Error::MissingPublicKey);
        }

        let prefix = if signature.starts_with(Prefix::Sig.tag()) {
            Prefix::Sig
        } else {
            let tag = signature.get(..2).unwrap_or(signature);
            if tag.parse::<Curve>().ok() != Some(self.curve()) {
                return Err(Error::CurveMismatch {
                    expected: self.curve(),
                    found: tag.to_string(),
                });
            }
            Prefix::signature(self.curve())
        };

        let signature =
            codec::base58check_decode(signature, prefix).map_err(|_| Error::InvalidSignature)?;
        let digest = utils::blake2b_256(&watermarked(bytes, watermark)?);

        trace!(curve = %self.curve(), "verifying");
        self.curve()
            .method()
            .verify(&digest, &signature, self.public_key_bytes())
    }
}
