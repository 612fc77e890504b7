//! Cryptographic key pairs for Tezos accounts
//!
//! Parses the base58check key encodings used on Tezos (`edsk…`, `edesk…`,
//! `sppk…`, …), decrypts passphrase protected keys, derives fundraiser keys
//! from a mnemonic, email and passphrase, and signs or verifies operation
//! bytes. Ed25519 (`ed`) keys are fully supported, secp256k1 (`sp`) keys can be
//! loaded and encoded but not used for signing, and P-256 (`p2`) credentials are
//! rejected.
//!
//! # Examples
//!
//! ## Load a secret key and derive its address
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use tezos_keypairs::{Credential, Curve, Key};
//!
//! let key = Key::from_credential(&Credential::new(
//!     "edskRv6ZnkLQMVustbYHFPNsABu1Js6pEEWyMUFJQTqEZjVCU2WHh8ckcc7YA4uBzPiJjZCsv3pC1NDdV99AnyLzPjSip4uC3y",
//! ))?;
//!
//! assert_eq!(key.curve(), Curve::Ed25519);
//! assert!(key.is_secret());
//! assert_eq!(key.public_key_hash(), "tz1PTBQi6gTXxCynwvgzu9ga15jnE8WBRUnn");
//! #
//! # Ok(())
//! # }
//! ```
//!
//! ## Sign operation bytes
//!
//! ```
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use tezos_keypairs::{Curve, Key};
//!
//! let key = Key::generate(Curve::Ed25519)?;
//! let signed = key.sign("0a0b0c0d", Some(&[0x03]))?;
//!
//! assert!(signed.curve_signature.starts_with("edsig"));
//! assert_eq!(key.verify("0a0b0c0d", &signed.signature, Some(&[0x03])), Ok(()));
//! #
//! # Ok(())
//! # }
//! ```
//!
//! ## Wait for a key without blocking the runtime
//!
//! Key stretching is slow on purpose, so [`Key::spawn`] runs initialization on
//! tokio's blocking pool and hands back a [`PendingKey`].
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), tezos_keypairs::error::Error> {
//! use tezos_keypairs::{Credential, Key};
//!
//! let pending = Key::spawn(Credential::new(
//!     "edpkuZWgrKbNiwAVZ42RnEiNwm2ipohxbPWXsxpofSLFDqcHjKnypg",
//! ));
//! let key = pending.ready().await?;
//!
//! assert!(!key.is_secret());
//! # Ok(())
//! # }
//! ```

#![deny(
    warnings,
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    non_ascii_idents,
    unreachable_pub
)]
#![doc(test(attr(deny(warnings))))]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

mod utils;

mod algorithm;
use algorithm as alg;

pub mod codec;
pub mod error;

mod prefix;
pub use prefix::Prefix;

mod init;
pub use init::Credential;

mod ledger;
pub use ledger::{LedgerConfig, LedgerTransport};

mod pending;
pub use pending::PendingKey;

mod signer;
pub use signer::SignedBytes;

use error::{Error, Result};

/// Signature scheme of a key, named by its two letter tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Curve {
    /// Ed25519, tag `ed`
    #[serde(rename = "ed")]
    Ed25519,
    /// Secp256k1, tag `sp`
    #[serde(rename = "sp")]
    Secp256k1,
    /// Secp256r1 (P-256), tag `p2`. Keys on this curve are never constructed.
    #[serde(rename = "p2")]
    P256,
}

impl Curve {
    /// Two letter tag that starts every encoding of this curve
    pub const fn tag(self) -> &'static str {
        match self {
            Curve::Ed25519 => "ed",
            Curve::Secp256k1 => "sp",
            Curve::P256 => "p2",
        }
    }

    fn method(self) -> &'static dyn alg::Scheme {
        match self {
            Curve::Ed25519 => &alg::ed25519::Ed25519,
            Curve::Secp256k1 => &alg::secp256k1::Secp256k1,
            Curve::P256 => &alg::p256::P256,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Curve {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ed" => Ok(Curve::Ed25519),
            "sp" => Ok(Curve::Secp256k1),
            "p2" => Ok(Curve::P256),
            _ => Err(Error::InvalidCurvePrefix(s.to_string())),
        }
    }
}

/// A ready key: public key bytes, optional secret key bytes and ledger settings
///
/// Built by [`Key::from_credential`], [`Key::spawn`], [`Key::new`] or
/// [`Key::generate`]. Key material never changes after construction.
#[derive(Clone)]
pub struct Key {
    curve: Curve,
    public_key: Vec<u8>,
    secret_key: Option<Zeroizing<Vec<u8>>>,
    ledger: LedgerConfig,
}

impl Key {
    pub(crate) fn from_parts(
        curve: Curve,
        public_key: Vec<u8>,
        secret_key: Option<Zeroizing<Vec<u8>>>,
        ledger: LedgerConfig,
    ) -> Self {
        Self {
            curve,
            public_key,
            secret_key,
            ledger,
        }
    }

    /// Generate a random key on `curve`
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedCurve`] for [`Curve::P256`], [`Error::RandomSource`]
    /// if the operating system cannot provide randomness.
    pub fn generate(curve: Curve) -> Result<Self> {
        let material = curve.method().generate()?;
        Ok(Self::from_parts(
            curve,
            material.public_key,
            Some(material.secret_key),
            LedgerConfig::default(),
        ))
    }

    /// Curve of this key
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Whether the key was built from a secret credential
    pub fn is_secret(&self) -> bool {
        self.secret_key.is_some()
    }

    /// Raw public key bytes
    pub fn public_key_bytes(&self) -> &[u8] {
        &self.public_key
    }

    /// Raw secret key bytes, the 64-byte expanded form for Ed25519
    pub fn secret_key_bytes(&self) -> Option<&[u8]> {
        self.secret_key.as_deref().map(Vec::as_slice)
    }

    /// Base58check encoded public key (`edpk…`, `sppk…`)
    pub fn public_key(&self) -> String {
        codec::base58check_encode(&self.public_key, Prefix::public_key(self.curve))
    }

    /// Base58check encoded secret key (`edsk…` in its 64-byte form, `spsk…`)
    ///
    /// # Errors
    ///
    /// [`Error::NoSecretKey`] if the key was built from a public key.
    pub fn secret_key(&self) -> Result<String> {
        let secret_key = self.secret_key.as_deref().ok_or(Error::NoSecretKey)?;

        let encoded = match self.curve {
            Curve::Ed25519 => {
                let seed = secret_key.get(..32).ok_or(Error::InvalidKey)?;
                let keypair = alg::ed25519::Ed25519::expand(seed)?;
                codec::base58check_encode(&keypair.secret_key, Prefix::Edsk)
            }
            curve => codec::base58check_encode(secret_key, Prefix::secret_key(curve)),
        };

        Ok(encoded)
    }

    /// Passphrase protected secret key (`edesk…`, `spesk…`) with a random salt
    ///
    /// The result loads back with [`Credential::with_passphrase`].
    pub fn encrypted_secret_key(&self, passphrase: &str) -> Result<String> {
        let salt = utils::random_bytes::<{ init::SALT_LENGTH }>()?;
        self.encrypted_secret_key_with_salt(passphrase, &salt[..])
    }

    pub(crate) fn encrypted_secret_key_with_salt(
        &self,
        passphrase: &str,
        salt: &[u8],
    ) -> Result<String> {
        let secret_key = self.secret_key.as_deref().ok_or(Error::NoSecretKey)?;
        let payload = self.curve.method().exportable_secret(secret_key);
        let sealed = init::encrypt(payload, passphrase, salt)?;

        Ok(codec::base58check_encode(
            &sealed,
            Prefix::encrypted_secret_key(self.curve),
        ))
    }

    /// Address of the key (`tz1…`, `tz2…`): the 20-byte BLAKE2b hash of the public key
    pub fn public_key_hash(&self) -> String {
        codec::base58check_encode(
            &utils::blake2b_160(&self.public_key),
            Prefix::public_key_hash(self.curve),
        )
    }

    /// Whether signing is delegated to a hardware wallet
    pub fn is_ledger(&self) -> bool {
        self.ledger.enabled
    }

    /// Turn hardware wallet delegation on or off
    pub fn set_ledger(&mut self, enabled: bool) {
        self.ledger.enabled = enabled;
    }

    /// Derivation path on the hardware wallet
    pub fn ledger_path(&self) -> &str {
        &self.ledger.path
    }

    /// Set the derivation path on the hardware wallet
    pub fn set_ledger_path(&mut self, path: impl Into<String>) {
        self.ledger.path = path.into();
    }

    /// Curve selector sent to the hardware wallet
    pub fn ledger_curve(&self) -> u8 {
        self.ledger.curve
    }

    /// Set the curve selector sent to the hardware wallet
    pub fn set_ledger_curve(&mut self, curve: u8) {
        self.ledger.curve = curve;
    }

    /// All hardware wallet settings
    pub fn ledger(&self) -> &LedgerConfig {
        &self.ledger
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("curve", &self.curve)
            .field("public_key", &self.public_key())
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("ledger", &self.ledger)
            .finish()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.public_key())
    }
}
