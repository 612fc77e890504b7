//! Turning a credential string into a ready [`Key`].
//!
//! A credential is either a fundraiser triple (mnemonic, email, passphrase) or
//! a prefixed base58check key, optionally encrypted with a passphrase:
//!
//! ```text
//! Start ─┬─ email given ──► Fundraiser ──────────────────────────┐
//!        └─ otherwise ───► Encoded ──► (Decrypted) ──► Derived ──┴─► Ready
//! ```
//!
//! Every state may end in an error instead, and no partially built key is
//! ever returned.

use std::fmt;

use tracing::debug;
use zeroize::Zeroizing;

use crate::{
    algorithm::{ed25519::Ed25519, KeyMaterial},
    codec,
    error::{Error, Result},
    utils, Curve, Key, LedgerConfig, Prefix,
};

const FUNDRAISER_ROUNDS: u32 = 2048;
const FUNDRAISER_SEED_LENGTH: usize = 64;
const ENCRYPTION_ROUNDS: u32 = 32768;
const ENCRYPTION_KEY_LENGTH: usize = 32;
pub(crate) const SALT_LENGTH: usize = 8;

const KEY_LENGTHS: [usize; 4] = [54, 55, 88, 98];
const ED_SEED_LENGTH: usize = 54;

/// Input for building a [`Key`]
///
/// ```
/// use tezos_keypairs::{Credential, LedgerConfig};
///
/// let credential = Credential::new("edesk1…")
///     .with_passphrase("secret")
///     .with_ledger(LedgerConfig::default());
///
/// assert!(!format!("{:?}", credential).contains("secret"));
/// ```
#[derive(Clone, Default)]
pub struct Credential {
    key: Zeroizing<String>,
    passphrase: Option<Zeroizing<String>>,
    email: Option<String>,
    ledger: LedgerConfig,
}

impl Credential {
    /// A base58check key (`edsk…`, `edesk…`, `sppk…`, …) or a fundraiser mnemonic
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: Zeroizing::new(key.into()),
            ..Self::default()
        }
    }

    /// Passphrase of an encrypted key or of a fundraiser account
    pub fn with_passphrase(mut self, passphrase: impl Into<String>) -> Self {
        self.passphrase = Some(Zeroizing::new(passphrase.into()));
        self
    }

    /// Email of a fundraiser account. Makes the key string a mnemonic.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Hardware wallet settings carried over to the key
    pub fn with_ledger(mut self, ledger: LedgerConfig) -> Self {
        self.ledger = ledger;
        self
    }

    fn passphrase(&self) -> Result<&str> {
        self.passphrase
            .as_deref()
            .map(String::as_str)
            .ok_or(Error::MissingPassphrase)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &"[REDACTED]")
            .field("passphrase", &self.passphrase.as_ref().map(|_| "[REDACTED]"))
            .field("email", &self.email.as_ref().map(|_| "[REDACTED]"))
            .field("ledger", &self.ledger)
            .finish()
    }
}

/// Layout of a prefixed key string, read from its leading characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Encoding {
    curve: Curve,
    encrypted: bool,
    secret: bool,
    prefix: Prefix,
}

impl Encoding {
    fn classify(key: &str) -> Result<Self> {
        let curve = key
            .get(..2)
            .ok_or_else(|| Error::InvalidCurvePrefix(key.chars().take(2).collect()))?
            .parse::<Curve>()?;

        if !KEY_LENGTHS.contains(&key.len()) {
            return Err(Error::InvalidKeyLength(key.len()));
        }

        let encrypted = key.as_bytes()[2] == b'e';
        let offset = if encrypted { 3 } else { 2 };
        let tag = key
            .get(offset..offset + 2)
            .ok_or_else(|| Error::InvalidKeyTag(String::new()))?;

        let secret = match tag {
            "sk" => true,
            "pk" => false,
            _ => return Err(Error::InvalidKeyTag(tag.to_string())),
        };

        let seed_form = curve == Curve::Ed25519 && secret && !encrypted && key.len() == ED_SEED_LENGTH;
        let prefix = if seed_form {
            Prefix::EdskSeed
        } else {
            let name = format!("{}{}{}", curve, if encrypted { "e" } else { "" }, tag);
            Prefix::from_tag(&name).ok_or(Error::InvalidKeyTag(name))?
        };

        Ok(Self {
            curve,
            encrypted,
            secret,
            prefix,
        })
    }
}

impl Key {
    /// Build a key from a credential, blocking the current thread
    ///
    /// Encrypted and fundraiser credentials run PBKDF2 with thousands of
    /// rounds; inside an async runtime prefer [`Key::spawn`].
    ///
    /// # Errors
    ///
    /// Any of the classification, decoding, decryption or derivation errors
    /// of [`Error`]. P-256 credentials always fail with
    /// [`Error::UnsupportedCurve`].
    pub fn from_credential(credential: &Credential) -> Result<Self> {
        match &credential.email {
            Some(email) => from_fundraiser(credential, email),
            None => from_encoded(credential),
        }
    }
}

fn from_fundraiser(credential: &Credential, email: &str) -> Result<Key> {
    let passphrase = credential.passphrase()?;
    debug!("deriving fundraiser key");

    let salt = utils::nfkd(&format!("mnemonic{email}{passphrase}"));
    let mnemonic = utils::nfkd(&credential.key);
    let stretched = utils::pbkdf2_sha512(
        mnemonic.as_bytes(),
        salt.as_bytes(),
        FUNDRAISER_ROUNDS,
        FUNDRAISER_SEED_LENGTH,
    );

    let material = Ed25519::expand(&stretched[..32])?;
    Ok(ready(Curve::Ed25519, material, credential))
}

fn from_encoded(credential: &Credential) -> Result<Key> {
    let encoding = Encoding::classify(&credential.key)?;
    debug!(
        curve = %encoding.curve,
        encrypted = encoding.encrypted,
        secret = encoding.secret,
        "decoding key"
    );

    if encoding.curve == Curve::P256 {
        return Err(Error::UnsupportedCurve(Curve::P256));
    }

    let mut payload = Zeroizing::new(codec::base58check_decode(&credential.key, encoding.prefix)?);

    if encoding.encrypted {
        payload = decrypt(&payload, credential.passphrase()?)?;
        debug!(curve = %encoding.curve, "decrypted secret key");
    }

    if !encoding.secret {
        encoding.curve.method().validate_public_key(&payload)?;
        return Ok(Key::from_parts(
            encoding.curve,
            payload.to_vec(),
            None,
            credential.ledger.clone(),
        ));
    }

    let material = encoding.curve.method().derive(&payload)?;
    Ok(ready(encoding.curve, material, credential))
}

fn ready(curve: Curve, material: KeyMaterial, credential: &Credential) -> Key {
    debug!(%curve, "key ready");
    Key::from_parts(
        curve,
        material.public_key,
        Some(material.secret_key),
        credential.ledger.clone(),
    )
}

fn box_key(passphrase: &str, salt: &[u8]) -> Zeroizing<Vec<u8>> {
    utils::pbkdf2_sha512(
        passphrase.as_bytes(),
        salt,
        ENCRYPTION_ROUNDS,
        ENCRYPTION_KEY_LENGTH,
    )
}

/// Opens `salt || box` with a key stretched from the passphrase.
pub(crate) fn decrypt(payload: &[u8], passphrase: &str) -> Result<Zeroizing<Vec<u8>>> {
    if payload.len() <= SALT_LENGTH {
        return Err(Error::DecryptionFailed);
    }

    let (salt, sealed) = payload.split_at(SALT_LENGTH);
    utils::secretbox_open(sealed, &box_key(passphrase, salt))
}

/// Produces `salt || box`, the inverse of [`decrypt`].
pub(crate) fn encrypt(secret: &[u8], passphrase: &str, salt: &[u8]) -> Result<Vec<u8>> {
    let sealed = utils::secretbox_seal(secret, &box_key(passphrase, salt))?;
    Ok(codec::concat_bytes(salt, &sealed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDSK: &str = "edskRv6ZnkLQMVustbYHFPNsABu1Js6pEEWyMUFJQTqEZjVCU2WHh8ckcc7YA4uBzPiJjZCsv3pC1NDdV99AnyLzPjSip4uC3y";
    const EDESK: &str = "edesk1GBQ31Tu4CffH37Cwa6jXTbYbtyN8rbUSgrpGtuBtAdonZfFLjUQoWzDvWLJKN1w3rjrvu6cR6nJA7Jj9BU";
    const SALT: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn test_classify_encodings() {
        let edsk = Encoding::classify(EDSK).unwrap();
        assert_eq!(edsk.curve, Curve::Ed25519);
        assert!(edsk.secret && !edsk.encrypted);
        assert_eq!(edsk.prefix, Prefix::Edsk);

        let seed = Encoding::classify("edsk3impSvxrErAUzRkKryRARYPsAPWXoWFdw3V5WnERkQAfGmE22M").unwrap();
        assert_eq!(seed.prefix, Prefix::EdskSeed);

        let edesk = Encoding::classify(EDESK).unwrap();
        assert!(edesk.secret && edesk.encrypted);
        assert_eq!(edesk.prefix, Prefix::Edesk);

        let sppk = Encoding::classify("sppk7aK6iq8vaTFNMrJd2LfjqYuEWzZCxB7n7UC4GRN1zN98vVwJDrV").unwrap();
        assert_eq!(sppk.curve, Curve::Secp256k1);
        assert!(!sppk.secret);
    }

    #[test]
    fn test_classify_rejects_encrypted_public_key() {
        let key = format!("edepk{}", "1".repeat(83));
        assert_eq!(
            Encoding::classify(&key),
            Err(Error::InvalidKeyTag("edepk".to_string()))
        );
    }

    #[test]
    fn test_classify_short_input() {
        assert_eq!(
            Encoding::classify("e"),
            Err(Error::InvalidCurvePrefix("e".to_string()))
        );
        assert_eq!(
            Encoding::classify(""),
            Err(Error::InvalidCurvePrefix(String::new()))
        );
    }

    #[test]
    fn test_encrypt_matches_known_vector() {
        let key = Key::from_credential(&Credential::new(EDSK)).unwrap();
        assert_eq!(
            key.encrypted_secret_key_with_salt("p4ssw0rd", &SALT).unwrap(),
            EDESK
        );
    }

    #[test]
    fn test_decrypt_rejects_truncated_payload() {
        assert_eq!(decrypt(&SALT, "p4ssw0rd"), Err(Error::DecryptionFailed));
        assert_eq!(
            decrypt(&[SALT.to_vec(), vec![0; 16]].concat(), "p4ssw0rd"),
            Err(Error::DecryptionFailed)
        );
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("tragic grid toss")
            .with_email("jdoe@example.org")
            .with_passphrase("hunter2");
        let debug = format!("{:?}", credential);

        assert!(!debug.contains("tragic"));
        assert!(!debug.contains("jdoe"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("REDACTED"));
    }
}
