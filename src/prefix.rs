//! Base58check prefixes of the Tezos encodings.

use crate::Curve::{self, *};

/// An encoding tag and its binary base58check prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// Ed25519 public key hash
    Tz1,
    /// Secp256k1 public key hash
    Tz2,
    /// P-256 public key hash
    Tz3,
    /// Ed25519 public key
    Edpk,
    /// Ed25519 secret key, 64-byte form
    Edsk,
    /// Ed25519 secret key, 32-byte seed form
    EdskSeed,
    /// Encrypted Ed25519 seed
    Edesk,
    /// Secp256k1 public key
    Sppk,
    /// Secp256k1 secret key
    Spsk,
    /// Encrypted secp256k1 secret key
    Spesk,
    /// P-256 public key
    P2pk,
    /// P-256 secret key
    P2sk,
    /// Encrypted P-256 secret key
    P2esk,
    /// Generic signature
    Sig,
    /// Ed25519 signature
    Edsig,
    /// Secp256k1 signature
    Spsig,
    /// P-256 signature
    P2sig,
}

use Prefix::*;

const ALL: [Prefix; 17] = [
    Tz1, Tz2, Tz3, Edpk, Edsk, EdskSeed, Edesk, Sppk, Spsk, Spesk, P2pk, P2sk, P2esk, Sig, Edsig,
    Spsig, P2sig,
];

impl Prefix {
    /// Binary prefix prepended to the payload before base58check encoding
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Tz1 => &[6, 161, 159],
            Tz2 => &[6, 161, 161],
            Tz3 => &[6, 161, 164],
            Edpk => &[13, 15, 37, 217],
            Edsk => &[43, 246, 78, 7],
            EdskSeed => &[13, 15, 58, 7],
            Edesk => &[7, 90, 60, 179, 41],
            Sppk => &[3, 254, 226, 86],
            Spsk => &[17, 162, 224, 201],
            Spesk => &[9, 237, 241, 174, 150],
            P2pk => &[3, 178, 139, 127],
            P2sk => &[16, 81, 238, 189],
            P2esk => &[9, 48, 57, 115, 171],
            Sig => &[4, 130, 43],
            Edsig => &[9, 245, 205, 134, 18],
            Spsig => &[13, 115, 101, 19, 63],
            P2sig => &[54, 240, 44, 52],
        }
    }

    /// Leading characters of strings encoded with this prefix
    pub const fn tag(self) -> &'static str {
        match self {
            Tz1 => "tz1",
            Tz2 => "tz2",
            Tz3 => "tz3",
            Edpk => "edpk",
            Edsk | EdskSeed => "edsk",
            Edesk => "edesk",
            Sppk => "sppk",
            Spsk => "spsk",
            Spesk => "spesk",
            P2pk => "p2pk",
            P2sk => "p2sk",
            P2esk => "p2esk",
            Sig => "sig",
            Edsig => "edsig",
            Spsig => "spsig1",
            P2sig => "p2sig",
        }
    }

    /// Looks a prefix up by tag. `edsk` resolves to the 64-byte form.
    pub fn from_tag(tag: &str) -> Option<Self> {
        ALL.into_iter()
            .filter(|prefix| *prefix != EdskSeed)
            .find(|prefix| prefix.tag() == tag)
    }

    /// Public key prefix of a curve
    pub const fn public_key(curve: Curve) -> Self {
        match curve {
            Ed25519 => Edpk,
            Secp256k1 => Sppk,
            P256 => P2pk,
        }
    }

    /// Secret key prefix of a curve
    pub const fn secret_key(curve: Curve) -> Self {
        match curve {
            Ed25519 => Edsk,
            Secp256k1 => Spsk,
            P256 => P2sk,
        }
    }

    /// Encrypted secret key prefix of a curve
    pub const fn encrypted_secret_key(curve: Curve) -> Self {
        match curve {
            Ed25519 => Edesk,
            Secp256k1 => Spesk,
            P256 => P2esk,
        }
    }

    /// Public key hash prefix of a curve
    pub const fn public_key_hash(curve: Curve) -> Self {
        match curve {
            Ed25519 => Tz1,
            Secp256k1 => Tz2,
            P256 => Tz3,
        }
    }

    /// Curve specific signature prefix
    pub const fn signature(curve: Curve) -> Self {
        match curve {
            Ed25519 => Edsig,
            Secp256k1 => Spsig,
            P256 => P2sig,
        }
    }
}
