//! Error types.

use thiserror::Error;

use crate::Curve;

/// Result with error type
pub type Result<T> = std::result::Result<T, Error>;

/// Every way building, encoding or using a key can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The credential does not start with `ed`, `sp` or `p2`
    #[error("invalid curve prefix {0:?}")]
    InvalidCurvePrefix(String),

    /// The encoded key is not 54, 55, 88 or 98 characters long
    #[error("invalid key length {0}")]
    InvalidKeyLength(usize),

    /// The key type tag is not `pk` or `sk`
    #[error("invalid key tag {0:?}")]
    InvalidKeyTag(String),

    /// An encrypted key or a fundraiser credential came without a passphrase
    #[error("passphrase required")]
    MissingPassphrase,

    /// Wrong passphrase or corrupted ciphertext
    #[error("unable to decrypt secret key")]
    DecryptionFailed,

    /// The operation is not implemented for this curve
    #[error("curve {0} is not supported")]
    UnsupportedCurve(Curve),

    /// Decoded key material is not a valid key for its curve
    #[error("invalid key")]
    InvalidKey,

    /// The key was built from a public key only
    #[error("no secret key available")]
    NoSecretKey,

    /// The key has no public key to verify against
    #[error("no public key available")]
    MissingPublicKey,

    /// A signature was produced with a different curve than the key
    #[error("signature curve {found:?} does not match key curve {expected}")]
    CurveMismatch {
        /// Curve of the key
        expected: Curve,
        /// Curve tag read from the signature
        found: String,
    },

    /// Malformed signature or signature mismatch
    #[error("invalid signature")]
    InvalidSignature,

    /// Bad base58check checksum or prefix
    #[error("unable to decode base58check string")]
    DecodeError,

    /// Message bytes are not valid hex
    #[error("invalid hex string")]
    InvalidHex,

    /// Key initialization ended without producing a result
    #[error("key initialization did not complete")]
    IllegalState,

    /// Signing must go through the hardware transport
    #[error("ledger key must be signed with a ledger transport")]
    LedgerDelegated,

    /// The hardware transport reported an error
    #[error("ledger transport error: {0}")]
    Ledger(String),

    /// The operating system random source failed
    #[error("random source unavailable")]
    RandomSource,
}
