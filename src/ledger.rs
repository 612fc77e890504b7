//! Hardware wallet delegation settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Where and how signing is delegated to a hardware wallet
///
/// Deserializes from partial input, missing fields take their defaults:
///
/// ```
/// use tezos_keypairs::LedgerConfig;
///
/// let config: LedgerConfig = serde_json::from_str(r#"{ "enabled": true }"#).unwrap();
/// assert_eq!(config.path, "44'/1729'/0'/0'");
/// assert_eq!(config.curve, 0x00);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Sign on the device instead of with local secret bytes
    pub enabled: bool,
    /// BIP32 derivation path on the device
    pub path: String,
    /// Device curve selector, `0x00` for Ed25519
    pub curve: u8,
}

impl LedgerConfig {
    /// Default derivation path for Tezos accounts
    pub const DEFAULT_PATH: &'static str = "44'/1729'/0'/0'";
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: Self::DEFAULT_PATH.to_string(),
            curve: 0x00,
        }
    }
}

/// Transport to a hardware wallet that signs on behalf of a ledger key
pub trait LedgerTransport {
    /// Sign watermarked operation bytes on the device and return the raw signature
    fn sign(&self, config: &LedgerConfig, bytes: &[u8]) -> Result<Vec<u8>>;
}
