//! Base58check and hex conversions.

use crate::{
    error::{Error, Result},
    Prefix,
};

/// Encodes `payload` behind `prefix` with a double SHA-256 checksum.
///
/// ```
/// use tezos_keypairs::{codec, Prefix};
///
/// let address = codec::base58check_encode(&[0; 20], Prefix::Tz1);
/// assert!(address.starts_with("tz1"));
/// ```
pub fn base58check_encode(payload: &[u8], prefix: Prefix) -> String {
    bs58::encode(concat_bytes(prefix.bytes(), payload))
        .with_check()
        .into_string()
}

/// Decodes a base58check string and strips `prefix` from the result.
///
/// # Errors
///
/// Returns [`Error::DecodeError`] if the checksum is wrong or the decoded
/// bytes do not start with `prefix`.
pub fn base58check_decode(encoded: &str, prefix: Prefix) -> Result<Vec<u8>> {
    let mut bytes = bs58::decode(encoded)
        .with_check(None)
        .into_vec()
        .map_err(|_| Error::DecodeError)?;

    if !bytes.starts_with(prefix.bytes()) {
        return Err(Error::DecodeError);
    }

    Ok(bytes.split_off(prefix.bytes().len()))
}

/// Parses a hex string, upper or lower case.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    hex::decode(hex).map_err(|_| Error::InvalidHex)
}

/// Lower case hex encoding.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Returns `a` followed by `b`.
pub fn concat_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    [a, b].concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDPK: &str = "edpkuZWgrKbNiwAVZ42RnEiNwm2ipohxbPWXsxpofSLFDqcHjKnypg";

    #[test]
    fn test_decode_strips_prefix() {
        let payload = base58check_decode(EDPK, Prefix::Edpk).unwrap();
        assert_eq!(payload.len(), 32);
        assert_eq!(base58check_encode(&payload, Prefix::Edpk), EDPK);
    }

    #[test]
    fn test_decode_rejects_other_prefix() {
        assert_eq!(
            base58check_decode(EDPK, Prefix::Sppk),
            Err(Error::DecodeError)
        );
    }

    #[test]
    fn test_decode_rejects_corrupted_checksum() {
        let mut corrupted = EDPK.to_string();
        let last = corrupted.pop().unwrap();
        corrupted.push(if last == 'g' { 'h' } else { 'g' });

        assert_eq!(
            base58check_decode(&corrupted, Prefix::Edpk),
            Err(Error::DecodeError)
        );
    }

    #[test]
    fn test_decode_rejects_non_base58() {
        assert_eq!(
            base58check_decode("edpk0OIl", Prefix::Edpk),
            Err(Error::DecodeError)
        );
    }

    #[test]
    fn test_hex_normalizes_case() {
        let bytes = hex_to_bytes("0A0bFf").unwrap();
        assert_eq!(bytes, vec![0x0a, 0x0b, 0xff]);
        assert_eq!(bytes_to_hex(&bytes), "0a0bff");
    }

    #[test]
    fn test_hex_rejects_odd_length() {
        assert_eq!(hex_to_bytes("abc"), Err(Error::InvalidHex));
        assert_eq!(hex_to_bytes("zz"), Err(Error::InvalidHex));
    }

    #[test]
    fn test_concat() {
        assert_eq!(concat_bytes(&[3], &[1, 2]), vec![3, 1, 2]);
        assert_eq!(concat_bytes(&[], &[1]), vec![1]);
    }
}
