use blake2::{
    digest::consts::{U20, U32},
    Blake2b, Digest,
};
use crypto_secretbox::{
    aead::{Aead, KeyInit, Nonce},
    XSalsa20Poly1305,
};
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

pub(crate) fn blake2b_160(data: &[u8]) -> [u8; 20] {
    let mut digest = [0; 20];
    digest.copy_from_slice(&Blake2b::<U20>::digest(data));
    digest
}

pub(crate) fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut digest = [0; 32];
    digest.copy_from_slice(&Blake2b::<U32>::digest(data));
    digest
}

pub(crate) fn pbkdf2_sha512(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    length: usize,
) -> Zeroizing<Vec<u8>> {
    let mut output = Zeroizing::new(vec![0; length]);
    pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, &mut output);
    output
}

pub(crate) fn nfkd(text: &str) -> Zeroizing<String> {
    Zeroizing::new(text.nfkd().collect())
}

pub(crate) fn random_bytes<const N: usize>() -> Result<Zeroizing<[u8; N]>> {
    let mut bytes = Zeroizing::new([0; N]);
    getrandom::getrandom(&mut bytes[..]).map_err(|_| Error::RandomSource)?;
    Ok(bytes)
}

/* all zero nonce, each box key comes from a fresh salt */

pub(crate) fn secretbox_open(ciphertext: &[u8], key: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let cipher = XSalsa20Poly1305::new_from_slice(key).map_err(|_| Error::DecryptionFailed)?;
    cipher
        .decrypt(&Nonce::<XSalsa20Poly1305>::default(), ciphertext)
        .map(Zeroizing::new)
        .map_err(|_| Error::DecryptionFailed)
}

pub(crate) fn secretbox_seal(plaintext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let cipher = XSalsa20Poly1305::new_from_slice(key).map_err(|_| Error::InvalidKey)?;
    cipher
        .encrypt(&Nonce::<XSalsa20Poly1305>::default(), plaintext)
        .map_err(|_| Error::InvalidKey)
}
