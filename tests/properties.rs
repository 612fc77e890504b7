//! Property-based tests for signing and credential classification

use proptest::prelude::*;
use tezos_keypairs::{error::Error, Credential, Key};

const SECRET_KEY: &str = "edskRv6ZnkLQMVustbYHFPNsABu1Js6pEEWyMUFJQTqEZjVCU2WHh8ckcc7YA4uBzPiJjZCsv3pC1NDdV99AnyLzPjSip4uC3y";
const PUBLIC_KEY: &str = "edpkuZWgrKbNiwAVZ42RnEiNwm2ipohxbPWXsxpofSLFDqcHjKnypg";

fn secret_key() -> Key {
    Key::from_credential(&Credential::new(SECRET_KEY)).expect("fixture key loads")
}

proptest! {
    /// Anything signed verifies against the public key with the same watermark
    #[test]
    fn prop_sign_verify_roundtrip(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        watermark in proptest::option::of(proptest::collection::vec(any::<u8>(), 1..4)),
    ) {
        let key = secret_key();
        let public = Key::from_credential(&Credential::new(PUBLIC_KEY)).unwrap();
        let message = hex::encode(&bytes);

        let signed = key.sign(&message, watermark.as_deref()).unwrap();

        prop_assert!(signed.signed_bytes.starts_with(&message));
        prop_assert_eq!(public.verify(&message, &signed.signature, watermark.as_deref()), Ok(()));
        prop_assert_eq!(
            public.verify(&message, &signed.curve_signature, watermark.as_deref()),
            Ok(())
        );
    }

    /// Flipping any bit of the message invalidates the signature
    #[test]
    fn prop_tampered_message_is_rejected(
        bytes in proptest::collection::vec(any::<u8>(), 1..128),
        index in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let key = secret_key();
        let signed = key.sign(&hex::encode(&bytes), None).unwrap();

        let mut tampered = bytes.clone();
        tampered[index.index(bytes.len())] ^= 1 << bit;

        prop_assert_eq!(
            key.verify(&hex::encode(&tampered), &signed.signature, None),
            Err(Error::InvalidSignature)
        );
    }

    /// Only `ed`, `sp` and `p2` start a credential
    #[test]
    fn prop_unknown_curve_prefix_is_rejected(prefix in "[a-z0-9]{2}", rest in "[1-9A-Za-z]{52}") {
        prop_assume!(!["ed", "sp", "p2"].contains(&prefix.as_str()));

        let result = Key::from_credential(&Credential::new(format!("{}{}", prefix, rest)));
        prop_assert_eq!(result.unwrap_err(), Error::InvalidCurvePrefix(prefix));
    }

    /// Lengths other than the four encoded key lengths are rejected before decoding
    #[test]
    fn prop_unexpected_length_is_rejected(len in 2usize..120) {
        prop_assume!(![54, 55, 88, 98].contains(&len));

        let credential = format!("edsk{}", "1".repeat(len.saturating_sub(4)));
        let expected = credential.len();

        prop_assert_eq!(
            Key::from_credential(&Credential::new(credential)).unwrap_err(),
            Error::InvalidKeyLength(expected)
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// The same fundraiser triple always derives the same address
    #[test]
    fn prop_fundraiser_is_deterministic(
        words in proptest::collection::vec("[a-z]{3,8}", 12..16),
        passphrase in "[ -~]{0,16}",
    ) {
        let credential = Credential::new(words.join(" "))
            .with_email("jdoe@example.org")
            .with_passphrase(passphrase);

        let first = Key::from_credential(&credential).unwrap();
        let second = Key::from_credential(&credential).unwrap();

        prop_assert!(first.public_key_hash().starts_with("tz1"));
        prop_assert_eq!(first.public_key_hash(), second.public_key_hash());
        prop_assert_eq!(first.secret_key(), second.secret_key());
    }
}
