use proptest::prelude::*;
use rand::{Rng, RngCore};

use super::*;
use crate::padding::padded_length;

pub const EMPTY_MESSAGE: &str = "";

pub const SOME_TEXT: &str = "a-very-long-message-that-can-be-digested-at-once";

pub const LONG_TEXT: &str = "And Ion held six fingers aloft and upon their spears did the \
soldiers impale themselves. \"For you!\" they cried before the blood drowned their tongues. \
And Ion said, \"Now do you see?\" And Nadox wept, as more did skewer themselves in Ion's name, \
for he had seen and now knew the truth of his words.";

#[test]
fn test_hash128_known_vectors() {
    assert_eq!(to_hex(&hash128(b"")), "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(to_hex(&hash128(b"abc")), "900150983cd24fb0d6963f7d28e17f72");
    assert_eq!(
        to_hex(&hash128(b"The quick brown fox jumps over the lazy dog")),
        "9e107d9d372bb6826bd81d3542a419d6"
    );
}

#[test]
fn test_hash256_known_vectors() {
    assert_eq!(
        to_hex(&hash256(b"")),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        to_hex(&hash256(b"abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn test_hex_is_lowercase() {
    assert_eq!(to_hex(&[0x00, 0xAB, 0x0F, 0xF0]), "00ab0ff0");
    assert_eq!(to_hex(&[]), "");
}

#[test]
fn test_compare() {
    let digest = hash256(LONG_TEXT.as_bytes());
    let mut other = digest;
    other[31] ^= 0x01;

    assert!(compare(&digest, &hash256(LONG_TEXT.as_bytes())));
    assert!(!compare(&digest, &other));
    assert!(!compare(&hash128(b"abc"), &hash256(b"abc")));
}

#[test]
fn test_decrypt_is_unsupported() {
    assert_eq!(
        decrypt::<MD5Hash>(&hash128(b"abc")),
        Err(HashError::UnsupportedOperation { operation: "decrypt", algorithm: "MD5" })
    );
    assert_eq!(
        decrypt::<SHA256Hash>(&[]),
        Err(HashError::UnsupportedOperation { operation: "decrypt", algorithm: "SHA-256" })
    );
    assert_eq!(
        decrypt::<SHA256Hash>(&hash256(b"abc")).unwrap_err().to_string(),
        "decrypt is not supported by SHA-256"
    );
}

#[test]
fn test_block_boundaries() {
    // around the point where the length field spills into another block, and around full blocks
    for length in [54usize, 55, 56, 57, 63, 64, 65, 119, 120].iter() {
        let message = vec![0x61u8; *length];

        assert_eq!(hash128(&message).len(), MD5Hash::OUTPUT_SIZE);
        assert_eq!(hash256(&message).len(), SHA256Hash::OUTPUT_SIZE);
        assert_ne!(hash128(&message), hash128(&message[1..]));
        assert_ne!(hash256(&message), hash256(&message[1..]));
    }
}

#[test]
fn test_avalanche() {
    let mut rng = rand::thread_rng();

    for length in [1usize, 3, 55, 56, 64, 200, 1000].iter() {
        let mut message = vec![0u8; *length];
        rng.fill_bytes(&mut message);

        let bit = rng.gen_range(0, message.len() * 8);
        let mut flipped = message.clone();
        flipped[bit / 8] ^= 1u8 << (bit % 8);

        assert!(!compare(&hash128(&message), &hash128(&flipped)));
        assert!(!compare(&hash256(&message), &hash256(&flipped)));
    }
}

proptest! {
    #[test]
    fn digests_are_deterministic(message in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert!(compare(&hash128(&message), &hash128(&message)));
        prop_assert!(compare(&hash256(&message), &hash256(&message)));
    }

    #[test]
    fn hex_has_twice_the_digest_length(message in proptest::collection::vec(any::<u8>(), 0..256)) {
        let short = to_hex(&hash128(&message));
        let long = to_hex(&hash256(&message));

        prop_assert_eq!(short.len(), 2 * MD5Hash::OUTPUT_SIZE);
        prop_assert_eq!(long.len(), 2 * SHA256Hash::OUTPUT_SIZE);
        prop_assert!(short.chars().chain(long.chars()).all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn padded_length_is_block_aligned(length in 0usize..100_000) {
        let padded = padded_length(length);

        prop_assert_eq!(padded % MD5Hash::BLOCK_SIZE, 0);
        prop_assert!(padded >= length + 9);
        prop_assert!(padded < length + 9 + SHA256Hash::BLOCK_SIZE);
    }
}
