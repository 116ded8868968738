//! This crate contains software-implementations of the MD5 and SHA-256 hash algorithms. Both are Merkle–Damgård
//! constructions sharing one padding and block scheduling pipeline, differing only in their compression function and
//! output encoding.

use log::debug;

pub use crate::error::HashError;
pub use crate::md5::MD5Hash;
pub use crate::sha256::SHA256Hash;

pub mod error;
pub mod md5;
pub mod merkle_damgard;
pub mod padding;
pub mod sha256;

/// Any hash function that can digest arbitrarily sized input.
pub trait HashFunction: Sized {
    /// Human readable algorithm name
    const NAME: &'static str;

    /// The digestion block size of this hash function
    const BLOCK_SIZE: usize;

    /// The size of the output digest in bytes
    const OUTPUT_SIZE: usize;

    /// Serialized form of a final hash state.
    type Digest: AsRef<[u8]> + Copy + Eq + std::fmt::Debug;

    /// Digest a full message of arbitrary size.
    /// #Parameters
    /// - `input` a slice containing a (possibly large) chunk of byte data that is to be digested.
    ///
    /// #Output
    /// Returns the hash state of the digested input data. It cannot be used to append more data, as the message
    /// length was appended to the input data for digestion.
    fn digest_message(input: &[u8]) -> Self;

    /// Obtain the hash as raw bytes in the byte order mandated by the algorithm.
    fn raw(&self) -> Self::Digest;
}

/// Compute the 128 bit MD5 digest of ``input``.
pub fn hash128(input: &[u8]) -> [u8; 16] {
    MD5Hash::digest_message(input).raw()
}

/// Compute the 256 bit SHA-256 digest of ``input``.
pub fn hash256(input: &[u8]) -> [u8; 32] {
    SHA256Hash::digest_message(input).raw()
}

/// Render a digest as lowercase hexadecimal text without prefix or separators.
pub fn to_hex(digest: &[u8]) -> String {
    hex::encode(digest)
}

/// Compare two digests byte by byte. Every byte is inspected regardless of where the first difference occurs.
///
/// Both digests are expected to come from the same algorithm. Digests of different length never compare equal.
pub fn compare(first: &[u8], second: &[u8]) -> bool {
    if first.len() != second.len() {
        return false;
    }

    first
        .iter()
        .zip(second.iter())
        .fold(0u8, |difference, (a, b)| difference | (a ^ b))
        == 0
}

/// Hash functions are one-way, so there is nothing to decrypt. This entry point exists for symmetry with the cipher
/// implementations of the surrounding tool and always fails.
pub fn decrypt<H: HashFunction>(_digest: &[u8]) -> Result<Vec<u8>, HashError> {
    debug!("refusing to decrypt a {} digest", H::NAME);

    Err(HashError::UnsupportedOperation {
        operation: "decrypt",
        algorithm: H::NAME,
    })
}

#[cfg(test)]
pub(crate) mod tests;
