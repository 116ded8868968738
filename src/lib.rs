//! Hashing support for the cipher tool. The digest algorithms live in `ciphra_hashes`; this crate adds the checks a
//! caller needs when it compares a message against a digest it was handed as text.

pub use ciphra_hashes::{
    compare, decrypt, hash128, hash256, to_hex, HashError, HashFunction, MD5Hash, SHA256Hash,
};

pub mod verify;

pub use crate::verify::{verify_hex, VerifyError};
