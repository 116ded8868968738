//! Byte and word conversion helpers shared by the hash implementations.

use std::convert::TryInto;

/// Copies the ``source`` array to the ``dest`` array with respect to endianness. ``source`` must be at least four
/// times bigger than ``dest``. Data from ``source`` will be treated as little endian integers.
pub fn align_to_u32a_le(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Copies the ``source`` array to the ``dest`` array with respect to endianness. ``source`` must be at least four
/// times bigger than ``dest``. Data from ``source`` will be treated as big endian integers.
pub fn align_to_u32a_be(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Serializes ``source`` into ``dest``, each word written as four little endian bytes. ``dest`` must be exactly four
/// times as long as ``source``.
pub fn store_u32a_le(dest: &mut [u8], source: &[u32]) {
    assert_eq!(dest.len(), source.len() * 4);

    for (bytes, word) in dest.chunks_exact_mut(4).zip(source.iter()) {
        bytes.copy_from_slice(&word.to_le_bytes());
    }
}

/// Serializes ``source`` into ``dest``, each word written as four big endian bytes. ``dest`` must be exactly four
/// times as long as ``source``.
pub fn store_u32a_be(dest: &mut [u8], source: &[u32]) {
    assert_eq!(dest.len(), source.len() * 4);

    for (bytes, word) in dest.chunks_exact_mut(4).zip(source.iter()) {
        bytes.copy_from_slice(&word.to_be_bytes());
    }
}

/// Byte order of a multi-byte integer field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Encode a 64 bit integer in this byte order.
    pub fn u64_bytes(self, value: u64) -> [u8; 8] {
        match self {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        }
    }
}

/// Reinterpret the leading ``N`` bytes of ``source`` as a fixed size array. Returns ``None`` if ``source`` is shorter.
pub fn leading_array<const N: usize>(source: &[u8]) -> Option<&[u8; N]> {
    source.get(..N)?.try_into().ok()
}
