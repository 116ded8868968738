//! Merkle–Damgård strengthening: the message is extended by a single 1-bit, zero bits and its length in bits, so that
//! the result can be cut into whole blocks.

use std::mem::size_of;

use ciphra_util::{leading_array, Endianness};

/// the hash block length in bytes
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// the hash block length in 32 bit integers
pub const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// bytes occupied by the message length at the end of the last block
const LENGTH_FIELD_BYTES: usize = size_of::<u64>();

/// Length of a message of ``message_length`` bytes after padding: the smallest multiple of the block length that
/// leaves room for the terminator byte and the length field.
pub fn padded_length(message_length: usize) -> usize {
    let minimum = message_length + 1 + LENGTH_FIELD_BYTES;
    (minimum + BLOCK_LENGTH_BYTES - 1) / BLOCK_LENGTH_BYTES * BLOCK_LENGTH_BYTES
}

/// Pad ``input`` to a multiple of the block length.
///
/// # Parameters
/// ``input`` the complete message
/// ``length_endianness`` byte order of the trailing 64 bit message length, which is algorithm specific
///
/// # Returns
/// A freshly allocated copy of the message followed by ``0x80``, zero bytes and the message length in bits
/// (modulo 2^64).
pub fn pad_message(input: &[u8], length_endianness: Endianness) -> Vec<u8> {
    let total_length = padded_length(input.len());
    let message_length_bits = (input.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(total_length);
    padded.extend_from_slice(input);

    // append a single 1-bit to the end of the message
    padded.push(0x80u8);

    // zero fill up to the length field, which may spill the padding into an additional block
    padded.resize(total_length - LENGTH_FIELD_BYTES, 0u8);
    padded.extend_from_slice(&length_endianness.u64_bytes(message_length_bits));

    debug_assert_eq!(padded.len() % BLOCK_LENGTH_BYTES, 0);
    padded
}

/// Cut a padded message into blocks. The iterator is lazy and yields the blocks strictly in message order. Trailing
/// bytes that do not fill a block are never yielded, which cannot happen for output of [`pad_message`].
pub fn blocks(padded: &[u8]) -> impl Iterator<Item = &[u8; BLOCK_LENGTH_BYTES]> {
    padded
        .chunks_exact(BLOCK_LENGTH_BYTES)
        .filter_map(leading_array::<BLOCK_LENGTH_BYTES>)
}
