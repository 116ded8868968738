use ciphra_util::Endianness;
use log::trace;

use crate::padding::{blocks, pad_message, BLOCK_LENGTH_BYTES};
use crate::HashFunction;

/// A hash generated from a Merkle–Damgård construction. Implementors only provide their initial state and the
/// compression of a single block; padding and block iteration are handled by [`digest`].
pub trait MerkleDamgardHash: HashFunction + Copy {
    /// The initial state for any hash. From here, all blocks are applied.
    const INITIAL: Self;

    /// Byte order of the message length appended during padding
    const LENGTH_ENDIANNESS: Endianness;

    /// Compress one block into the hash state. The working registers are added onto the state afterwards, so the
    /// result depends on every block digested before.
    fn round_function(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]);
}

/// Pad ``input``, then fold every block into the initial state of ``H``.
pub fn digest<H: MerkleDamgardHash>(input: &[u8]) -> H {
    let padded = pad_message(input, H::LENGTH_ENDIANNESS);
    trace!(
        "{}: digesting {} bytes in {} blocks",
        H::NAME,
        input.len(),
        padded.len() / BLOCK_LENGTH_BYTES
    );

    let mut hash_state = H::INITIAL;
    for block in blocks(&padded) {
        hash_state.round_function(block);
    }

    hash_state
}
