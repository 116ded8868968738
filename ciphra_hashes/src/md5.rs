#![allow(clippy::unreadable_literal)]
#![allow(clippy::zero_prefixed_literal)]

use ciphra_util::{align_to_u32a_le, store_u32a_le, Endianness};

use crate::merkle_damgard::{self, MerkleDamgardHash};
use crate::padding::{BLOCK_LENGTH_BYTES, BLOCK_LENGTH_DOUBLE_WORDS};
use crate::HashFunction;

/// number of rounds applied per block
const ROUNDS: usize = 64;

/// The initial state for any MD5 hash. From here, all blocks are applied.
pub const INITIAL: MD5Hash = MD5Hash(0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476);

/// A tuple struct containing all four double-words of an MD5 hash.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MD5Hash(pub u32, pub u32, pub u32, pub u32);

/// bits rotated per round
pub static ROUND_ROTATION_COUNT: [u32; ROUNDS] = [
    07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22, 07, 12, 17, 22,
    05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20, 05, 09, 14, 20,
    04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23, 04, 11, 16, 23,
    06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21, 06, 10, 15, 21];

/// binary floored values of |sin(i + 1)| * 2^32 where i is the array index
pub static MAGIC_SINUS_SCALARS: [u32; ROUNDS] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee,
    0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be,
    0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa,
    0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed,
    0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c,
    0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05,
    0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039,
    0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1,
    0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391];

/// Bitwise select: take bits of ``x`` where ``mask`` is set and bits of ``y`` elsewhere.
#[inline]
fn select(mask: u32, x: u32, y: u32) -> u32 {
    (mask & x) | (!mask & y)
}

/// Index of the message word consumed in the given round. The first phase reads the words in order, the other three
/// phases use a fixed permutation each.
pub fn message_index(round: usize) -> usize {
    match round / 16 {
        0 => round,
        1 => (5 * round + 1) % BLOCK_LENGTH_DOUBLE_WORDS,
        2 => (3 * round + 5) % BLOCK_LENGTH_DOUBLE_WORDS,
        3 => (7 * round) % BLOCK_LENGTH_DOUBLE_WORDS,
        _ => unreachable!(),
    }
}

impl MD5Hash {
    /// Nonlinear mixing of the three registers ``b``, ``c`` and ``d`` in the given round.
    fn scramble(round: usize, b: u32, c: u32, d: u32) -> u32 {
        match round / 16 {
            0 => select(b, c, d),
            1 => select(d, b, c),
            2 => b ^ c ^ d,
            3 => c ^ (b | !d),
            _ => unreachable!(),
        }
    }
}

impl MerkleDamgardHash for MD5Hash {
    const INITIAL: Self = INITIAL;

    const LENGTH_ENDIANNESS: Endianness = Endianness::Little;

    /// compute all 64 rounds of MD5 on one block
    ///
    /// # Parameters
    /// ``block`` a 64 byte array containing one block of input data that shall be hashed. Its words are read as
    /// little endian integers.
    fn round_function(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]) {
        let mut words = [0u32; BLOCK_LENGTH_DOUBLE_WORDS];
        align_to_u32a_le(&mut words, block);

        let MD5Hash(mut a, mut b, mut c, mut d) = *self;

        for round in 0..ROUNDS {
            let rotated = a
                .wrapping_add(Self::scramble(round, b, c, d))
                .wrapping_add(MAGIC_SINUS_SCALARS[round])
                .wrapping_add(words[message_index(round)])
                .rotate_left(ROUND_ROTATION_COUNT[round]);

            a = d;
            d = c;
            c = b;
            b = b.wrapping_add(rotated);
        }

        self.0 = self.0.wrapping_add(a);
        self.1 = self.1.wrapping_add(b);
        self.2 = self.2.wrapping_add(c);
        self.3 = self.3.wrapping_add(d);
    }
}

impl HashFunction for MD5Hash {
    const NAME: &'static str = "MD5";

    const BLOCK_SIZE: usize = BLOCK_LENGTH_BYTES;

    const OUTPUT_SIZE: usize = 16;

    type Digest = [u8; 16];

    fn digest_message(input: &[u8]) -> Self {
        merkle_damgard::digest(input)
    }

    /// Generates a raw ``[u8; 16]`` array from the current hash state. Each word is written little endian.
    fn raw(&self) -> Self::Digest {
        let mut raw = [0u8; 16];
        store_u32a_le(&mut raw, &[self.0, self.1, self.2, self.3]);
        raw
    }
}
