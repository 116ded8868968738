#![allow(clippy::unreadable_literal)]

use ciphra_util::{align_to_u32a_be, store_u32a_be, Endianness};

use crate::merkle_damgard::{self, MerkleDamgardHash};
use crate::padding::{BLOCK_LENGTH_BYTES, BLOCK_LENGTH_DOUBLE_WORDS};
use crate::HashFunction;

/// number of rounds applied per block, which is also the length of the message schedule
const ROUNDS: usize = 64;

/// The initial state for any SHA-256 hash: the first 32 bits of the fractional parts of the square roots of the
/// first eight primes.
pub const INITIAL: SHA256Hash = SHA256Hash {
    a: 0x6a09e667,
    b: 0xbb67ae85,
    c: 0x3c6ef372,
    d: 0xa54ff53a,
    e: 0x510e527f,
    f: 0x9b05688c,
    g: 0x1f83d9ab,
    h: 0x5be0cd19,
};

/// first 32 bits of the fractional parts of the cube roots of the first 64 primes
pub static ROUND_CONSTANTS: [u32; ROUNDS] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// A SHA-256 hash state. It consists of 8 double-words named `a` through `h`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SHA256Hash {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub g: u32,
    pub h: u32,
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// bits of `f` where `e` is set, bits of `g` elsewhere
#[inline]
fn choose(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ (!e & g)
}

#[inline]
fn majority(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// Expand one block into the 64 word message schedule. The first 16 words are the block read as big endian
/// integers, every further word is derived from four earlier ones.
pub fn message_schedule(block: &[u8; BLOCK_LENGTH_BYTES]) -> [u32; ROUNDS] {
    let mut schedule = [0u32; ROUNDS];
    align_to_u32a_be(&mut schedule[..BLOCK_LENGTH_DOUBLE_WORDS], block);

    for i in BLOCK_LENGTH_DOUBLE_WORDS..ROUNDS {
        schedule[i] = small_sigma1(schedule[i - 2])
            .wrapping_add(schedule[i - 7])
            .wrapping_add(small_sigma0(schedule[i - 15]))
            .wrapping_add(schedule[i - 16]);
    }

    schedule
}

impl MerkleDamgardHash for SHA256Hash {
    const INITIAL: Self = INITIAL;

    const LENGTH_ENDIANNESS: Endianness = Endianness::Big;

    fn round_function(&mut self, block: &[u8; BLOCK_LENGTH_BYTES]) {
        let schedule = message_schedule(block);
        let mut round_state = *self;

        for (constant, data_word) in ROUND_CONSTANTS.iter().zip(schedule.iter()) {
            let temp1 = round_state
                .h
                .wrapping_add(big_sigma1(round_state.e))
                .wrapping_add(choose(round_state.e, round_state.f, round_state.g))
                .wrapping_add(*constant)
                .wrapping_add(*data_word);
            let temp2 = big_sigma0(round_state.a).wrapping_add(majority(round_state.a, round_state.b, round_state.c));

            round_state.h = round_state.g;
            round_state.g = round_state.f;
            round_state.f = round_state.e;
            round_state.e = round_state.d.wrapping_add(temp1);
            round_state.d = round_state.c;
            round_state.c = round_state.b;
            round_state.b = round_state.a;
            round_state.a = temp1.wrapping_add(temp2);
        }

        self.a = self.a.wrapping_add(round_state.a);
        self.b = self.b.wrapping_add(round_state.b);
        self.c = self.c.wrapping_add(round_state.c);
        self.d = self.d.wrapping_add(round_state.d);
        self.e = self.e.wrapping_add(round_state.e);
        self.f = self.f.wrapping_add(round_state.f);
        self.g = self.g.wrapping_add(round_state.g);
        self.h = self.h.wrapping_add(round_state.h);
    }
}

impl HashFunction for SHA256Hash {
    const NAME: &'static str = "SHA-256";

    const BLOCK_SIZE: usize = BLOCK_LENGTH_BYTES;

    const OUTPUT_SIZE: usize = 32;

    type Digest = [u8; 32];

    fn digest_message(input: &[u8]) -> Self {
        merkle_damgard::digest(input)
    }

    /// Generates a raw `[u8; 32]` array from the current hash state. Each word is written big endian.
    fn raw(&self) -> Self::Digest {
        let mut raw = [0u8; 32];
        store_u32a_be(
            &mut raw,
            &[self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h],
        );
        raw
    }
}
