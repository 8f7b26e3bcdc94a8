//! Word-array primitives
//!
//! Carry-free addition, bit spreading for squaring, and the multi-word shifts
//! the comb multiplier and reduction are built from.

use super::constants::{WideWords, Words, EXT_WORDS, FIELD_WORDS};

/// z = x + y (word-wise XOR)
#[inline(always)]
pub fn add(x: &Words, y: &Words) -> Words {
    let mut z = [0u64; FIELD_WORDS];
    for i in 0..FIELD_WORDS {
        z[i] = x[i] ^ y[i];
    }
    z
}

/// z = x + 1
#[inline(always)]
pub fn add_one(x: &Words) -> Words {
    let mut z = *x;
    z[0] ^= 1;
    z
}

/// zz = xx + yy over the full double width
#[inline(always)]
pub fn add_ext(xx: &WideWords, yy: &WideWords) -> WideWords {
    let mut zz = [0u64; EXT_WORDS];
    for i in 0..EXT_WORDS {
        zz[i] = xx[i] ^ yy[i];
    }
    zz
}

/// zz[..9] ^= x ^ y
///
/// `zz` is a window into a wider accumulator and must hold at least
/// `FIELD_WORDS` words.
#[inline(always)]
pub(crate) fn add_both_to(x: &Words, y: &Words, zz: &mut [u64]) {
    for i in 0..FIELD_WORDS {
        zz[i] ^= x[i] ^ y[i];
    }
}

#[inline(always)]
fn bit_permute_step(x: u64, m: u64, s: u32) -> u64 {
    let t = (x ^ (x >> s)) & m;
    (t ^ (t << s)) ^ x
}

/// Spread the bits of `x` so that bit i lands on bit 2i of a 128-bit value.
///
/// Returns `(low, high)`: the expansions of the low and high 32-bit halves.
/// All odd-position bits of the result are zero.
#[inline(always)]
pub fn expand64_to_128(x: u64) -> (u64, u64) {
    // Shuffle: low half to even positions, high half to odd positions.
    let mut x = bit_permute_step(x, 0x0000_0000_FFFF_0000, 16);
    x = bit_permute_step(x, 0x0000_FF00_0000_FF00, 8);
    x = bit_permute_step(x, 0x00F0_00F0_00F0_00F0, 4);
    x = bit_permute_step(x, 0x0C0C_0C0C_0C0C_0C0C, 2);
    x = bit_permute_step(x, 0x2222_2222_2222_2222, 1);

    const EVEN: u64 = 0x5555_5555_5555_5555;
    (x & EVEN, (x >> 1) & EVEN)
}

/// Shift `z` left by `n` bits in place (0 <= n < 64).
///
/// The top `n` bits of `carry_in` enter at the bottom. Returns the bits
/// shifted out of the top word, right-aligned.
#[inline(always)]
pub fn shift_up_bits(z: &mut [u64], n: u32, carry_in: u64) -> u64 {
    debug_assert!(n < 64);
    if n == 0 {
        return 0;
    }
    let mut c = carry_in;
    for w in z.iter_mut() {
        let next = *w;
        *w = (next << n) | (c >> (64 - n));
        c = next;
    }
    c >> (64 - n)
}

/// Shift `z` left by one bit in place; bit 63 of `carry_in` enters at the
/// bottom. Returns the bit shifted out of the top word.
#[inline(always)]
pub fn shift_up_bit(z: &mut [u64], carry_in: u64) -> u64 {
    let mut c = carry_in;
    for w in z.iter_mut() {
        let next = *w;
        *w = (next << 1) | (c >> 63);
        c = next;
    }
    c >> 63
}
