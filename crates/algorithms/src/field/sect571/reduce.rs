//! Reduction modulo x^571 + x^10 + x^5 + x^2 + 1
//!
//! A double-width value is folded back to 571 bits using
//! x^576 = x^5 · x^571 = x^15 + x^10 + x^7 + x^5 (mod f): word `i >= 9`
//! contributes `u << s` to word `i - 9` and `u >> (64 - s)` to word `i - 8`
//! for each fold shift `s`. A final single-word fold clears bits 571..575.

use super::constants::{
    WideWords, Words, FIELD_WORDS, FOLD_LEFT, FOLD_RIGHT, TAIL_SHIFTS, TOP_BITS, TOP_MASK,
};

/// Part of a folded word landing in the same-index destination word
#[inline(always)]
fn fold_low(u: u64) -> u64 {
    (u << FOLD_LEFT[0]) ^ (u << FOLD_LEFT[1]) ^ (u << FOLD_LEFT[2]) ^ (u << FOLD_LEFT[3])
}

/// Part of a folded word crossing into the next destination word
#[inline(always)]
fn fold_high(u: u64) -> u64 {
    (u >> FOLD_RIGHT[0]) ^ (u >> FOLD_RIGHT[1]) ^ (u >> FOLD_RIGHT[2]) ^ (u >> FOLD_RIGHT[3])
}

/// t · (x^10 + x^5 + x^2 + 1) for an overflow of at most five bits
#[inline(always)]
fn fold_tail(t: u64) -> u64 {
    (t << TAIL_SHIFTS[0]) ^ (t << TAIL_SHIFTS[1]) ^ (t << TAIL_SHIFTS[2]) ^ (t << TAIL_SHIFTS[3])
}

/// Reduce a double-width value to its canonical 571-bit representative.
///
/// Accepts any 18-word input, including sums of several products.
pub fn reduce(xx: &WideWords) -> Words {
    const N: usize = FIELD_WORDS;
    let mut z = [0u64; N];

    // The top word folds partly into word N, which has not been consumed yet.
    let mut u = xx[2 * N - 1];
    let mid = xx[N] ^ fold_high(u);
    let mut v = xx[N - 1] ^ fold_low(u);

    for i in (N + 1..2 * N - 1).rev() {
        u = xx[i];
        z[i - N + 1] = v ^ fold_high(u);
        v = xx[i - N] ^ fold_low(u);
    }

    u = mid;
    z[1] = v ^ fold_high(u);
    v = xx[0] ^ fold_low(u);

    let top = z[N - 1];
    let t = top >> TOP_BITS;
    z[0] = v ^ fold_tail(t);
    z[N - 1] = top & TOP_MASK;
    z
}

/// Fold bits 571..575 of the top word back into word 0, in place.
///
/// Used wherever a single-width value may exceed the degree by a few bits:
/// after a one-bit shift in the comb tables, or after loading raw words.
#[inline(always)]
pub fn reduce_top(z: &mut Words) {
    let top = z[FIELD_WORDS - 1];
    let t = top >> TOP_BITS;
    z[0] ^= fold_tail(t);
    z[FIELD_WORDS - 1] = top & TOP_MASK;
}
