//! Multiplication in GF(2^571)
//!
//! The main path is the Lopez-Dahab comb with 4-bit windows: all sixteen
//! combinations of {y, xy, x^2y, x^3y} are tabulated once per call, together
//! with a copy pre-shifted by four bits, so each byte of the multiplier costs
//! two table lookups and one accumulator shift.
//!
//! [`mul_wide_wordwise`] is a table-free alternative that builds the exact
//! polynomial product one multiplier word at a time.

use zeroize::Zeroize;

use super::constants::{WideWords, Words, EXT_WORDS, FIELD_WORDS};
use super::reduce::{reduce, reduce_top};
use super::words::{add, add_both_to, add_ext, shift_up_bit, shift_up_bits};

const COMB_BITS: u32 = 4;
const COMB_ENTRIES: usize = 1 << COMB_BITS;
const COMB_MASK: u64 = (COMB_ENTRIES - 1) as u64;

/// Comb tables for one multiplicand: `lo[u] = u(x)·y`, `hi[v] = x^4·v(x)·y`.
struct CombTables {
    lo: [Words; COMB_ENTRIES],
    hi: [Words; COMB_ENTRIES],
}

impl CombTables {
    fn new(y: &Words) -> Self {
        let mut lo = [[0u64; FIELD_WORDS]; COMB_ENTRIES];
        lo[1] = *y;
        for m in 1..COMB_ENTRIES / 2 {
            let mut doubled = lo[m];
            shift_up_bit(&mut doubled, 0);
            reduce_top(&mut doubled);
            lo[2 * m + 1] = add(&doubled, y);
            lo[2 * m] = doubled;
        }

        // Entries are below 2^571, so the four-bit shift cannot overflow.
        let mut hi = lo;
        for entry in hi.iter_mut() {
            shift_up_bits(entry, COMB_BITS, 0);
        }

        Self { lo, hi }
    }

    /// Add the products of one multiplier byte into `zz`
    #[inline(always)]
    fn add_byte_to(&self, byte: u64, zz: &mut [u64]) {
        let u = (byte & COMB_MASK) as usize;
        let v = ((byte >> COMB_BITS) & COMB_MASK) as usize;
        add_both_to(&self.lo[u], &self.hi[v], zz);
    }
}

impl Drop for CombTables {
    fn drop(&mut self) {
        self.lo.zeroize();
        self.hi.zeroize();
    }
}

/// Double-width product of `x` and `y`, congruent to x·y mod f.
///
/// Table entries are kept reduced, so the result is not the raw polynomial
/// product; it always fits in 18 words and reduces to `multiply(x, y)`.
pub fn mul_wide(x: &Words, y: &Words) -> WideWords {
    let tables = CombTables::new(y);
    let mut zz = [0u64; EXT_WORDS];

    // Odd words first. Eight byte steps shift the partial sum up one whole
    // word, moving offset j - 1 onto j before the even words join.
    for k in (0..64u32).step_by(8).rev() {
        for j in (1..FIELD_WORDS).step_by(2) {
            tables.add_byte_to(x[j] >> k, &mut zz[j - 1..]);
        }
        shift_up_bits(&mut zz[..EXT_WORDS - 2], 8, 0);
    }

    for k in (0..64u32).step_by(8).rev() {
        for j in (0..FIELD_WORDS).step_by(2) {
            tables.add_byte_to(x[j] >> k, &mut zz[j..]);
        }
        if k > 0 {
            shift_up_bits(&mut zz, 8, 0);
        }
    }

    zz
}

/// z = x·y mod f
pub fn multiply(x: &Words, y: &Words) -> Words {
    let mut tt = mul_wide(x, y);
    let z = reduce(&tt);
    tt.zeroize();
    z
}

/// zz += x·y without reducing
pub fn multiply_add_to_ext(x: &Words, y: &Words, zz: &mut WideWords) {
    let mut tt = mul_wide(x, y);
    *zz = add_ext(zz, &tt);
    tt.zeroize();
}

/// Window width of the word-wise multiplier
const WORD_WINDOW_BITS: u32 = 5;
const WORD_WINDOW_ENTRIES: usize = 1 << WORD_WINDOW_BITS;
const WORD_WINDOW_MASK: u64 = (WORD_WINDOW_ENTRIES - 1) as u64;

/// All ones except the bits at multiples of `width`
const fn clear_window_boundaries(width: u32) -> u64 {
    let mut mask = u64::MAX;
    let mut bit = 0;
    while bit < 64 {
        mask &= !(1u64 << bit);
        bit += width;
    }
    mask
}

/// All ones except bits 0, 5, ..., 60, the window boundaries of [`mul_word_acc`]
pub(crate) const WINDOW_CLEAR: u64 = clear_window_boundaries(WORD_WINDOW_BITS);

/// z[..10] ^= xs · y, where y is a single word.
///
/// Uses a table of all 5-bit multiples of `y`. The multiples lose up to
/// four high bits to the 64-bit word; those are restored from the top bits of
/// `y` afterwards.
fn mul_word_acc(xs: &Words, y: u64, z: &mut [u64]) {
    let mut u = [0u64; WORD_WINDOW_ENTRIES];
    u[1] = y;
    for i in (2..WORD_WINDOW_ENTRIES).step_by(2) {
        u[i] = u[i >> 1] << 1;
        u[i + 1] = u[i] ^ y;
    }

    let mut l = 0u64;
    for i in 0..FIELD_WORDS {
        let mut x = xs[i];

        l ^= u[(x & WORD_WINDOW_MASK) as usize];

        let mut h = 0u64;
        for k in (WORD_WINDOW_BITS..64).step_by(WORD_WINDOW_BITS as usize).rev() {
            let g = u[((x >> k) & WORD_WINDOW_MASK) as usize];
            l ^= g << k;
            h ^= g >> (64 - k);
        }

        // Restore the bits of (x·y) lost from the truncated table entries:
        // for every bit 63 - p of y that is set, add x·x^p's overflow.
        for p in 0..WORD_WINDOW_BITS - 1 {
            x = (x & WINDOW_CLEAR) >> 1;
            let mask = (((y << p) as i64) >> 63) as u64;
            h ^= x & mask;
        }

        z[i] ^= l;
        l = h;
    }
    z[FIELD_WORDS] ^= l;

    u.zeroize();
}

/// Exact polynomial product of `x` and `y`, built one word of `y` at a time.
///
/// No per-call comb table; reduces to the same value as [`mul_wide`].
pub fn mul_wide_wordwise(x: &Words, y: &Words) -> WideWords {
    let mut zz = [0u64; EXT_WORDS];
    for i in 0..FIELD_WORDS {
        mul_word_acc(x, y[i], &mut zz[i..]);
    }
    zz
}

/// z = x·y mod f using the word-wise multiplier
pub fn multiply_wordwise(x: &Words, y: &Words) -> Words {
    let mut tt = mul_wide_wordwise(x, y);
    let z = reduce(&tt);
    tt.zeroize();
    z
}
