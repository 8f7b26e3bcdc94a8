//! Squaring in GF(2^571)
//!
//! In characteristic 2 the cross terms of (Σ aᵢxⁱ)² cancel, leaving Σ aᵢx²ⁱ:
//! squaring only spreads each bit to twice its position. Each input word
//! expands independently into two output words.

use zeroize::Zeroize;

use super::constants::{WideWords, Words, EXT_WORDS, FIELD_WORDS};
use super::reduce::reduce;
use super::words::{add_ext, expand64_to_128};

/// Exact double-width square of `x`
#[inline]
pub fn square_wide(x: &Words) -> WideWords {
    let mut zz = [0u64; EXT_WORDS];
    for i in 0..FIELD_WORDS {
        let (lo, hi) = expand64_to_128(x[i]);
        zz[2 * i] = lo;
        zz[2 * i + 1] = hi;
    }
    zz
}

/// z = x² mod f
pub fn square(x: &Words) -> Words {
    let mut tt = square_wide(x);
    let z = reduce(&tt);
    tt.zeroize();
    z
}

/// zz += x² without reducing
pub fn square_add_to_ext(x: &Words, zz: &mut WideWords) {
    let mut tt = square_wide(x);
    *zz = add_ext(zz, &tt);
    tt.zeroize();
}

/// z = x^(2^n): `n` successive squarings, reusing one scratch buffer.
///
/// `n == 0` returns `x` unchanged.
pub fn square_n(x: &Words, n: usize) -> Words {
    let mut z = *x;
    let mut tt = [0u64; EXT_WORDS];
    for _ in 0..n {
        tt = square_wide(&z);
        z = reduce(&tt);
    }
    tt.zeroize();
    z
}
