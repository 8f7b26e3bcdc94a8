//! Parameter sets for binary fields GF(2^m)
//!
//! A field is defined by its reduction pentanomial
//! f(x) = x^m + x^a + x^b + x^c + 1 with m > a > b > c > 0. Every shift
//! amount and mask used by the word-level reduction is derived from that
//! description, so the arithmetic never carries bare reduction literals.

/// Bits per machine word used by the field representation
pub const WORD_BITS: usize = 64;

/// Description of a binary field defined by a pentanomial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryFieldParams {
    /// Field degree m
    pub degree: usize,

    /// Middle exponents of the pentanomial, strictly descending
    pub exponents: [u32; 3],
}

impl BinaryFieldParams {
    /// Describe the field defined by x^degree + x^a + x^b + x^c + 1
    pub const fn pentanomial(degree: usize, exponents: [u32; 3]) -> Self {
        Self { degree, exponents }
    }

    /// Number of 64-bit words in a field element
    pub const fn words(&self) -> usize {
        (self.degree + WORD_BITS - 1) / WORD_BITS
    }

    /// Number of 64-bit words in an unreduced (double-width) value
    pub const fn ext_words(&self) -> usize {
        2 * self.words()
    }

    /// Length of the big-endian octet encoding
    pub const fn byte_len(&self) -> usize {
        (self.degree + 7) / 8
    }

    /// Significant bits held by the top word of a canonical element
    pub const fn top_bits(&self) -> u32 {
        (self.degree % WORD_BITS) as u32
    }

    /// Mask selecting the significant bits of the top word
    pub const fn top_mask(&self) -> u64 {
        (1u64 << self.top_bits()) - 1
    }

    /// Unused bits between the degree and the end of the top word
    pub const fn word_gap(&self) -> u32 {
        (self.words() * WORD_BITS - self.degree) as u32
    }

    /// Low exponents of the pentanomial in ascending order, constant term first.
    ///
    /// x^(m+j) folds to x^j shifted by each of these.
    pub const fn tail_shifts(&self) -> [u32; 4] {
        [0, self.exponents[2], self.exponents[1], self.exponents[0]]
    }

    /// Left shifts folding a whole word 64·words bits down.
    ///
    /// x^(64·words) = x^gap · x^m, so each tail exponent is offset by the gap.
    pub const fn fold_left_shifts(&self) -> [u32; 4] {
        let tail = self.tail_shifts();
        let gap = self.word_gap();
        let mut out = [0u32; 4];
        let mut i = 0;
        while i < 4 {
            out[i] = gap + tail[i];
            i += 1;
        }
        out
    }

    /// Right shifts carrying the part of a folded word that crosses into the next word
    pub const fn fold_right_shifts(&self) -> [u32; 4] {
        let left = self.fold_left_shifts();
        let mut out = [0u32; 4];
        let mut i = 0;
        while i < 4 {
            out[i] = WORD_BITS as u32 - left[i];
            i += 1;
        }
        out
    }

    /// Check the shape constraints the word-level reduction relies on
    pub const fn is_valid(&self) -> bool {
        let [a, b, c] = self.exponents;
        if self.degree == 0 || self.top_bits() == 0 {
            return false;
        }
        if (a as usize) >= self.degree || !(a > b && b > c && c > 0) {
            return false;
        }
        // A folded word must land within two adjacent words; the same bound
        // keeps the top-word overflow inside word 0.
        self.word_gap() + a < WORD_BITS as u32
    }
}

/// GF(2^571) with f(x) = x^571 + x^10 + x^5 + x^2 + 1 (sect571k1, sect571r1)
pub const SECT571: BinaryFieldParams = BinaryFieldParams::pentanomial(571, [10, 5, 2]);

const _: () = assert!(SECT571.is_valid());

/// Size of a sect571 field element in words
pub const SECT571_FIELD_WORDS: usize = SECT571.words();

/// Size of an unreduced sect571 product in words
pub const SECT571_EXT_WORDS: usize = SECT571.ext_words();

/// Size of a sect571 field element in bytes (571 bits -> 72 bytes)
pub const SECT571_FIELD_ELEMENT_SIZE: usize = SECT571.byte_len();
