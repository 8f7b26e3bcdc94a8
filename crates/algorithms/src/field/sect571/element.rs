//! sect571 field element

use byteorder::{BigEndian, ByteOrder};
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

use super::constants::{
    Words, FIELD_DEGREE, FIELD_WORDS, SECT571_FIELD_ELEMENT_SIZE_BYTES, TOP_BYTE_MASK, TOP_MASK,
};
use super::extended::ExtendedElement;
use super::{multiply, reduce, square, words};
use crate::error::{validate, Result};

/// An element of GF(2^571).
///
/// Stored as 9 little-endian 64-bit words; bit i is the coefficient of xⁱ.
/// Every value handed out by this type is canonical: bits 571..575 of the
/// top word are zero.
#[derive(Clone, Copy, Debug, Default, Zeroize)]
pub struct FieldElement(pub(crate) Words);

impl FieldElement {
    /// The additive identity element: 0
    #[inline]
    pub fn zero() -> Self {
        FieldElement([0u64; FIELD_WORDS])
    }

    /// The multiplicative identity element: 1
    #[inline]
    pub fn one() -> Self {
        let mut words = [0u64; FIELD_WORDS];
        words[0] = 1;
        FieldElement(words)
    }

    /// Build an element from exactly nine little-endian words.
    ///
    /// Bits 571..575 of the top word are folded back modulo the field
    /// polynomial, so any 576-bit pattern is accepted.
    pub fn from_words(words: &[u64]) -> Result<Self> {
        validate::length("sect571 field element words", words.len(), FIELD_WORDS)?;
        let mut z = [0u64; FIELD_WORDS];
        z.copy_from_slice(words);
        reduce::reduce_top(&mut z);
        Ok(FieldElement(z))
    }

    /// Little-endian word representation
    #[inline]
    pub fn words(&self) -> &Words {
        &self.0
    }

    /// Create a field element from its big-endian byte representation.
    ///
    /// Returns an error if any bit at position 571 or above is set.
    pub fn from_bytes(bytes: &[u8; SECT571_FIELD_ELEMENT_SIZE_BYTES]) -> Result<Self> {
        validate::parameter(
            bytes[0] & !TOP_BYTE_MASK == 0,
            "sect571 field element bytes",
            "encoding exceeds 571 bits",
        )?;
        let mut z = [0u64; FIELD_WORDS];
        for (i, chunk) in bytes.rchunks_exact(8).enumerate() {
            z[i] = BigEndian::read_u64(chunk);
        }
        Ok(FieldElement(z))
    }

    /// Convert field element to big-endian byte representation
    pub fn to_bytes(&self) -> [u8; SECT571_FIELD_ELEMENT_SIZE_BYTES] {
        let mut out = [0u8; SECT571_FIELD_ELEMENT_SIZE_BYTES];
        for (i, chunk) in out.rchunks_exact_mut(8).enumerate() {
            BigEndian::write_u64(chunk, self.0[i]);
        }
        out
    }

    /// Convert a non-negative integer below 2^571.
    ///
    /// Bit i of the integer becomes the coefficient of xⁱ.
    #[cfg(feature = "bigint")]
    pub fn from_integer(value: &num_bigint::BigUint) -> Result<Self> {
        validate::max_bits("sect571 field element integer", value.bits(), FIELD_DEGREE as u64)?;
        let mut z = [0u64; FIELD_WORDS];
        for (i, digit) in value.to_u64_digits().into_iter().enumerate() {
            z[i] = digit;
        }
        Ok(FieldElement(z))
    }

    /// The integer whose bit i is the coefficient of xⁱ
    #[cfg(feature = "bigint")]
    pub fn to_integer(&self) -> num_bigint::BigUint {
        num_bigint::BigUint::from_bytes_be(&self.to_bytes())
    }

    /// Uniformly random element
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut z = [0u64; FIELD_WORDS];
        for w in z.iter_mut() {
            *w = rng.next_u64();
        }
        z[FIELD_WORDS - 1] &= TOP_MASK;
        FieldElement(z)
    }

    /// Check if the field element represents zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::zero()).into()
    }

    /// Check if the field element represents one
    #[inline]
    pub fn is_one(&self) -> bool {
        self.ct_eq(&Self::one()).into()
    }

    /// Field addition: XOR of coefficients. Every element is its own negative.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        FieldElement(words::add(&self.0, &other.0))
    }

    /// Add the constant 1
    #[inline]
    pub fn add_one(&self) -> Self {
        FieldElement(words::add_one(&self.0))
    }

    /// Field multiplication
    pub fn mul(&self, other: &Self) -> Self {
        FieldElement(multiply::multiply(&self.0, &other.0))
    }

    /// Field multiplication through the table-free word-wise multiplier.
    ///
    /// Always equal to [`FieldElement::mul`].
    pub fn mul_wordwise(&self, other: &Self) -> Self {
        FieldElement(multiply::multiply_wordwise(&self.0, &other.0))
    }

    /// Field squaring
    pub fn square(&self) -> Self {
        FieldElement(square::square(&self.0))
    }

    /// Square `n` times: self^(2^n). `n == 0` returns `self`.
    pub fn square_n(&self, n: usize) -> Self {
        FieldElement(square::square_n(&self.0, n))
    }

    /// The unique square root.
    ///
    /// Squaring is an automorphism of order 571, so √a = a^(2^570).
    pub fn sqrt(&self) -> Self {
        self.square_n(FIELD_DEGREE - 1)
    }

    /// Unreduced product, for accumulating several products before one reduction
    pub fn mul_wide(&self, other: &Self) -> ExtendedElement {
        ExtendedElement(multiply::mul_wide(&self.0, &other.0))
    }

    /// Unreduced square
    pub fn square_wide(&self) -> ExtendedElement {
        ExtendedElement(square::square_wide(&self.0))
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; FIELD_WORDS];
        for i in 0..FIELD_WORDS {
            out[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(out)
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}
