//! Double-width accumulator for deferred reduction

use zeroize::Zeroize;

use super::constants::{WideWords, EXT_WORDS, FIELD_WORDS};
use super::element::FieldElement;
use super::{multiply, reduce, square, words};
use crate::error::{validate, Result};

/// An unreduced value of up to 1152 bits.
///
/// Curve formulas that add several products can sum them here and pay for a
/// single reduction at the end; the result is bit-identical to reducing each
/// product separately.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct ExtendedElement(pub(crate) WideWords);

impl ExtendedElement {
    /// The empty accumulator
    #[inline]
    pub fn zero() -> Self {
        ExtendedElement([0u64; EXT_WORDS])
    }

    /// Build from exactly eighteen little-endian words; any bit pattern is accepted
    pub fn from_words(words: &[u64]) -> Result<Self> {
        validate::length("sect571 extended element words", words.len(), EXT_WORDS)?;
        let mut zz = [0u64; EXT_WORDS];
        zz.copy_from_slice(words);
        Ok(ExtendedElement(zz))
    }

    /// Little-endian word representation
    #[inline]
    pub fn words(&self) -> &WideWords {
        &self.0
    }

    /// Check if every word is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().fold(0u64, |acc, &w| acc | w) == 0
    }

    /// Sum of two accumulators
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        ExtendedElement(words::add_ext(&self.0, &other.0))
    }

    /// self += x·y, unreduced
    pub fn multiply_add(&mut self, x: &FieldElement, y: &FieldElement) {
        multiply::multiply_add_to_ext(&x.0, &y.0, &mut self.0);
    }

    /// self += x², unreduced
    pub fn square_add(&mut self, x: &FieldElement) {
        square::square_add_to_ext(&x.0, &mut self.0);
    }

    /// Canonical field element congruent to this value
    pub fn reduce(&self) -> FieldElement {
        FieldElement(reduce::reduce(&self.0))
    }
}

impl From<FieldElement> for ExtendedElement {
    /// Embed a field element in the low half
    fn from(x: FieldElement) -> Self {
        let mut zz = [0u64; EXT_WORDS];
        zz[..FIELD_WORDS].copy_from_slice(&x.0);
        ExtendedElement(zz)
    }
}
