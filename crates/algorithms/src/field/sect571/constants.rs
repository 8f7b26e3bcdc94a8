//! Shared constants for sect571 field operations
//!
//! Everything here is derived from [`SECT571`]; see `binfield-params` for the
//! derivations.

use binfield_params::binary::{
    SECT571, SECT571_EXT_WORDS, SECT571_FIELD_ELEMENT_SIZE, SECT571_FIELD_WORDS,
};

/// Field degree (571)
pub const FIELD_DEGREE: usize = SECT571.degree;

/// Words per field element (9)
pub const FIELD_WORDS: usize = SECT571_FIELD_WORDS;

/// Words per unreduced double-width value (18)
pub const EXT_WORDS: usize = SECT571_EXT_WORDS;

/// Size of a sect571 field element in bytes (571 bits -> 72 bytes)
pub const SECT571_FIELD_ELEMENT_SIZE_BYTES: usize = SECT571_FIELD_ELEMENT_SIZE;

/// A single-width word array, little-endian word order
pub type Words = [u64; FIELD_WORDS];

/// A double-width word array holding an unreduced product
pub type WideWords = [u64; EXT_WORDS];

pub(crate) const TOP_BITS: u32 = SECT571.top_bits();
pub(crate) const TOP_MASK: u64 = SECT571.top_mask();
pub(crate) const TAIL_SHIFTS: [u32; 4] = SECT571.tail_shifts();
pub(crate) const FOLD_LEFT: [u32; 4] = SECT571.fold_left_shifts();
pub(crate) const FOLD_RIGHT: [u32; 4] = SECT571.fold_right_shifts();

/// Mask of bits a big-endian encoding may set in its leading byte
pub(crate) const TOP_BYTE_MASK: u8 = (1u8 << (FIELD_DEGREE % 8)) - 1;
