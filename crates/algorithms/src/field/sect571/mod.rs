//! GF(2^571) arithmetic for the sect571 binary curves
//!
//! The field is GF(2)[x] / (x^571 + x^10 + x^5 + x^2 + 1), shared by
//! sect571k1 and sect571r1.
//!
//! Layers, leaves first:
//! - [`words`]: XOR addition, bit spreading, multi-word shifts.
//! - [`reduce`]: folding double-width values back to 571 bits.
//! - [`multiply`] and [`square`]: double-width products and their reductions.
//! - [`FieldElement`] / [`ExtendedElement`]: the value types used by curve code.
//!
//! All routines are pure functions of their inputs with fixed iteration
//! counts. Comb tables and scratch products live on the stack of the call
//! that builds them and are wiped before it returns.

mod constants;
mod element;
mod extended;
pub mod multiply;
pub mod reduce;
pub mod square;
pub mod words;

pub use constants::{
    WideWords, Words, EXT_WORDS, FIELD_DEGREE, FIELD_WORDS, SECT571_FIELD_ELEMENT_SIZE_BYTES,
};
pub use element::FieldElement;
pub use extended::ExtendedElement;
