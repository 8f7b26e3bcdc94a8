//! Binary-field arithmetic with constant-shape implementations
//!
//! This crate provides the field engines that binary elliptic curves are
//! built on. Every routine runs a fixed number of iterations determined by
//! the field degree alone, and temporary tables are wiped before returning.
//!
//! Currently implemented:
//!
//! - [`field::sect571`]: GF(2^571) modulo x^571 + x^10 + x^5 + x^2 + 1,
//!   the base field of sect571k1 and sect571r1.
//!
//! Without the `std` feature the crate is `no_std`; the arithmetic itself
//! never allocates, only the shared error type needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Binary field engines
pub mod field;
pub use field::sect571::{ExtendedElement, FieldElement};
