//! # binfield
//!
//! Constant-shape binary-field arithmetic for elliptic-curve cryptography.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! binfield = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `bigint` (default): Conversion to and from `num_bigint::BigUint`
//! - `full`: All features enabled, plus a re-export of `rand`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`binfield-api`]: Error type and validation helpers
//! - [`binfield-params`]: Field-defining constants
//! - [`binfield-algorithms`]: The field engines themselves

#![cfg_attr(not(feature = "std"), no_std)]

pub use binfield_algorithms as algorithms;
pub use binfield_api as api;
pub use binfield_params as params;

#[cfg(feature = "full")]
pub use rand;

/// Common imports for binfield users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::algorithms::field::sect571::{
        ExtendedElement, FieldElement, FIELD_DEGREE, SECT571_FIELD_ELEMENT_SIZE_BYTES,
    };
    pub use crate::params::{BinaryFieldParams, SECT571};

    pub use subtle::{ConditionallySelectable, ConstantTimeEq};
    pub use zeroize::Zeroize;
}
