//! Public API types for the binfield library
//!
//! This crate provides the error surface shared by every binfield crate:
//! the [`Error`] enum, the [`Result`] alias and the boundary validation
//! helpers used by the field constructors. It builds without `std`; only an
//! allocator is required for the error messages.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
