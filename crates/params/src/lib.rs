//! Constant values for binfield operations
//!
//! Field shapes are described once here and consumed by the arithmetic
//! crates as compile-time constants.

#![no_std]

pub mod binary;

pub use binary::{BinaryFieldParams, SECT571};
