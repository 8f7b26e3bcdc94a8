//! Test vectors and reference oracles for the binfield library
//!
//! The oracle works on arbitrary-precision integers read as GF(2)
//! polynomials and shares no code with the word-level engine.

pub mod vectors;
