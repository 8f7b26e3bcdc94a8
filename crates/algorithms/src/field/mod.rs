//! Binary field primitives
//!
//! Elements of GF(2^m) are polynomials over GF(2) of degree < m, stored as
//! little-endian arrays of 64-bit words. Addition is XOR; multiplication is
//! carry-less polynomial multiplication followed by reduction modulo the
//! field's pentanomial.

pub mod sect571;
