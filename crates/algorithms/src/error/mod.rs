//! Error handling for field primitives
//!
//! The field crates share the API error type; this module re-exports it so
//! engine code can write `crate::error::Result` the same way everywhere.

pub use binfield_api::error::{validate, Error, Result};
