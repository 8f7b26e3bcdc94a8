//! Validation utilities applied once at the public boundary

use alloc::format;

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        tracing::debug!(context, reason, "parameter rejected");
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        tracing::debug!(context, expected, actual, "length rejected");
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a value fits in `max` significant bits
#[inline(always)]
pub fn max_bits(context: &'static str, bits: u64, max: u64) -> Result<()> {
    if bits > max {
        tracing::debug!(context, bits, max, "value too wide");
        return Err(Error::param(
            context,
            format!("value has {} significant bits, at most {} allowed", bits, max),
        ));
    }
    Ok(())
}
