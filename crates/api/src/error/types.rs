//! Error type definitions for field arithmetic

use alloc::string::String;

/// Primary error type for binary-field operations.
///
/// Arithmetic itself is total; every variant here is raised by a constructor
/// rejecting input that does not describe a canonical field element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input had the wrong number of words or bytes
    InvalidLength {
        /// Where the length was checked
        context: &'static str,
        /// Required length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// Input value lies outside the field
    InvalidParameter {
        /// Where the value was rejected
        context: &'static str,
        /// Human-readable reason
        message: String,
    },
}

/// Result type for binary-field operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// The context recorded for this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidLength { context, .. } | Self::InvalidParameter { context, .. } => *context,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
        }
    }
}
