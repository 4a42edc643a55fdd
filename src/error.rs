//! Error types for sift

use thiserror::Error;

/// Result type alias using sift's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sift algorithms
#[derive(Error, Debug)]
pub enum Error {
    /// A secondary sequence is shorter than the primary one
    #[error("Length mismatch for '{arg}': expected at least {expected} elements, got {got}")]
    LengthMismatch {
        /// The argument name
        arg: &'static str,
        /// Minimum required length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Output storage cannot hold every retained element
    #[error("Output too small: {required} elements required, {available} available")]
    OutputTooSmall {
        /// Number of elements that would be written
        required: usize,
        /// Length of the output storage
        available: usize,
    },

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Algorithm not provided by this system
    #[error("Not implemented: {feature}")]
    NotImplemented {
        /// Description of the unimplemented feature
        feature: &'static str,
    },
}

impl Error {
    /// Create a length mismatch error
    pub fn length_mismatch(arg: &'static str, expected: usize, got: usize) -> Self {
        Self::LengthMismatch { arg, expected, got }
    }

    /// Create an output-too-small error
    pub fn output_too_small(required: usize, available: usize) -> Self {
        Self::OutputTooSmall {
            required,
            available,
        }
    }
}
