//! Error types for texcon-common.

use thiserror::Error;

/// Common error type for texcon binary reading.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// Invalid magic bytes encountered.
    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: Vec<u8>, actual: Vec<u8> },

    /// Value did not match expected.
    #[error("expected value {expected}, got {actual}")]
    ExpectedValue { expected: String, actual: String },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
