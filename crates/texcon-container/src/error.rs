//! Error types for texcon-container.

use thiserror::Error;

/// Failure causes for [`crate::parse`], grouped by cause rather than by
/// source location.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// Blob shorter than a header, sub-header, or extension requires.
    #[error("truncated container: {0}")]
    Truncated(#[from] texcon_common::Error),

    /// The first bytes do not identify a supported container.
    #[error("unknown texture format")]
    UnknownSignature,

    /// A structural invariant of the header was violated (wrong stated
    /// size, missing required flag bits, incomplete cubemap face set).
    #[error("header inconsistency: {0}")]
    HeaderInconsistency(String),

    /// The container's pixel format does not appear in any translation
    /// table.
    #[error("unsupported pixel format")]
    UnsupportedFormat,

    /// KTX declared little-endian; byte-swapped KTX is not supported.
    #[error("unsupported KTX endianness (little-endian swap not supported)")]
    UnsupportedEndianness,
}

pub type Result<T> = std::result::Result<T, Error>;
