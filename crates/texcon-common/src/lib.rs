//! Common utilities for texcon.
//!
//! This crate provides foundational types shared by the format registry and
//! container parser crates:
//!
//! - [`BinaryReader`] - zero-copy binary reading from a borrowed byte slice
//! - [`Error`] - the shared diagnostic error type

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience.
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
