//! texcon - DDS and KTXv1 GPU texture container parsing and sub-image
//! addressing.
//!
//! This crate provides a unified interface to the texcon library ecosystem.
//!
//! # Crates
//!
//! - [`texcon_common`] - shared binary reading and error types
//! - [`texcon_format`] - canonical pixel-format enumeration and translation tables
//! - [`texcon_container`] - DDS/KTXv1 header parsing and sub-image addressing
//!
//! # Example
//!
//! ```no_run
//! use texcon::prelude::*;
//!
//! let blob = std::fs::read("texture.dds")?;
//! let descriptor = parse(&blob)?;
//! let top_mip = get_sub(&descriptor, &blob, 0, 0, 0);
//! println!("{}x{} {}", top_mip.width, top_mip.height, format_name(descriptor.format));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use texcon_common as common;
pub use texcon_container as container;
pub use texcon_format as format;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use texcon_common::BinaryReader;
    pub use texcon_container::{get_sub, parse, Descriptor, Error, SubImage, TextureFlags};
    pub use texcon_format::{block_info, format_info, format_is_compressed, format_name, Format};
}

pub use texcon_container::{get_sub, parse, Descriptor, Error, SubImage, TextureFlags};
pub use texcon_format::{format_name, Format};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
