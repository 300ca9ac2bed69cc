//! DDS and KTXv1 container parsing and sub-image addressing.
//!
//! [`parse`] reads a complete in-memory blob and returns a [`Descriptor`]
//! describing the texture's shape and payload location. [`get_sub`] then
//! walks that payload to find any individual layer/face/mip/slice.

mod dds;
mod dds_header;
mod descriptor;
mod dispatch;
mod error;
mod ktx;
mod ktx_header;
mod locate;

pub use dds_header::{DdsCaps, DdsCaps2, DdsHeader, DdsHeaderDxt10, DdsHeaderFlags, DdsPixelFormat};
pub use descriptor::{Descriptor, TextureFlags};
pub use dispatch::parse;
pub use error::{Error, Result};
pub use ktx_header::KtxHeader;
pub use locate::{get_sub, SubImage};

#[cfg(test)]
mod tests;
