//! Canonical pixel-format enumeration and cross-format translation tables.
//!
//! This crate owns the closed [`Format`] enumeration and the static lookup
//! tables that translate the format-naming schemes used by DDS (FourCC,
//! DXGI, and raw pixel bitmasks) and KTX (GL internal-format tokens) into
//! that one canonical vocabulary.

mod dds_tables;
mod format;
mod fourcc;
mod ktx_tables;

pub use dds_tables::{
    resolve_dds_bitmask, resolve_dds_fourcc, resolve_dxgi, BitmaskEntry, DxgiEntry, FourCcEntry,
    BITMASK_TABLE, DDS_FOURCC_TABLE, DXGI_TABLE,
};
pub use format::{
    block_info, format_info, format_is_compressed, format_name, BlockInfo, Encoding, Format, FormatInfo,
    BLOCK_INFO, FORMAT_INFO,
};
pub use fourcc::{DdsPixelFormatFlags, FourCC};
pub use ktx_tables::{resolve_ktx_internal_format, KtxFormatInfo, KtxFormatInfo2, KTX_FORMAT_TABLE, KTX_FORMAT_TABLE2};
