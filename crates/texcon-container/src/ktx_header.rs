//! KTX v1 header structure.
//!
//! The 12-byte file identifier is `AB 4B 54 58 20 31 31 BB 0D 0A 1A 0A`; the
//! dispatcher consumes only the first 4 bytes to choose DDS vs KTX, so this
//! header begins with the remaining 8 identifier bytes.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// The 60-byte KTX v1 header, read after the dispatcher's 4-byte magic peek.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct KtxHeader {
    /// Remaining 8 bytes of the 12-byte file identifier.
    pub identifier_tail: [u8; 8],
    pub endianness: u32,
    pub gl_type: u32,
    pub gl_type_size: u32,
    pub gl_format: u32,
    pub gl_internal_format: u32,
    pub gl_base_internal_format: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub number_of_array_elements: u32,
    pub number_of_faces: u32,
    pub number_of_mipmap_levels: u32,
    pub bytes_of_key_value_data: u32,
}

impl KtxHeader {
    pub const SIZE: usize = 60;

    /// Expected value of `endianness` for a big-endian-tagged (i.e. not
    /// byte-swapped) file. The reversed value indicates a little-endian
    /// file, which this parser does not support.
    pub const ENDIANNESS_REFERENCE: u32 = 0x0102_0304;

    /// Bytes 1 and 2 of the full 12-byte identifier must read `"11"`,
    /// identifying KTX version 1. They live at indices 1 and 2 of
    /// `identifier_tail` (index 0 here is identifier byte 4).
    pub fn is_version_1(&self) -> bool {
        self.identifier_tail[1] == b'1' && self.identifier_tail[2] == b'1'
    }
}
