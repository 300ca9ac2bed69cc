//! The container descriptor: the parse result describing a texture's
//! logical shape and where its pixel payload lives in the source blob.

use texcon_format::Format;

/// Bits set on [`Descriptor::flags`].
pub struct TextureFlags;

impl TextureFlags {
    pub const CUBEMAP: u32 = 0x01;
    pub const SRGB: u32 = 0x02;
    pub const ALPHA: u32 = 0x04;
    pub const DDS: u32 = 0x08;
    pub const KTX: u32 = 0x10;
}

/// Describes the logical texture a container blob holds, and where its
/// pixel payload begins within that blob.
///
/// Invariants: exactly one of `DDS`/`KTX` is set in `flags`; `CUBEMAP` and
/// `depth > 1` never both hold; if `CUBEMAP` is set the payload lays out 6
/// faces; `bpp` equals `block_info(format).bpp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Descriptor {
    /// Byte offset, within the source blob, of the first pixel payload byte.
    pub data_offset: usize,
    /// Total payload size in bytes (sum over every layer/face/mip/slice).
    pub payload_size: usize,
    pub format: Format,
    pub flags: u32,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub num_layers: u32,
    pub num_mips: u32,
    pub bpp: u8,
    /// KTX metadata block offset; zero for DDS.
    pub metadata_offset: usize,
    /// KTX metadata block size; zero for DDS.
    pub metadata_size: usize,
}

impl Descriptor {
    #[inline]
    pub fn is_cubemap(&self) -> bool {
        self.flags & TextureFlags::CUBEMAP != 0
    }

    #[inline]
    pub fn is_srgb(&self) -> bool {
        self.flags & TextureFlags::SRGB != 0
    }

    #[inline]
    pub fn has_alpha(&self) -> bool {
        self.flags & TextureFlags::ALPHA != 0
    }

    #[inline]
    pub fn is_dds(&self) -> bool {
        self.flags & TextureFlags::DDS != 0
    }

    #[inline]
    pub fn is_ktx(&self) -> bool {
        self.flags & TextureFlags::KTX != 0
    }

    /// Number of cube faces addressed by the slice-or-face index.
    #[inline]
    pub fn num_faces(&self) -> u32 {
        if self.is_cubemap() {
            6
        } else {
            1
        }
    }

    #[inline]
    pub fn num_slices(&self) -> u32 {
        if self.is_cubemap() {
            1
        } else {
            self.depth
        }
    }
}
