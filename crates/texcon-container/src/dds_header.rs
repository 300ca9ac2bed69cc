//! DDS header structures.

use texcon_format::FourCC;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// DDS header flag bits.
pub struct DdsHeaderFlags;

impl DdsHeaderFlags {
    pub const CAPS: u32 = 0x0000_0001;
    pub const HEIGHT: u32 = 0x0000_0002;
    pub const WIDTH: u32 = 0x0000_0004;
    pub const PITCH: u32 = 0x0000_0008;
    pub const PIXELFORMAT: u32 = 0x0000_1000;
    pub const MIPMAPCOUNT: u32 = 0x0002_0000;
    pub const LINEARSIZE: u32 = 0x0008_0000;
    pub const DEPTH: u32 = 0x0080_0000;
}

/// DDS `caps` (surface capability) flag bits.
pub struct DdsCaps;

impl DdsCaps {
    pub const COMPLEX: u32 = 0x0000_0008;
    pub const MIPMAP: u32 = 0x0040_0000;
    pub const TEXTURE: u32 = 0x0000_1000;
}

/// DDS `caps2` (extended surface capability) flag bits.
pub struct DdsCaps2;

impl DdsCaps2 {
    pub const CUBEMAP: u32 = 0x0000_0200;
    pub const CUBEMAP_POSITIVEX: u32 = 0x0000_0400;
    pub const CUBEMAP_NEGATIVEX: u32 = 0x0000_0800;
    pub const CUBEMAP_POSITIVEY: u32 = 0x0000_1000;
    pub const CUBEMAP_NEGATIVEY: u32 = 0x0000_2000;
    pub const CUBEMAP_POSITIVEZ: u32 = 0x0000_4000;
    pub const CUBEMAP_NEGATIVEZ: u32 = 0x0000_8000;
    pub const VOLUME: u32 = 0x0020_0000;

    /// All six cubemap face bits, used to reject incomplete cubemaps.
    pub const CUBEMAP_ALL_FACES: u32 = Self::CUBEMAP_POSITIVEX
        | Self::CUBEMAP_NEGATIVEX
        | Self::CUBEMAP_POSITIVEY
        | Self::CUBEMAP_NEGATIVEY
        | Self::CUBEMAP_POSITIVEZ
        | Self::CUBEMAP_NEGATIVEZ;
}

/// The 124-byte DDS file header (following the 4-byte `"DDS "` magic).
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsHeader {
    pub size: u32,
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mip_count: u32,
    pub reserved1: [u32; 11],
    pub pixel_format: DdsPixelFormat,
    pub caps: u32,
    pub caps2: u32,
    pub caps3: u32,
    pub caps4: u32,
    pub reserved2: u32,
}

impl DdsHeader {
    pub const SIZE: u32 = 124;

    #[inline]
    pub fn is_dx10(&self) -> bool {
        let four_cc = self.pixel_format.four_cc;
        four_cc == FourCC::DX10
    }
}

/// The embedded 32-byte DDS pixel-format sub-header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsPixelFormat {
    pub size: u32,
    pub flags: u32,
    pub four_cc: FourCC,
    pub rgb_bit_count: u32,
    pub r_bit_mask: u32,
    pub g_bit_mask: u32,
    pub b_bit_mask: u32,
    pub a_bit_mask: u32,
}

impl DdsPixelFormat {
    pub const SIZE: u32 = 32;
}

/// The optional 20-byte DX10 extension header, present when the pixel
/// format's FourCC is `DX10`.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C, packed)]
pub struct DdsHeaderDxt10 {
    pub dxgi_format: u32,
    pub resource_dimension: u32,
    pub misc_flag: u32,
    pub array_size: u32,
    pub misc_flags2: u32,
}
