//! DDS FourCC codes and pixel-format bitmask flags.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// A four-character code, as embedded in a DDS pixel-format sub-header.
#[derive(Clone, Copy, PartialEq, Eq, Default, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    pub const fn new(tag: &[u8; 4]) -> Self {
        Self(*tag)
    }

    pub const DXT1: Self = Self::new(b"DXT1");
    pub const DXT2: Self = Self::new(b"DXT2");
    pub const DXT3: Self = Self::new(b"DXT3");
    pub const DXT4: Self = Self::new(b"DXT4");
    pub const DXT5: Self = Self::new(b"DXT5");
    pub const ATI1: Self = Self::new(b"ATI1");
    pub const BC4U: Self = Self::new(b"BC4U");
    pub const ATI2: Self = Self::new(b"ATI2");
    pub const BC5U: Self = Self::new(b"BC5U");
    pub const DX10: Self = Self::new(b"DX10");
    pub const ETC1: Self = Self::new(b"ETC1");
    pub const ETC2: Self = Self::new(b"ETC2");
    pub const ET2A: Self = Self::new(b"ET2A");
    pub const PTC2: Self = Self::new(b"PTC2");
    pub const PTC4: Self = Self::new(b"PTC4");
    pub const ATC: Self = Self::new(b"ATC ");
    pub const ATCE: Self = Self::new(b"ATCE");
    pub const ATCI: Self = Self::new(b"ATCI");
    pub const ASTC4X4: Self = Self::new(b"AS44");
    pub const ASTC5X5: Self = Self::new(b"AS55");
    pub const ASTC6X6: Self = Self::new(b"AS66");
    pub const ASTC8X5: Self = Self::new(b"AS85");
    pub const ASTC8X6: Self = Self::new(b"AS86");
    pub const ASTC10X5: Self = Self::new(b"AS:5");
}

impl std::fmt::Debug for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.iter().all(|&b| b.is_ascii_graphic() || b == b' ') {
            write!(f, "\"{}\"", String::from_utf8_lossy(&self.0))
        } else {
            write!(f, "{:?}", self.0)
        }
    }
}

/// DDS pixel-format flag bits (`DDPF_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsPixelFormatFlags(pub u32);

impl DdsPixelFormatFlags {
    pub const ALPHAPIXELS: u32 = 0x0000_0001;
    pub const ALPHA: u32 = 0x0000_0002;
    pub const FOURCC: u32 = 0x0000_0004;
    pub const INDEXED: u32 = 0x0000_0020;
    pub const RGB: u32 = 0x0000_0040;
    pub const YUV: u32 = 0x0000_0200;
    pub const LUMINANCE: u32 = 0x0002_0000;
    pub const BUMPDUDV: u32 = 0x0008_0000;

    #[inline]
    pub fn contains(self, bits: u32) -> bool {
        self.0 & bits == bits
    }
}
