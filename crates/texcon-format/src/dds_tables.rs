//! DDS translation tables: FourCC → format, DXGI → (format, srgb), and the
//! uncompressed bitmask table.
//!
//! Grounded in `original_source/stc-parse.h`'s `k__translate_dds_fourcc`,
//! `k__translate_dxgi`, and `k__translate_dds_pixel` arrays. Lookups are
//! linear scans — table sizes are tens of rows, not worth indexing.

use crate::fourcc::{DdsPixelFormatFlags, FourCC};
use crate::format::Format;

/// One row of the FourCC → canonical-format table.
pub struct FourCcEntry {
    pub fourcc: FourCC,
    pub format: Format,
}

/// `k__translate_dds_fourcc`. A handful of rows key on a raw pixel-format
/// flag combination rather than a real four-character tag (e.g. the
/// `RGB|ALPHAPIXELS` row) — that mirrors the original table exactly, even
/// though such a "fourcc" value only matches a header whose `fourcc` field
/// happens to equal that flag bit pattern, which practically never occurs
/// for files that set `DDPF_FOURCC`. Kept for bit-exact parity with the
/// source. The two literal duplicate rows for `A16B16G16R16`/
/// `A16B16G16R16F` in the original are *not* repeated here — a linear scan
/// only ever uses the first match, so the duplicate carried no behavior.
pub const DDS_FOURCC_TABLE: &[FourCcEntry] = &[
    FourCcEntry { fourcc: FourCC::DXT1, format: Format::Bc1 },
    FourCcEntry { fourcc: FourCC::DXT2, format: Format::Bc2 },
    FourCcEntry { fourcc: FourCC::DXT3, format: Format::Bc2 },
    FourCcEntry { fourcc: FourCC::DXT4, format: Format::Bc3 },
    FourCcEntry { fourcc: FourCC::DXT5, format: Format::Bc3 },
    FourCcEntry { fourcc: FourCC::ATI1, format: Format::Bc4 },
    FourCcEntry { fourcc: FourCC::BC4U, format: Format::Bc4 },
    FourCcEntry { fourcc: FourCC::ATI2, format: Format::Bc5 },
    FourCcEntry { fourcc: FourCC::BC5U, format: Format::Bc5 },
    FourCcEntry { fourcc: FourCC::ETC1, format: Format::Etc1 },
    FourCcEntry { fourcc: FourCC::ETC2, format: Format::Etc2 },
    FourCcEntry { fourcc: FourCC::ET2A, format: Format::Etc2A },
    FourCcEntry { fourcc: FourCC::PTC2, format: Format::Ptc12A },
    FourCcEntry { fourcc: FourCC::PTC4, format: Format::Ptc14A },
    FourCcEntry { fourcc: FourCC::ATC, format: Format::Atc },
    FourCcEntry { fourcc: FourCC::ATCE, format: Format::AtcE },
    FourCcEntry { fourcc: FourCC::ATCI, format: Format::AtcI },
    FourCcEntry { fourcc: FourCC::ASTC4X4, format: Format::Astc4X4 },
    FourCcEntry { fourcc: FourCC::ASTC5X5, format: Format::Astc5X5 },
    FourCcEntry { fourcc: FourCC::ASTC6X6, format: Format::Astc6X6 },
    FourCcEntry { fourcc: FourCC::ASTC8X5, format: Format::Astc8X5 },
    FourCcEntry { fourcc: FourCC::ASTC8X6, format: Format::Astc8X6 },
    FourCcEntry { fourcc: FourCC::ASTC10X5, format: Format::Astc10X5 },
    FourCcEntry { fourcc: FourCC(36u32.to_le_bytes()), format: Format::Rgba16 }, // D3DFMT_A16B16G16R16
    FourCcEntry { fourcc: FourCC(113u32.to_le_bytes()), format: Format::Rgba16F }, // D3DFMT_A16B16G16R16F
    FourCcEntry {
        fourcc: FourCC((DdsPixelFormatFlags::RGB | DdsPixelFormatFlags::ALPHAPIXELS).to_le_bytes()),
        format: Format::Bgra8,
    },
    FourCcEntry { fourcc: FourCC(DdsPixelFormatFlags::INDEXED.to_le_bytes()), format: Format::R8 },
    FourCcEntry { fourcc: FourCC(DdsPixelFormatFlags::LUMINANCE.to_le_bytes()), format: Format::R8 },
    FourCcEntry { fourcc: FourCC(DdsPixelFormatFlags::ALPHA.to_le_bytes()), format: Format::R8 },
    FourCcEntry { fourcc: FourCC(111u32.to_le_bytes()), format: Format::R16F },
    FourCcEntry { fourcc: FourCC(114u32.to_le_bytes()), format: Format::R32F },
    FourCcEntry { fourcc: FourCC(51u32.to_le_bytes()), format: Format::Rg8 }, // D3DFMT_A8L8
    FourCcEntry { fourcc: FourCC(34u32.to_le_bytes()), format: Format::Rg16 }, // D3DFMT_G16R16
    FourCcEntry { fourcc: FourCC(112u32.to_le_bytes()), format: Format::Rg16F }, // D3DFMT_G16R16F
    FourCcEntry { fourcc: FourCC(20u32.to_le_bytes()), format: Format::Rgb8 }, // D3DFMT_R8G8B8
    FourCcEntry { fourcc: FourCC(21u32.to_le_bytes()), format: Format::Bgra8 }, // D3DFMT_A8R8G8B8
    FourCcEntry { fourcc: FourCC(31u32.to_le_bytes()), format: Format::Rgb10A2 }, // D3DFMT_A2B10G10R10
];

/// One row of the DXGI → (canonical format, sRGB) table.
pub struct DxgiEntry {
    pub dxgi_format: u32,
    pub format: Format,
    pub srgb: bool,
}

/// `k__translate_dxgi`. Only DXGI format codes this parser resolves are
/// listed (not the full DXGI enum — unresolved codes fall through to
/// `Format::Count`, the documented failure sentinel).
pub const DXGI_TABLE: &[DxgiEntry] = &[
    DxgiEntry { dxgi_format: 71, format: Format::Bc1, srgb: false }, // BC1_UNORM
    DxgiEntry { dxgi_format: 72, format: Format::Bc1, srgb: true },  // BC1_UNORM_SRGB
    DxgiEntry { dxgi_format: 74, format: Format::Bc2, srgb: false }, // BC2_UNORM
    DxgiEntry { dxgi_format: 75, format: Format::Bc2, srgb: true },  // BC2_UNORM_SRGB
    DxgiEntry { dxgi_format: 77, format: Format::Bc3, srgb: false }, // BC3_UNORM
    DxgiEntry { dxgi_format: 78, format: Format::Bc3, srgb: true },  // BC3_UNORM_SRGB
    DxgiEntry { dxgi_format: 80, format: Format::Bc4, srgb: false }, // BC4_UNORM
    DxgiEntry { dxgi_format: 83, format: Format::Bc5, srgb: false }, // BC5_UNORM
    DxgiEntry { dxgi_format: 96, format: Format::Bc6H, srgb: false }, // BC6H_SF16
    DxgiEntry { dxgi_format: 98, format: Format::Bc7, srgb: false }, // BC7_UNORM
    DxgiEntry { dxgi_format: 99, format: Format::Bc7, srgb: true },  // BC7_UNORM_SRGB
    DxgiEntry { dxgi_format: 61, format: Format::R8, srgb: false },  // R8_UNORM
    DxgiEntry { dxgi_format: 56, format: Format::R16, srgb: false }, // R16_UNORM
    DxgiEntry { dxgi_format: 54, format: Format::R16F, srgb: false }, // R16_FLOAT
    DxgiEntry { dxgi_format: 41, format: Format::R32F, srgb: false }, // R32_FLOAT
    DxgiEntry { dxgi_format: 49, format: Format::Rg8, srgb: false }, // R8G8_UNORM
    DxgiEntry { dxgi_format: 35, format: Format::Rg16, srgb: false }, // R16G16_UNORM
    DxgiEntry { dxgi_format: 34, format: Format::Rg16F, srgb: false }, // R16G16_FLOAT
    DxgiEntry { dxgi_format: 87, format: Format::Bgra8, srgb: false }, // B8G8R8A8_UNORM
    DxgiEntry { dxgi_format: 91, format: Format::Bgra8, srgb: true }, // B8G8R8A8_UNORM_SRGB
    DxgiEntry { dxgi_format: 28, format: Format::Rgba8, srgb: false }, // R8G8B8A8_UNORM
    DxgiEntry { dxgi_format: 29, format: Format::Rgba8, srgb: true }, // R8G8B8A8_UNORM_SRGB
    DxgiEntry { dxgi_format: 11, format: Format::Rgba16, srgb: false }, // R16G16B16A16_UNORM
    DxgiEntry { dxgi_format: 10, format: Format::Rgba16F, srgb: false }, // R16G16B16A16_FLOAT
    DxgiEntry { dxgi_format: 24, format: Format::Rgb10A2, srgb: false }, // R10G10B10A2_UNORM
    DxgiEntry { dxgi_format: 26, format: Format::Rg11B10F, srgb: false }, // R11G11B10_FLOAT
];

/// One row of the uncompressed-bitmask table.
pub struct BitmaskEntry {
    pub bit_count: u32,
    pub flags: u32,
    pub bit_mask: [u32; 4],
    pub format: Format,
}

/// `k__translate_dds_pixel`. Matched by tuple equality on
/// `(bit_count, flags, bit_mask)`. Two rows both resolve to
/// `Format::Rgb8` for 24-bit RGB, differing only in channel byte order
/// (BGR vs RGB) — that is intentional: the source accepts either byte
/// order and emits one canonical tag.
pub const BITMASK_TABLE: &[BitmaskEntry] = &[
    BitmaskEntry {
        bit_count: 8,
        flags: DdsPixelFormatFlags::LUMINANCE,
        bit_mask: [0x0000_00ff, 0x0000_0000, 0x0000_0000, 0x0000_0000],
        format: Format::R8,
    },
    BitmaskEntry {
        bit_count: 16,
        flags: DdsPixelFormatFlags::BUMPDUDV,
        bit_mask: [0x0000_00ff, 0x0000_ff00, 0x0000_0000, 0x0000_0000],
        format: Format::Rg8S,
    },
    BitmaskEntry {
        bit_count: 24,
        flags: DdsPixelFormatFlags::RGB,
        bit_mask: [0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0x0000_0000],
        format: Format::Rgb8,
    },
    BitmaskEntry {
        bit_count: 24,
        flags: DdsPixelFormatFlags::RGB,
        bit_mask: [0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0x0000_0000],
        format: Format::Rgb8,
    },
    BitmaskEntry {
        bit_count: 32,
        flags: DdsPixelFormatFlags::RGB,
        bit_mask: [0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0x0000_0000],
        format: Format::Bgra8,
    },
    BitmaskEntry {
        bit_count: 32,
        flags: DdsPixelFormatFlags::RGB | DdsPixelFormatFlags::ALPHAPIXELS,
        bit_mask: [0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0xff00_0000],
        format: Format::Rgba8,
    },
    BitmaskEntry {
        bit_count: 32,
        flags: DdsPixelFormatFlags::BUMPDUDV,
        bit_mask: [0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0xff00_0000],
        format: Format::Rgba8S,
    },
    BitmaskEntry {
        bit_count: 32,
        flags: DdsPixelFormatFlags::RGB,
        bit_mask: [0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0xff00_0000],
        format: Format::Bgra8,
    },
    BitmaskEntry {
        bit_count: 32,
        flags: DdsPixelFormatFlags::RGB | DdsPixelFormatFlags::ALPHAPIXELS,
        bit_mask: [0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0xff00_0000],
        format: Format::Bgra8, // D3DFMT_A8R8G8B8
    },
    BitmaskEntry {
        bit_count: 32,
        flags: DdsPixelFormatFlags::RGB | DdsPixelFormatFlags::ALPHAPIXELS,
        bit_mask: [0x00ff_0000, 0x0000_ff00, 0x0000_00ff, 0x0000_0000],
        format: Format::Bgra8, // D3DFMT_X8R8G8B8
    },
    BitmaskEntry {
        bit_count: 32,
        flags: DdsPixelFormatFlags::RGB | DdsPixelFormatFlags::ALPHAPIXELS,
        bit_mask: [0x0000_03ff, 0x000f_fc00, 0x3ff0_0000, 0xc000_0000],
        format: Format::Rgb10A2,
    },
    BitmaskEntry {
        bit_count: 32,
        flags: DdsPixelFormatFlags::RGB,
        bit_mask: [0x0000_ffff, 0xffff_0000, 0x0000_0000, 0x0000_0000],
        format: Format::Rg16,
    },
    BitmaskEntry {
        bit_count: 32,
        flags: DdsPixelFormatFlags::BUMPDUDV,
        bit_mask: [0x0000_ffff, 0xffff_0000, 0x0000_0000, 0x0000_0000],
        format: Format::Rg16S,
    },
];

/// Resolve a DDS pixel-format FourCC tag to a canonical format.
///
/// Returns `Format::Count` if the tag is not recognized.
pub fn resolve_dds_fourcc(fourcc: FourCC) -> Format {
    DDS_FOURCC_TABLE
        .iter()
        .find(|row| row.fourcc == fourcc)
        .map(|row| row.format)
        .unwrap_or(Format::Count)
}

/// Resolve a DXGI format code to a canonical format and its sRGB flag.
///
/// Returns `(Format::Count, false)` if the code is not recognized.
pub fn resolve_dxgi(dxgi_format: u32) -> (Format, bool) {
    DXGI_TABLE
        .iter()
        .find(|row| row.dxgi_format == dxgi_format)
        .map(|row| (row.format, row.srgb))
        .unwrap_or((Format::Count, false))
}

/// Resolve an uncompressed DDS pixel format by `(bit_count, flags, bit_mask)`.
///
/// Returns `Format::Count` if no row matches exactly.
pub fn resolve_dds_bitmask(bit_count: u32, flags: u32, bit_mask: [u32; 4]) -> Format {
    BITMASK_TABLE
        .iter()
        .find(|row| row.bit_count == bit_count && row.flags == flags && row.bit_mask == bit_mask)
        .map(|row| row.format)
        .unwrap_or(Format::Count)
}
