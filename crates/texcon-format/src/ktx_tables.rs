//! KTX internal-format translation tables.
//!
//! Grounded in `original_source/stc-parse.h`'s `k__translate_ktx_fmt` (an
//! index-aligned table, one row per [`Format`] variant up to and including
//! `Rg8S`) and `k__translate_ktx_fmt2` (a small fallback table for the
//! coarse, non-sized internal formats a handful of older KTX encoders emit).

use crate::format::Format;

/// One row of the primary by-index KTX internal-format table.
pub struct KtxFormatInfo {
    pub internal_fmt: u32,
    /// sRGB-variant internal format, or `0` if the format has none. Recorded
    /// for parity with `k__translate_ktx_fmt` but never scanned by
    /// [`resolve_ktx_internal_format`] — the original only matches
    /// `internal_fmt`, so an sRGB internal-format code resolves as
    /// unsupported rather than silently mapping to the non-sRGB format.
    pub internal_fmt_srgb: u32,
    pub format: Format,
}

macro_rules! ktx_row {
    ($internal:expr, $srgb:expr, $fmt:ident) => {
        KtxFormatInfo {
            internal_fmt: $internal,
            internal_fmt_srgb: $srgb,
            format: Format::$fmt,
        }
    };
}

/// `k__translate_ktx_fmt`, indexed by `Format as usize` for every variant up
/// to and including `Rg8S`. The `Compressed` sentinel row is unreachable
/// (`internal_fmt: 0`) — no real GL internal-format constant is zero.
pub const KTX_FORMAT_TABLE: &[KtxFormatInfo] = &[
    ktx_row!(0x83F1, 0x8C4D, Bc1),      // COMPRESSED_RGBA_S3TC_DXT1_EXT
    ktx_row!(0x83F2, 0x8C4E, Bc2),      // COMPRESSED_RGBA_S3TC_DXT3_EXT
    ktx_row!(0x83F3, 0x8C4F, Bc3),      // COMPRESSED_RGBA_S3TC_DXT5_EXT
    ktx_row!(0x8C70, 0, Bc4),           // COMPRESSED_LUMINANCE_LATC1_EXT
    ktx_row!(0x8C72, 0, Bc5),           // COMPRESSED_LUMINANCE_ALPHA_LATC2_EXT
    ktx_row!(0x8E8E, 0, Bc6H),          // COMPRESSED_RGB_BPTC_SIGNED_FLOAT_ARB
    ktx_row!(0x8E8C, 0, Bc7),           // COMPRESSED_RGBA_BPTC_UNORM_ARB
    ktx_row!(0x8D64, 0, Etc1),          // ETC1_RGB8_OES
    ktx_row!(0x9274, 0, Etc2),          // COMPRESSED_RGB8_ETC2
    ktx_row!(0x9278, 0x9275, Etc2A),    // COMPRESSED_RGBA8_ETC2_EAC / SRGB8_ETC2
    ktx_row!(0x9276, 0x9277, Etc2A1),   // COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2
    ktx_row!(0x8C01, 0x8A54, Ptc12),    // COMPRESSED_RGB_PVRTC_2BPPV1_IMG
    ktx_row!(0x8C00, 0x8A55, Ptc14),    // COMPRESSED_RGB_PVRTC_4BPPV1_IMG
    ktx_row!(0x8C02, 0x8A56, Ptc12A),   // COMPRESSED_RGBA_PVRTC_2BPPV1_IMG
    ktx_row!(0x8C03, 0x8A57, Ptc14A),   // COMPRESSED_RGBA_PVRTC_4BPPV1_IMG
    ktx_row!(0x9137, 0, Ptc22),         // COMPRESSED_RGBA_PVRTC_2BPPV2_IMG
    ktx_row!(0x9138, 0, Ptc24),         // COMPRESSED_RGBA_PVRTC_4BPPV2_IMG
    ktx_row!(0x8C92, 0, Atc),           // ATC_RGB_AMD
    ktx_row!(0x8C93, 0, AtcE),          // ATC_RGBA_EXPLICIT_ALPHA_AMD
    ktx_row!(0x87EE, 0, AtcI),          // ATC_RGBA_INTERPOLATED_ALPHA_AMD
    ktx_row!(0x93B0, 0x93D0, Astc4X4),  // COMPRESSED_RGBA_ASTC_4x4_KHR
    ktx_row!(0x93B2, 0x93D2, Astc5X5),  // COMPRESSED_RGBA_ASTC_5x5_KHR
    ktx_row!(0x93B4, 0x93D4, Astc6X6),  // COMPRESSED_RGBA_ASTC_6x6_KHR
    ktx_row!(0x93B5, 0x93D5, Astc8X5),  // COMPRESSED_RGBA_ASTC_8x5_KHR
    ktx_row!(0x93B6, 0x93D6, Astc8X6),  // COMPRESSED_RGBA_ASTC_8x6_KHR
    ktx_row!(0x93B8, 0x93D8, Astc10X5), // COMPRESSED_RGBA_ASTC_10x5_KHR
    ktx_row!(0, 0, Compressed),         // unreachable sentinel row
    ktx_row!(0x803C, 0, A8),            // ALPHA
    ktx_row!(0x8229, 0, R8),            // R8
    ktx_row!(0x8058, 0x8C43, Rgba8),    // RGBA8 / SRGB8_ALPHA8
    ktx_row!(0x8F97, 0, Rgba8S),        // RGBA8_SNORM
    ktx_row!(0x822C, 0, Rg16),          // RG16
    ktx_row!(0x8051, 0x8C41, Rgb8),     // RGB8 / SRGB8
    ktx_row!(0x822A, 0, R16),           // R16
    ktx_row!(0x822E, 0, R32F),          // R32F
    ktx_row!(0x822D, 0, R16F),          // R16F
    ktx_row!(0x822F, 0, Rg16F),         // RG16F
    ktx_row!(0x8F99, 0, Rg16S),         // RG16_SNORM
    ktx_row!(0x881A, 0, Rgba16F),       // RGBA16F
    ktx_row!(0x805B, 0, Rgba16),        // RGBA16
    ktx_row!(0x80E1, 0x8C43, Bgra8),    // BGRA / SRGB8_ALPHA8 (matches source: shares the RGBA8 sRGB code)
    ktx_row!(0x8059, 0, Rgb10A2),       // RGB10_A2
    ktx_row!(0x8C3A, 0, Rg11B10F),      // R11F_G11F_B10F
    ktx_row!(0x822B, 0, Rg8),           // RG8
    ktx_row!(0x8F95, 0, Rg8S),          // RG8_SNORM
];

/// One row of the fallback coarse KTX internal-format table.
pub struct KtxFormatInfo2 {
    pub internal_fmt: u32,
    pub format: Format,
}

/// `k__translate_ktx_fmt2`, consulted only when `KTX_FORMAT_TABLE` has no
/// match — a handful of very old KTX encoders emit these coarse,
/// non-sized internal formats instead.
pub const KTX_FORMAT_TABLE2: &[KtxFormatInfo2] = &[
    KtxFormatInfo2 { internal_fmt: 0x803C, format: Format::A8 },    // ALPHA
    KtxFormatInfo2 { internal_fmt: 0x1903, format: Format::R8 },    // RED
    KtxFormatInfo2 { internal_fmt: 0x1907, format: Format::Rgb8 },  // RGB
    KtxFormatInfo2 { internal_fmt: 0x1908, format: Format::Rgba8 }, // RGBA
    KtxFormatInfo2 { internal_fmt: 0x83F0, format: Format::Bc1 },   // COMPRESSED_RGB_S3TC_DXT1_EXT
];

/// Resolve a KTX `glInternalFormat` value to a canonical format.
///
/// Tries the primary by-index table first, then the coarse fallback table.
/// Returns `Format::Count` if neither table has a match.
pub fn resolve_ktx_internal_format(internal_format: u32) -> Format {
    for row in KTX_FORMAT_TABLE {
        if row.internal_fmt == internal_format {
            return row.format;
        }
    }
    for row in KTX_FORMAT_TABLE2 {
        if row.internal_fmt == internal_format {
            return row.format;
        }
    }
    Format::Count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_compressed_dxt5() {
        assert_eq!(resolve_ktx_internal_format(0x83F3), Format::Bc3);
    }

    #[test]
    fn srgb_alternate_is_unsupported() {
        // internal_fmt_srgb is recorded as parity data but never scanned —
        // only a GL internal format that appears in the non-sRGB column
        // resolves.
        assert_eq!(resolve_ktx_internal_format(0x8C41), Format::Count);
    }

    #[test]
    fn falls_back_to_coarse_table() {
        assert_eq!(resolve_ktx_internal_format(0x1907), Format::Rgb8);
    }

    #[test]
    fn unknown_resolves_to_count() {
        assert_eq!(resolve_ktx_internal_format(0xDEAD), Format::Count);
    }
}
