//! The canonical pixel-format enumeration and its per-format tables.
//!
//! `Format` is a closed, positionally-ordered enum: the block-info and
//! format-info tables below are indexed by `format as usize`, so adding or
//! reordering a variant means updating every table in lockstep. The
//! `tables_are_aligned` test guards that invariant.

/// Canonical pixel format.
///
/// Two ordered regions: compressed block formats first, then the
/// `Compressed` sentinel, then uncompressed formats, then the trailing
/// `Count` sentinel. Order is load-bearing — see the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Format {
    Bc1 = 0,
    Bc2,
    Bc3,
    Bc4,
    Bc5,
    Bc6H,
    Bc7,
    Etc1,
    Etc2,
    Etc2A,
    Etc2A1,
    Ptc12,
    Ptc14,
    Ptc12A,
    Ptc14A,
    Ptc22,
    Ptc24,
    Atc,
    AtcE,
    AtcI,
    Astc4X4,
    Astc5X5,
    Astc6X6,
    Astc8X5,
    Astc8X6,
    Astc10X5,
    /// Sentinel separating compressed formats from uncompressed ones. Never
    /// a valid resolved format; `format_is_compressed` uses it as the cutoff.
    Compressed,
    A8,
    R8,
    Rgba8,
    Rgba8S,
    Rg16,
    Rgb8,
    R16,
    R32F,
    R16F,
    Rg16F,
    Rg16S,
    Rgba16F,
    Rgba16,
    Bgra8,
    Rgb10A2,
    Rg11B10F,
    Rg8,
    Rg8S,
    /// Trailing "count / unknown" sentinel. Table lookups that fail to
    /// resolve a format return this value, which callers treat as failure.
    Count,
}

impl Format {
    /// Number of real (non-`Count`) variants.
    pub const COUNT: usize = Self::Count as usize;

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Sample/block encoding kind for a canonical format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    Unorm,
    Snorm,
    Float,
    /// Reserved for parity with the source's encoding enum; no canonical
    /// format currently resolves to this.
    Int,
    Uint,
    /// Used only by the `Compressed`/`Count` sentinel rows.
    None,
}

/// Per-format block geometry and channel layout.
///
/// Invariant: for uncompressed formats, `block_width == block_height == 1`
/// and `block_size_bytes == bpp / 8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockInfo {
    pub bpp: u8,
    pub block_width: u8,
    pub block_height: u8,
    pub block_size_bytes: u8,
    pub min_block_x: u8,
    pub min_block_y: u8,
    /// Reserved (depth/stencil bits); unused by any current format.
    pub depth_bits: u8,
    pub stencil_bits: u8,
    pub r_bits: u8,
    pub g_bits: u8,
    pub b_bits: u8,
    pub a_bits: u8,
    pub encoding: Encoding,
}

/// Per-format display metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatInfo {
    pub name: &'static str,
    pub has_alpha: bool,
}

macro_rules! block_info {
    ($bpp:expr, $bw:expr, $bh:expr, $bs:expr, $mbx:expr, $mby:expr, $r:expr, $g:expr, $b:expr, $a:expr, $enc:ident) => {
        BlockInfo {
            bpp: $bpp,
            block_width: $bw,
            block_height: $bh,
            block_size_bytes: $bs,
            min_block_x: $mbx,
            min_block_y: $mby,
            depth_bits: 0,
            stencil_bits: 0,
            r_bits: $r,
            g_bits: $g,
            b_bits: $b,
            a_bits: $a,
            encoding: Encoding::$enc,
        }
    };
}

/// Block-info table, indexed by `Format as usize`. Order matches
/// `original_source/stc-parse.h`'s `k__block_info`.
pub const BLOCK_INFO: [BlockInfo; Format::COUNT + 1] = [
    block_info!(4, 4, 4, 8, 1, 1, 0, 0, 0, 0, Unorm),    // Bc1
    block_info!(8, 4, 4, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Bc2
    block_info!(8, 4, 4, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Bc3
    block_info!(4, 4, 4, 8, 1, 1, 0, 0, 0, 0, Unorm),    // Bc4
    block_info!(8, 4, 4, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Bc5
    block_info!(8, 4, 4, 16, 1, 1, 0, 0, 0, 0, Float),   // Bc6H
    block_info!(8, 4, 4, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Bc7
    block_info!(4, 4, 4, 8, 1, 1, 0, 0, 0, 0, Unorm),    // Etc1
    block_info!(4, 4, 4, 8, 1, 1, 0, 0, 0, 0, Unorm),    // Etc2
    block_info!(8, 4, 4, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Etc2A
    block_info!(4, 4, 4, 8, 1, 1, 0, 0, 0, 0, Unorm),    // Etc2A1
    block_info!(2, 8, 4, 8, 2, 2, 0, 0, 0, 0, Unorm),    // Ptc12
    block_info!(4, 4, 4, 8, 2, 2, 0, 0, 0, 0, Unorm),    // Ptc14
    block_info!(2, 8, 4, 8, 2, 2, 0, 0, 0, 0, Unorm),    // Ptc12A
    block_info!(4, 4, 4, 8, 2, 2, 0, 0, 0, 0, Unorm),    // Ptc14A
    block_info!(2, 8, 4, 8, 2, 2, 0, 0, 0, 0, Unorm),    // Ptc22
    block_info!(4, 4, 4, 8, 2, 2, 0, 0, 0, 0, Unorm),    // Ptc24
    block_info!(4, 4, 4, 8, 1, 1, 0, 0, 0, 0, Unorm),    // Atc
    block_info!(8, 4, 4, 16, 1, 1, 0, 0, 0, 0, Unorm),   // AtcE
    block_info!(8, 4, 4, 16, 1, 1, 0, 0, 0, 0, Unorm),   // AtcI
    block_info!(8, 4, 4, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Astc4x4
    block_info!(6, 5, 5, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Astc5x5
    block_info!(4, 6, 6, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Astc6x6
    block_info!(4, 8, 5, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Astc8x5
    block_info!(3, 8, 6, 16, 1, 1, 0, 0, 0, 0, Unorm),   // Astc8x6
    block_info!(3, 10, 5, 16, 1, 1, 0, 0, 0, 0, Unorm),  // Astc10x5
    block_info!(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, None),     // Compressed (sentinel)
    block_info!(8, 1, 1, 1, 1, 1, 0, 0, 0, 8, Unorm),    // A8
    block_info!(8, 1, 1, 1, 1, 1, 8, 0, 0, 0, Unorm),    // R8
    block_info!(32, 1, 1, 4, 1, 1, 8, 8, 8, 8, Unorm),   // Rgba8
    block_info!(32, 1, 1, 4, 1, 1, 8, 8, 8, 8, Snorm),   // Rgba8S
    block_info!(32, 1, 1, 4, 1, 1, 16, 16, 0, 0, Unorm), // Rg16
    block_info!(24, 1, 1, 3, 1, 1, 8, 8, 8, 0, Unorm),   // Rgb8
    block_info!(16, 1, 1, 2, 1, 1, 16, 0, 0, 0, Unorm),  // R16
    block_info!(32, 1, 1, 4, 1, 1, 32, 0, 0, 0, Float),  // R32F
    block_info!(16, 1, 1, 2, 1, 1, 16, 0, 0, 0, Float),  // R16F
    block_info!(32, 1, 1, 4, 1, 1, 16, 16, 0, 0, Float), // Rg16F
    block_info!(32, 1, 1, 4, 1, 1, 16, 16, 0, 0, Snorm), // Rg16S
    block_info!(64, 1, 1, 8, 1, 1, 16, 16, 16, 16, Float), // Rgba16F
    block_info!(64, 1, 1, 8, 1, 1, 16, 16, 16, 16, Unorm), // Rgba16
    block_info!(32, 1, 1, 4, 1, 1, 8, 8, 8, 8, Unorm),   // Bgra8
    block_info!(32, 1, 1, 4, 1, 1, 10, 10, 10, 2, Unorm), // Rgb10A2
    block_info!(32, 1, 1, 4, 1, 1, 11, 11, 10, 0, Unorm), // Rg11B10F
    block_info!(16, 1, 1, 2, 1, 1, 8, 8, 0, 0, Unorm),   // Rg8
    block_info!(16, 1, 1, 2, 1, 1, 8, 8, 0, 0, Snorm),   // Rg8S
    block_info!(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, None),     // Count (sentinel)
];

macro_rules! fmt_info {
    ($name:expr, $alpha:expr) => {
        FormatInfo {
            name: $name,
            has_alpha: $alpha,
        }
    };
}

/// Format-info table, indexed by `Format as usize`. Order matches
/// `original_source/stc-parse.h`'s `k__formats_info`.
pub const FORMAT_INFO: [FormatInfo; Format::COUNT + 1] = [
    fmt_info!("BC1", false),
    fmt_info!("BC2", true),
    fmt_info!("BC3", true),
    fmt_info!("BC4", false),
    fmt_info!("BC5", false),
    fmt_info!("BC6H", false),
    fmt_info!("BC7", true),
    fmt_info!("ETC1", false),
    fmt_info!("ETC2", false),
    fmt_info!("ETC2A", true),
    fmt_info!("ETC2A1", true),
    fmt_info!("PTC12", false),
    fmt_info!("PTC14", false),
    fmt_info!("PTC12A", true),
    fmt_info!("PTC14A", true),
    fmt_info!("PTC22", true),
    fmt_info!("PTC24", true),
    fmt_info!("ATC", false),
    fmt_info!("ATCE", false),
    fmt_info!("ATCI", false),
    fmt_info!("ASTC4x4", true),
    fmt_info!("ASTC5x5", true),
    fmt_info!("ASTC6x6", false),
    fmt_info!("ASTC8x5", true),
    fmt_info!("ASTC8x6", false),
    fmt_info!("ASTC10x5", false),
    fmt_info!("<unknown>", false),
    fmt_info!("A8", true),
    fmt_info!("R8", false),
    fmt_info!("RGBA8", true),
    fmt_info!("RGBA8S", true),
    fmt_info!("RG16", false),
    fmt_info!("RGB8", false),
    fmt_info!("R16", false),
    fmt_info!("R32F", false),
    fmt_info!("R16F", false),
    fmt_info!("RG16F", false),
    fmt_info!("RG16S", false),
    fmt_info!("RGBA16F", true),
    fmt_info!("RGBA16", true),
    fmt_info!("BGRA8", true),
    fmt_info!("RGB10A2", true),
    fmt_info!("RG11B10F", false),
    fmt_info!("RG8", false),
    fmt_info!("RG8S", false),
    fmt_info!("<count>", false),
];

/// Look up the block-info row for a format.
#[inline]
pub fn block_info(format: Format) -> &'static BlockInfo {
    &BLOCK_INFO[format.index()]
}

/// Look up the format-info row for a format.
#[inline]
pub fn format_info(format: Format) -> &'static FormatInfo {
    &FORMAT_INFO[format.index()]
}

/// Display name for a canonical format, e.g. `"BC1"`.
#[inline]
pub fn format_name(format: Format) -> &'static str {
    format_info(format).name
}

/// Whether a canonical format is block-compressed.
#[inline]
pub fn format_is_compressed(format: Format) -> bool {
    (format as usize) < (Format::Compressed as usize)
}
