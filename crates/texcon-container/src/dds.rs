//! DDS header parsing.

use texcon_common::BinaryReader;
use texcon_format::{block_info, resolve_dds_bitmask, resolve_dds_fourcc, resolve_dxgi, DdsPixelFormatFlags, Format};

use crate::dds_header::{DdsCaps, DdsCaps2, DdsHeader, DdsHeaderDxt10, DdsHeaderFlags, DdsPixelFormat};
use crate::descriptor::{Descriptor, TextureFlags};
use crate::error::{Error, Result};

/// Parse a DDS container. `reader` must be positioned immediately after the
/// 4-byte `"DDS "` magic the dispatcher consumed.
pub fn parse_dds(reader: &mut BinaryReader) -> Result<Descriptor> {
    let header: DdsHeader = reader.read_struct()?;

    if header.size != DdsHeader::SIZE {
        return Err(Error::HeaderInconsistency(format!(
            "expected header size {}, got {}",
            DdsHeader::SIZE,
            { header.size }
        )));
    }

    const REQUIRED_FLAGS: u32 =
        DdsHeaderFlags::CAPS | DdsHeaderFlags::HEIGHT | DdsHeaderFlags::WIDTH | DdsHeaderFlags::PIXELFORMAT;
    if header.flags & REQUIRED_FLAGS != REQUIRED_FLAGS {
        return Err(Error::HeaderInconsistency(
            "missing required header flag (CAPS|HEIGHT|WIDTH|PIXELFORMAT)".into(),
        ));
    }

    if header.pixel_format.size != DdsPixelFormat::SIZE {
        return Err(Error::HeaderInconsistency(format!(
            "expected pixel format size {}, got {}",
            DdsPixelFormat::SIZE,
            { header.pixel_format.size }
        )));
    }

    if header.caps & DdsCaps::TEXTURE == 0 {
        return Err(Error::HeaderInconsistency("caps field missing TEXTURE bit".into()));
    }

    let is_cubemap = header.caps2 & DdsCaps2::CUBEMAP != 0;
    if is_cubemap && header.caps2 & DdsCaps2::CUBEMAP_ALL_FACES != DdsCaps2::CUBEMAP_ALL_FACES {
        return Err(Error::HeaderInconsistency("incomplete cubemap face set".into()));
    }

    let is_dx10 = header.is_dx10();
    let dxt10 = if is_dx10 {
        Some(reader.read_struct::<DdsHeaderDxt10>()?)
    } else {
        None
    };
    let array_size = dxt10.map(|h| h.array_size.max(1)).unwrap_or(1);

    let (format, srgb) = if let Some(dxt10) = dxt10 {
        resolve_dxgi(dxt10.dxgi_format)
    } else if header.pixel_format.flags & DdsPixelFormatFlags::FOURCC != 0 {
        (resolve_dds_fourcc(header.pixel_format.four_cc), false)
    } else {
        let pf = header.pixel_format;
        (
            resolve_dds_bitmask(
                pf.rgb_bit_count,
                pf.flags,
                [pf.r_bit_mask, pf.g_bit_mask, pf.b_bit_mask, pf.a_bit_mask],
            ),
            false,
        )
    };

    if format == Format::Count {
        return Err(Error::UnsupportedFormat);
    }

    let data_offset = reader.position();
    let payload_size = reader.remaining();

    let mut flags = TextureFlags::DDS;
    if is_cubemap {
        flags |= TextureFlags::CUBEMAP;
    }
    if header.pixel_format.flags & DdsPixelFormatFlags::ALPHA != 0 {
        flags |= TextureFlags::ALPHA;
    }
    if srgb {
        flags |= TextureFlags::SRGB;
    }

    let num_mips = if header.caps & DdsCaps::MIPMAP != 0 {
        header.mip_count.max(1)
    } else {
        1
    };

    Ok(Descriptor {
        data_offset,
        payload_size,
        format,
        flags,
        width: header.width,
        height: header.height,
        depth: header.depth.max(1),
        num_layers: array_size,
        num_mips,
        bpp: block_info(format).bpp,
        metadata_offset: 0,
        metadata_size: 0,
    })
}
