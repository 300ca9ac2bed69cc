//! KTX v1 header parsing.

use texcon_common::BinaryReader;
use texcon_format::{block_info, format_info, resolve_ktx_internal_format, Format};

use crate::descriptor::{Descriptor, TextureFlags};
use crate::error::{Error, Result};
use crate::ktx_header::KtxHeader;

/// Little-endian-tagged `endianness` value. A KTX file carrying this marker
/// has been byte-swapped relative to this parser's expectations; swap
/// support is an explicit non-goal.
const ENDIANNESS_SWAPPED: u32 = 0x0403_0201;

/// Parse a KTX v1 container. `reader` must be positioned immediately after
/// the dispatcher's 4-byte magic peek, i.e. at the 5th identifier byte.
pub fn parse_ktx(reader: &mut BinaryReader) -> Result<Descriptor> {
    let header: KtxHeader = reader.read_struct()?;

    if !header.is_version_1() {
        return Err(Error::HeaderInconsistency("not a KTX version 1 file".into()));
    }

    let endianness = header.endianness;
    if endianness == ENDIANNESS_SWAPPED {
        return Err(Error::UnsupportedEndianness);
    }
    if endianness != KtxHeader::ENDIANNESS_REFERENCE {
        return Err(Error::HeaderInconsistency(format!(
            "unrecognized endianness marker {endianness:#010x}"
        )));
    }

    let metadata_offset = reader.position();
    let metadata_size = header.bytes_of_key_value_data as usize;
    reader.read_bytes(metadata_size)?;

    let format = resolve_ktx_internal_format(header.gl_internal_format);
    if format == Format::Count {
        return Err(Error::UnsupportedFormat);
    }

    let face_count = header.number_of_faces;
    if face_count != 1 && face_count != 6 {
        return Err(Error::HeaderInconsistency("incomplete cubemap".into()));
    }

    let data_offset = reader.position();
    let payload_size = reader.remaining();

    let mut flags = TextureFlags::KTX;
    if face_count == 6 {
        flags |= TextureFlags::CUBEMAP;
    }
    if format_info(format).has_alpha {
        flags |= TextureFlags::ALPHA;
    }

    Ok(Descriptor {
        data_offset,
        payload_size,
        format,
        flags,
        width: header.pixel_width,
        height: header.pixel_height,
        depth: header.pixel_depth.max(1),
        num_layers: header.number_of_array_elements.max(1),
        num_mips: header.number_of_mipmap_levels.max(1),
        bpp: block_info(format).bpp,
        metadata_offset,
        metadata_size,
    })
}
