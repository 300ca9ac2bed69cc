//! End-to-end fixtures exercising `parse` + `get_sub` together, covering the
//! concrete scenarios worked through by hand.

use crate::dds_header::{DdsCaps, DdsCaps2, DdsHeaderFlags};
use crate::{get_sub, parse, Descriptor};
use texcon_format::{DdsPixelFormatFlags, Format};

fn le(v: u32) -> [u8; 4] {
    v.to_le_bytes()
}

/// Build a complete DDS header (`"DDS "` magic + 124-byte header), optionally
/// followed by a DX10 extension header.
#[allow(clippy::too_many_arguments)]
fn build_dds_header(
    width: u32,
    height: u32,
    depth: u32,
    mip_count: u32,
    has_mipmap_cap: bool,
    is_cubemap: bool,
    pf_flags: u32,
    four_cc: &[u8; 4],
    rgb_bit_count: u32,
    masks: [u32; 4],
    dxt10: Option<(u32, u32)>, // (dxgi_format, array_size)
) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"DDS ");

    buf.extend_from_slice(&le(124)); // size
    let mut flags = DdsHeaderFlags::CAPS | DdsHeaderFlags::HEIGHT | DdsHeaderFlags::WIDTH | DdsHeaderFlags::PIXELFORMAT;
    if has_mipmap_cap {
        flags |= DdsHeaderFlags::MIPMAPCOUNT;
    }
    buf.extend_from_slice(&le(flags));
    buf.extend_from_slice(&le(height));
    buf.extend_from_slice(&le(width));
    buf.extend_from_slice(&le(0)); // pitch_or_linear_size
    buf.extend_from_slice(&le(depth));
    buf.extend_from_slice(&le(mip_count));
    buf.extend_from_slice(&[0u8; 44]); // reserved1

    // Pixel format sub-header (32 bytes).
    buf.extend_from_slice(&le(32));
    buf.extend_from_slice(&le(pf_flags));
    buf.extend_from_slice(four_cc);
    buf.extend_from_slice(&le(rgb_bit_count));
    for mask in masks {
        buf.extend_from_slice(&le(mask));
    }

    let mut caps = DdsCaps::TEXTURE;
    if has_mipmap_cap {
        caps |= DdsCaps::MIPMAP | DdsCaps::COMPLEX;
    }
    if is_cubemap {
        caps |= DdsCaps::COMPLEX;
    }
    buf.extend_from_slice(&le(caps));

    let caps2 = if is_cubemap { DdsCaps2::CUBEMAP | DdsCaps2::CUBEMAP_ALL_FACES } else { 0 };
    buf.extend_from_slice(&le(caps2));
    buf.extend_from_slice(&le(0)); // caps3
    buf.extend_from_slice(&le(0)); // caps4
    buf.extend_from_slice(&le(0)); // reserved2

    if let Some((dxgi_format, array_size)) = dxt10 {
        buf.extend_from_slice(&le(dxgi_format));
        buf.extend_from_slice(&le(3)); // resource_dimension: TEXTURE2D
        buf.extend_from_slice(&le(0)); // misc_flag
        buf.extend_from_slice(&le(array_size));
        buf.extend_from_slice(&le(0)); // misc_flags2
    }

    buf
}

fn filler(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn scenario_dds_bc1_2d_no_mips_4x4() {
    let mut blob = build_dds_header(
        4,
        4,
        0,
        0,
        false,
        false,
        DdsPixelFormatFlags::FOURCC,
        b"DXT1",
        0,
        [0, 0, 0, 0],
        None,
    );
    assert_eq!(blob.len(), 128);
    blob.extend(filler(8));

    let descriptor = parse(&blob).expect("valid DDS blob");
    assert_eq!(descriptor.format, Format::Bc1);
    assert_eq!(descriptor.width, 4);
    assert_eq!(descriptor.height, 4);
    assert_eq!(descriptor.num_mips, 1);
    assert_eq!(descriptor.num_layers, 1);
    assert_eq!(descriptor.depth, 1);
    assert!(descriptor.is_dds());
    assert!(!descriptor.is_ktx());
    assert_eq!(descriptor.bpp, 4);
    assert_eq!(descriptor.data_offset, 128);
    assert_eq!(descriptor.payload_size, 8);

    let sub = get_sub(&descriptor, &blob, 0, 0, 0);
    assert_eq!(sub.byte_size, 8);
    assert_eq!(sub.bytes, &blob[128..136]);
    assert_eq!(sub.row_pitch, 2);
}

#[test]
fn scenario_dds_rgba8_2d_three_mips_4x4() {
    let mut blob = build_dds_header(
        4,
        4,
        0,
        3,
        true,
        false,
        DdsPixelFormatFlags::RGB | DdsPixelFormatFlags::ALPHAPIXELS,
        b"\0\0\0\0",
        32,
        [0x0000_00ff, 0x0000_ff00, 0x00ff_0000, 0xff00_0000],
        None,
    );
    let data_offset = blob.len();
    blob.extend(filler(64 + 16 + 4));

    let descriptor = parse(&blob).expect("valid DDS blob");
    assert_eq!(descriptor.format, Format::Rgba8);
    assert_eq!(descriptor.num_mips, 3);
    assert_eq!(descriptor.payload_size, 84);
    // ALPHAPIXELS (bit 0x1) is set, but ALPHA (bit 0x2, DDPF_ALPHA) is not —
    // the descriptor's ALPHA flag tracks only the latter.
    assert!(!descriptor.has_alpha());

    let mip2 = get_sub(&descriptor, &blob, 0, 0, 2);
    assert_eq!(mip2.byte_size, 4);
    assert_eq!(mip2.row_pitch, 4);
    assert_eq!(mip2.bytes, &blob[data_offset + 64 + 16..data_offset + 64 + 16 + 4]);
}

#[test]
fn scenario_dds_ddpf_alpha_sets_alpha_flag() {
    // DDPF_ALPHA (bit 0x2) is independent of the FourCC/bitmask resolution
    // path; set it alongside a normal FOURCC-resolved format to confirm the
    // descriptor's ALPHA flag tracks this bit, not DDPF_ALPHAPIXELS.
    let mut blob = build_dds_header(
        4,
        4,
        0,
        0,
        false,
        false,
        DdsPixelFormatFlags::FOURCC | DdsPixelFormatFlags::ALPHA,
        b"DXT1",
        0,
        [0, 0, 0, 0],
        None,
    );
    blob.extend(filler(8));

    let descriptor = parse(&blob).expect("valid DDS blob");
    assert_eq!(descriptor.format, Format::Bc1);
    assert!(descriptor.has_alpha());
}

#[test]
fn scenario_dds_bc3_cubemap_8x8_four_mips() {
    let mut blob = build_dds_header(
        8,
        8,
        0,
        4,
        true,
        true,
        DdsPixelFormatFlags::FOURCC,
        b"DXT5",
        0,
        [0, 0, 0, 0],
        None,
    );
    let data_offset = blob.len();
    let per_face = 64 + 16 + 16 + 16; // mip sizes clamped to BC3's min 4x4 block
    blob.extend(filler(per_face * 6));

    let descriptor = parse(&blob).expect("valid DDS blob");
    assert_eq!(descriptor.format, Format::Bc3);
    assert!(descriptor.is_cubemap());
    assert_eq!(descriptor.num_layers, 1);
    assert_eq!(descriptor.payload_size, per_face * 6);

    let sub = get_sub(&descriptor, &blob, 0, 2, 0);
    let expected_offset = data_offset + 2 * per_face;
    assert_eq!(sub.bytes, &blob[expected_offset..expected_offset + 64]);
    assert_eq!(sub.byte_size, 64);
}

#[test]
fn scenario_dds_dx10_bc7_srgb_array() {
    let mut blob = build_dds_header(
        4,
        4,
        0,
        0,
        false,
        false,
        DdsPixelFormatFlags::FOURCC,
        b"DX10",
        0,
        [0, 0, 0, 0],
        Some((99, 6)), // BC7_UNORM_SRGB, array_size=6
    );
    let data_offset = blob.len();
    blob.extend(filler(16 * 6));

    let descriptor = parse(&blob).expect("valid DDS blob");
    assert_eq!(descriptor.format, Format::Bc7);
    assert!(descriptor.is_srgb());
    assert!(!descriptor.is_cubemap());
    assert_eq!(descriptor.num_layers, 6);

    let sub = get_sub(&descriptor, &blob, 5, 0, 0);
    let expected_offset = data_offset + 5 * 16;
    assert_eq!(sub.bytes, &blob[expected_offset..expected_offset + 16]);
}

/// Build a complete KTX v1 header (4-byte magic + 60-byte header).
#[allow(clippy::too_many_arguments)]
fn build_ktx_header(
    gl_internal_format: u32,
    width: u32,
    height: u32,
    array_elements: u32,
    face_count: u32,
    mip_count: u32,
    metadata: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&[0xAB, b'K', b'T', b'X']);
    buf.extend_from_slice(&[0x20, b'1', b'1', 0xBB, 0x0D, 0x0A, 0x1A, 0x0A]); // identifier tail
    buf.extend_from_slice(&le(0x0102_0304)); // endianness
    buf.extend_from_slice(&le(0)); // gl_type
    buf.extend_from_slice(&le(1)); // gl_type_size
    buf.extend_from_slice(&le(0)); // gl_format
    buf.extend_from_slice(&le(gl_internal_format));
    buf.extend_from_slice(&le(0x1908)); // gl_base_internal_format (RGBA)
    buf.extend_from_slice(&le(width));
    buf.extend_from_slice(&le(height));
    buf.extend_from_slice(&le(0)); // pixel_depth
    buf.extend_from_slice(&le(array_elements));
    buf.extend_from_slice(&le(face_count));
    buf.extend_from_slice(&le(mip_count));
    buf.extend_from_slice(&le(metadata.len() as u32));
    buf.extend_from_slice(metadata);
    buf
}

#[test]
fn scenario_ktx_bc3_single_face_single_mip_4x4() {
    let mut blob = build_ktx_header(0x83F3, 4, 4, 0, 1, 1, &[]);
    assert_eq!(blob.len(), 64);

    blob.extend_from_slice(&le(16)); // imageSize prefix
    blob.extend(filler(16));

    let descriptor = parse(&blob).expect("valid KTX blob");
    assert_eq!(descriptor.format, Format::Bc3);
    assert!(descriptor.is_ktx());
    assert!(descriptor.has_alpha());
    assert!(!descriptor.is_cubemap());
    assert_eq!(descriptor.num_layers, 1);
    assert_eq!(descriptor.num_mips, 1);
    assert_eq!(descriptor.metadata_size, 0);

    let sub = get_sub(&descriptor, &blob, 0, 0, 0);
    assert_eq!(sub.byte_size, 16);
    assert_eq!(sub.bytes, &blob[68..84]);
}

#[test]
fn scenario_ktx_with_metadata_block() {
    let metadata = b"KTXorientation\0S=r,T=u\0";
    let mut blob = build_ktx_header(0x8058, 2, 2, 0, 1, 1, metadata);
    let metadata_offset = 64;
    blob.extend_from_slice(&le(2 * 2 * 4));
    blob.extend(filler(2 * 2 * 4));

    let descriptor = parse(&blob).expect("valid KTX blob");
    assert_eq!(descriptor.format, Format::Rgba8);
    assert_eq!(descriptor.metadata_offset, metadata_offset);
    assert_eq!(descriptor.metadata_size, metadata.len());
    assert_eq!(descriptor.data_offset, metadata_offset + metadata.len());
}

#[test]
fn scenario_unknown_signature_fails() {
    let err = parse(b"HELLO WORLD").unwrap_err();
    assert!(err.to_string().contains("unknown texture format"));
}

#[test]
fn scenario_truncated_ktx_endianness_swap_rejected() {
    let mut blob = build_ktx_header(0x83F3, 4, 4, 0, 1, 1, &[]);
    // Flip the endianness marker bytes (offset 12..16, after the 4-byte
    // magic + 8-byte identifier tail) to the swapped form.
    blob[12..16].copy_from_slice(&0x0403_0201u32.to_le_bytes());
    let err = parse(&blob).unwrap_err();
    assert_eq!(err, crate::Error::UnsupportedEndianness);
}

#[test]
fn dds_walk_order_sum_matches_payload_size() {
    let mut blob = build_dds_header(
        8,
        8,
        0,
        4,
        true,
        true,
        DdsPixelFormatFlags::FOURCC,
        b"DXT5",
        0,
        [0, 0, 0, 0],
        None,
    );
    let per_face = 64 + 16 + 16 + 16;
    blob.extend(filler(per_face * 6));
    let descriptor = parse(&blob).expect("valid DDS blob");

    let mut visited = std::collections::HashSet::new();
    let mut total = 0usize;
    for face in 0..6u32 {
        for mip in 0..4u32 {
            let sub = get_sub(&descriptor, &blob, 0, face, mip);
            let start = sub.bytes.as_ptr() as usize - blob.as_ptr() as usize;
            for offset in start..start + sub.byte_size {
                assert!(visited.insert(offset), "byte {offset} visited twice");
            }
            total += sub.byte_size;
        }
    }
    assert_eq!(total, descriptor.payload_size);
}

fn fake_descriptor(format: Format, flags: u32) -> Descriptor {
    Descriptor {
        data_offset: 0,
        payload_size: 0,
        format,
        flags,
        width: 0,
        height: 0,
        depth: 1,
        num_layers: 1,
        num_mips: 1,
        bpp: 0,
        metadata_offset: 0,
        metadata_size: 0,
    }
}

#[test]
fn rejects_wrong_header_size() {
    let mut blob = build_dds_header(
        4,
        4,
        0,
        0,
        false,
        false,
        DdsPixelFormatFlags::FOURCC,
        b"DXT1",
        0,
        [0, 0, 0, 0],
        None,
    );
    blob[4..8].copy_from_slice(&le(123)); // corrupt the stated header size
    let err = parse(&blob).unwrap_err();
    assert!(matches!(err, crate::Error::HeaderInconsistency(_)));
}

#[test]
fn rejects_incomplete_cubemap_face_set() {
    let mut blob = build_dds_header(
        8,
        8,
        0,
        1,
        false,
        true,
        DdsPixelFormatFlags::FOURCC,
        b"DXT5",
        0,
        [0, 0, 0, 0],
        None,
    );
    // Clear caps2 back to just CUBEMAP, dropping all six face bits.
    let caps2_offset = 4 + 124 - 4 - 4 - 4 - 4; // caps2 precedes caps3/caps4/reserved2
    blob[caps2_offset..caps2_offset + 4].copy_from_slice(&le(DdsCaps2::CUBEMAP));
    let err = parse(&blob).unwrap_err();
    assert!(matches!(err, crate::Error::HeaderInconsistency(_)));
}

#[test]
fn rejects_unsupported_dds_format() {
    let blob = build_dds_header(
        4,
        4,
        0,
        0,
        false,
        false,
        DdsPixelFormatFlags::FOURCC,
        b"ZZZZ",
        0,
        [0, 0, 0, 0],
        None,
    );
    let err = parse(&blob).unwrap_err();
    assert_eq!(err, crate::Error::UnsupportedFormat);
}

#[test]
fn rejects_unsupported_ktx_internal_format() {
    let mut blob = build_ktx_header(0xDEAD_BEEF, 4, 4, 0, 1, 1, &[]);
    blob.extend_from_slice(&le(16));
    blob.extend(filler(16));
    let err = parse(&blob).unwrap_err();
    assert_eq!(err, crate::Error::UnsupportedFormat);
}

#[test]
fn rejects_ktx_invalid_face_count() {
    let mut blob = build_ktx_header(0x83F3, 4, 4, 0, 3, 1, &[]);
    blob.extend_from_slice(&le(16));
    blob.extend(filler(16));
    let err = parse(&blob).unwrap_err();
    assert!(matches!(err, crate::Error::HeaderInconsistency(_)));
}

#[test]
fn descriptor_flag_accessors() {
    let dds = fake_descriptor(Format::Bc1, crate::TextureFlags::DDS | crate::TextureFlags::CUBEMAP);
    assert!(dds.is_dds());
    assert!(dds.is_cubemap());
    assert!(!dds.is_ktx());
    assert_eq!(dds.num_faces(), 6);
    assert_eq!(dds.num_slices(), 1);

    let ktx = fake_descriptor(Format::Rgba8, crate::TextureFlags::KTX | crate::TextureFlags::ALPHA);
    assert!(ktx.is_ktx());
    assert!(ktx.has_alpha());
    assert_eq!(ktx.num_faces(), 1);
}
