//! Sub-image addressing: given a descriptor and a (layer, slice-or-face,
//! mip) triple, walk the format-specific payload layout to find the byte
//! range of that sub-image.

use texcon_format::block_info;

use crate::descriptor::Descriptor;

/// A single sub-image's byte range and geometry, borrowed from the
/// caller's blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubImage<'a> {
    pub bytes: &'a [u8],
    /// Block-aligned, minimum-clamped width at this mip level.
    pub width: u32,
    /// Block-aligned, minimum-clamped height at this mip level.
    pub height: u32,
    pub byte_size: usize,
    pub row_pitch: usize,
}

#[inline]
fn align4(offset: usize) -> usize {
    (offset + 3) & !3
}

/// Round a mip level's dimensions up to a block multiple, then clamp to the
/// format's minimum block-count dimensions.
#[inline]
fn clamp_round(width: u32, height: u32, bw: u32, bh: u32, min_w: u32, min_h: u32) -> (u32, u32) {
    let rw = (((width + bw - 1) / bw) * bw).max(min_w);
    let rh = (((height + bh - 1) / bh) * bh).max(min_h);
    (rw, rh)
}

/// Locate a sub-image inside `blob` given the container `descriptor` that
/// `blob` produced.
///
/// # Panics
///
/// Panics if `array_index`, `slice_or_face`, or `mip_index` is out of range
/// for `descriptor`, or if `descriptor.format` is the compressed-sentinel
/// value. These are programming errors — the caller passed a
/// descriptor/blob pair inconsistent with the contract — not recoverable
/// failures.
pub fn get_sub(descriptor: &Descriptor, blob: &[u8], array_index: u32, slice_or_face: u32, mip_index: u32) -> SubImage<'_> {
    assert!(array_index < descriptor.num_layers, "array index out of range");
    assert!(mip_index < descriptor.num_mips, "mip index out of range");
    if descriptor.is_cubemap() {
        assert!(slice_or_face < 6, "cube face index out of range");
    } else {
        assert!(slice_or_face < descriptor.depth, "depth slice index out of range");
    }
    assert_ne!(
        descriptor.format,
        texcon_format::Format::Compressed,
        "descriptor carries the compressed sentinel, not a resolved format"
    );

    let (requested_face, requested_slice) = if descriptor.is_cubemap() {
        (slice_or_face, 0)
    } else {
        (0, slice_or_face)
    };

    if descriptor.is_ktx() {
        locate_ktx(descriptor, blob, array_index, requested_face, mip_index, requested_slice)
    } else {
        locate_dds(descriptor, blob, array_index, requested_face, mip_index, requested_slice)
    }
}

fn locate_dds(
    descriptor: &Descriptor,
    blob: &[u8],
    target_layer: u32,
    target_face: u32,
    target_mip: u32,
    target_slice: u32,
) -> SubImage<'_> {
    let info = block_info(descriptor.format);
    let (bw, bh, bs, bpp) = (
        info.block_width as u32,
        info.block_height as u32,
        info.block_size_bytes as u32,
        info.bpp as u32,
    );
    let min_w = info.min_block_x as u32 * bw;
    let min_h = info.min_block_y as u32 * bh;

    let num_faces = descriptor.num_faces();
    let num_slices = descriptor.num_slices();

    let mut cursor = descriptor.data_offset;

    for layer in 0..descriptor.num_layers {
        for face in 0..num_faces {
            let mut width = descriptor.width;
            let mut height = descriptor.height;
            for mip in 0..descriptor.num_mips {
                let (rw, rh) = clamp_round(width, height, bw, bh, min_w, min_h);
                let mip_byte_size = ((rw / bw) * (rh / bh) * bs) as usize;

                for slice in 0..num_slices {
                    if layer == target_layer && face == target_face && mip == target_mip && slice == target_slice {
                        return SubImage {
                            bytes: &blob[cursor..cursor + mip_byte_size],
                            width: rw,
                            height: rh,
                            byte_size: mip_byte_size,
                            row_pitch: (rw * bpp / 8) as usize,
                        };
                    }
                    cursor += mip_byte_size;
                }

                width = (width / 2).max(1);
                height = (height / 2).max(1);
            }
        }
    }

    unreachable!("(array_index, slice_or_face, mip_index) validated in range but no match found")
}

fn locate_ktx(
    descriptor: &Descriptor,
    blob: &[u8],
    target_layer: u32,
    target_face: u32,
    target_mip: u32,
    target_slice: u32,
) -> SubImage<'_> {
    let info = block_info(descriptor.format);
    let (bw, bh, bs, bpp) = (
        info.block_width as u32,
        info.block_height as u32,
        info.block_size_bytes as u32,
        info.bpp as u32,
    );
    let min_w = info.min_block_x as u32 * bw;
    let min_h = info.min_block_y as u32 * bh;

    let num_faces = descriptor.num_faces();
    let num_slices = descriptor.num_slices();

    let mut cursor = descriptor.data_offset;
    let mut width = descriptor.width;
    let mut height = descriptor.height;

    for mip in 0..descriptor.num_mips {
        let (rw, rh) = clamp_round(width, height, bw, bh, min_w, min_h);
        let mip_byte_size = ((rw / bw) * (rh / bh) * bs) as usize;

        let image_size = u32::from_le_bytes(blob[cursor..cursor + 4].try_into().unwrap());
        debug_assert_eq!(
            image_size as usize,
            mip_byte_size * num_faces as usize * num_slices as usize,
            "KTX imageSize prefix disagrees with the computed mip byte size"
        );
        cursor += 4;

        for layer in 0..descriptor.num_layers {
            for face in 0..num_faces {
                for slice in 0..num_slices {
                    if layer == target_layer && face == target_face && mip == target_mip && slice == target_slice {
                        return SubImage {
                            bytes: &blob[cursor..cursor + mip_byte_size],
                            width: rw,
                            height: rh,
                            byte_size: mip_byte_size,
                            row_pitch: (rw * bpp / 8) as usize,
                        };
                    }
                    cursor += mip_byte_size;
                }
                cursor = align4(cursor);
            }
        }
        cursor = align4(cursor);

        width = (width / 2).max(1);
        height = (height / 2).max(1);
    }

    unreachable!("(array_index, slice_or_face, mip_index) validated in range but no match found")
}
