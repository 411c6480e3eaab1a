//! Baseline bilevel TIFF writer.
//!
//! Little-endian, single strip, uncompressed, PhotometricInterpretation =
//! BlackIsZero: packed bit 0 renders black and bit 1 white, matching the
//! palette convention, so no inversion happens anywhere. The resolver's
//! density lands in XResolution/YResolution with ResolutionUnit = inch.

use crate::pack::PackedImage;
use crate::resolution::ResolutionSpec;

// Baseline TIFF 6.0 tags, in the ascending order the IFD requires.
const TAG_IMAGE_WIDTH: u16 = 256;
const TAG_IMAGE_LENGTH: u16 = 257;
const TAG_BITS_PER_SAMPLE: u16 = 258;
const TAG_COMPRESSION: u16 = 259;
const TAG_PHOTOMETRIC: u16 = 262;
const TAG_STRIP_OFFSETS: u16 = 273;
const TAG_ROWS_PER_STRIP: u16 = 278;
const TAG_STRIP_BYTE_COUNTS: u16 = 279;
const TAG_X_RESOLUTION: u16 = 282;
const TAG_Y_RESOLUTION: u16 = 283;
const TAG_RESOLUTION_UNIT: u16 = 296;

const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_RATIONAL: u16 = 5;

const COMPRESSION_NONE: u32 = 1;
const PHOTOMETRIC_BLACK_IS_ZERO: u32 = 1;
const RESOLUTION_UNIT_INCH: u32 = 2;

const ENTRY_COUNT: usize = 11;
const HEADER_LEN: usize = 8;
const IFD_LEN: usize = 2 + ENTRY_COUNT * 12 + 4;

/// Serialize a 1-bit packed image to TIFF bytes.
///
/// Layout: 8-byte header, IFD, the two resolution rationals, then the
/// single pixel strip.
pub fn encode(packed: &PackedImage, resolution: &ResolutionSpec) -> Vec<u8> {
    let strip_len = packed.data().len();
    let rationals_offset = HEADER_LEN + IFD_LEN;
    let strip_offset = rationals_offset + 16;

    let mut out = Vec::with_capacity(strip_offset + strip_len);

    // Header: byte order "II", magic 42, first IFD right after.
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());

    out.extend_from_slice(&(ENTRY_COUNT as u16).to_le_bytes());
    push_entry(&mut out, TAG_IMAGE_WIDTH, TYPE_LONG, packed.width());
    push_entry(&mut out, TAG_IMAGE_LENGTH, TYPE_LONG, packed.height());
    push_entry(&mut out, TAG_BITS_PER_SAMPLE, TYPE_SHORT, 1);
    push_entry(&mut out, TAG_COMPRESSION, TYPE_SHORT, COMPRESSION_NONE);
    push_entry(&mut out, TAG_PHOTOMETRIC, TYPE_SHORT, PHOTOMETRIC_BLACK_IS_ZERO);
    push_entry(&mut out, TAG_STRIP_OFFSETS, TYPE_LONG, strip_offset as u32);
    push_entry(&mut out, TAG_ROWS_PER_STRIP, TYPE_LONG, packed.height());
    push_entry(&mut out, TAG_STRIP_BYTE_COUNTS, TYPE_LONG, strip_len as u32);
    push_rational_entry(&mut out, TAG_X_RESOLUTION, rationals_offset as u32);
    push_rational_entry(&mut out, TAG_Y_RESOLUTION, rationals_offset as u32 + 8);
    push_entry(&mut out, TAG_RESOLUTION_UNIT, TYPE_SHORT, RESOLUTION_UNIT_INCH);
    out.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

    // XResolution, YResolution as dpi/1 rationals.
    out.extend_from_slice(&resolution.horizontal.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&resolution.vertical.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());

    out.extend_from_slice(packed.data());
    out
}

/// Write one 12-byte IFD entry with count 1 and an inline value.
fn push_entry(out: &mut Vec<u8>, tag: u16, field_type: u16, value: u32) {
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&field_type.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    match field_type {
        // SHORT values sit in the low half of the value field.
        TYPE_SHORT => {
            out.extend_from_slice(&(value as u16).to_le_bytes());
            out.extend_from_slice(&[0u8; 2]);
        }
        _ => out.extend_from_slice(&value.to_le_bytes()),
    }
}

fn push_rational_entry(out: &mut Vec<u8>, tag: u16, offset: u32) {
    out.extend_from_slice(&tag.to_le_bytes());
    out.extend_from_slice(&TYPE_RATIONAL.to_le_bytes());
    out.extend_from_slice(&1u32.to_le_bytes());
    out.extend_from_slice(&offset.to_le_bytes());
}
