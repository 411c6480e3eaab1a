//! Indexed BMP writer.
//!
//! BITMAPFILEHEADER + BITMAPINFOHEADER, an explicit BGRA color table of
//! `2^bpp` entries, and bottom-up pixel rows at the packer's 4-byte stride.
//! The 2-bit variant follows the same layout with biBitCount = 2 (the
//! Windows CE extension of the header).

use super::Palette;
use crate::pack::PackedImage;
use crate::resolution::ResolutionSpec;

const FILE_HEADER_LEN: usize = 14;
const INFO_HEADER_LEN: usize = 40;

/// Serialize a 2/4/8-bit packed image to BMP bytes.
pub fn encode(packed: &PackedImage, palette: &Palette, resolution: &ResolutionSpec) -> Vec<u8> {
    let table_entries = 1usize << packed.bits_per_pixel();
    let table_len = table_entries * 4;
    let data_offset = FILE_HEADER_LEN + INFO_HEADER_LEN + table_len;
    let pixel_data_len = packed.data().len();
    let file_len = data_offset + pixel_data_len;

    let mut out = Vec::with_capacity(file_len);

    // BITMAPFILEHEADER
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_len as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(data_offset as u32).to_le_bytes());

    // BITMAPINFOHEADER
    out.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    out.extend_from_slice(&(packed.width() as i32).to_le_bytes());
    out.extend_from_slice(&(packed.height() as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&(packed.bits_per_pixel() as u16).to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB, uncompressed
    out.extend_from_slice(&(pixel_data_len as u32).to_le_bytes());
    out.extend_from_slice(&dpi_to_ppm(resolution.horizontal).to_le_bytes());
    out.extend_from_slice(&dpi_to_ppm(resolution.vertical).to_le_bytes());
    out.extend_from_slice(&(table_entries as u32).to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    // Color table: BGRA quads over the grayscale ramp.
    debug_assert_eq!(palette.len(), table_entries);
    for i in 0..table_entries {
        let gray = palette.level(i);
        out.extend_from_slice(&[gray, gray, gray, 0]);
    }

    // Pixel rows, bottom-up: last raster row first, padding already in place.
    for y in (0..packed.height()).rev() {
        out.extend_from_slice(packed.row(y));
    }

    out
}

/// Convert dots-per-inch to the header's pixels-per-meter, rounded.
fn dpi_to_ppm(dpi: u32) -> u32 {
    ((dpi as u64 * 10_000 + 127) / 254) as u32
}
