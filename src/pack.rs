//! Bit packing of quantized palette indices.
//!
//! Packs already-resolved indices into the byte layout of the target
//! container. Packing never re-quantizes: an index that does not fit the
//! requested bit depth is an upstream bug, reported as an
//! [`InternalError`], never masked.

use crate::error::InternalError;
use crate::raster::QuantizedRaster;

/// Row stride convention of the target container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAlignment {
    /// `ceil(width * bpp / 8)`, no padding beyond the byte boundary (TIFF).
    Byte,
    /// Padded up to the next multiple of 4 bytes, zero-filled (BMP).
    Dword,
}

impl RowAlignment {
    /// Row stride in bytes for `width` pixels at `bits_per_pixel`.
    pub fn stride(&self, width: u32, bits_per_pixel: u8) -> usize {
        let bits = width as usize * bits_per_pixel as usize;
        let bytes = bits.div_ceil(8);
        match self {
            RowAlignment::Byte => bytes,
            RowAlignment::Dword => (bytes + 3) & !3,
        }
    }
}

/// Bit-packed image rows plus layout metadata.
///
/// `data.len() == row_stride * height` always holds; the container encoders
/// re-check it defensively before serializing.
#[derive(Debug, Clone)]
pub struct PackedImage {
    width: u32,
    height: u32,
    bits_per_pixel: u8,
    row_stride: usize,
    data: Vec<u8>,
}

impl PackedImage {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn bits_per_pixel(&self) -> u8 {
        self.bits_per_pixel
    }

    #[inline]
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// One packed row, padding included.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.row_stride;
        &self.data[start..start + self.row_stride]
    }

    /// Unpack the palette index at `(x, y)`.
    ///
    /// Indices are MSB-first within each byte, so pixel 0 of a row lives in
    /// the top bits of its first byte.
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        let bpp = self.bits_per_pixel as usize;
        let bit_offset = x as usize * bpp;
        let byte = self.data[y as usize * self.row_stride + bit_offset / 8];
        let shift = 8 - bpp - (bit_offset % 8);
        (byte >> shift) & ((1u16 << bpp) - 1) as u8
    }
}

/// Pack a quantized raster at `bits_per_pixel` (1, 2, 4, or 8).
///
/// Bit order is most-significant-bit-first within each byte for all depths;
/// partial trailing bytes are zero-padded in their low bits, and `Dword`
/// rows are zero-filled out to the 4-byte boundary.
pub fn pack(
    quantized: &QuantizedRaster,
    bits_per_pixel: u8,
    alignment: RowAlignment,
) -> Result<PackedImage, InternalError> {
    debug_assert!(matches!(bits_per_pixel, 1 | 2 | 4 | 8));

    let width = quantized.width();
    let height = quantized.height();
    let capacity = 1u16 << bits_per_pixel;
    let stride = alignment.stride(width, bits_per_pixel);

    let mut data = Vec::with_capacity(stride * height as usize);
    for row in quantized.indices().chunks_exact(width as usize) {
        let row_start = data.len();
        let mut acc: u16 = 0;
        let mut filled: u8 = 0;
        for &index in row {
            if index as u16 >= capacity {
                return Err(InternalError::IndexOutOfRange {
                    index,
                    levels: capacity,
                });
            }
            acc = (acc << bits_per_pixel) | index as u16;
            filled += bits_per_pixel;
            if filled == 8 {
                data.push(acc as u8);
                acc = 0;
                filled = 0;
            }
        }
        if filled > 0 {
            data.push((acc << (8 - filled)) as u8);
        }
        data.resize(row_start + stride, 0);
    }

    Ok(PackedImage {
        width,
        height,
        bits_per_pixel,
        row_stride: stride,
        data,
    })
}
