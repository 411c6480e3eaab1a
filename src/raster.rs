//! Raster buffers flowing through the pipeline.
//!
//! [`GrayscaleRaster`] is the continuous-tone input produced by the upstream
//! rasterizer. [`QuantizedRaster`] is the sealed output of the dithering
//! pass: one palette index per pixel. Both are immutable after construction;
//! every later stage only reads them.

use crate::error::ValidationError;

/// Continuous-tone 8-bit grayscale input raster.
///
/// Samples are row-major, 0 = black, 255 = white. The constructor validates
/// dimensions and buffer length because the buffer arrives from an external
/// collaborator, not from this crate.
#[derive(Debug, Clone)]
pub struct GrayscaleRaster {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl GrayscaleRaster {
    /// Create a raster, validating that both dimensions are positive and
    /// that `samples.len() == width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<u8>) -> Result<Self, ValidationError> {
        if width == 0 || height == 0 {
            return Err(ValidationError::EmptyRaster { width, height });
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(ValidationError::SampleCountMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major sample buffer, length `width * height`.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

/// Dithered raster: one palette index per pixel, row-major order.
///
/// Produced once per dithering pass and never mutated afterwards; it is the
/// sealed input to bit packing. Indices are always `< levels`.
#[derive(Debug, Clone)]
pub struct QuantizedRaster {
    width: u32,
    height: u32,
    levels: u16,
    indices: Vec<u8>,
}

impl QuantizedRaster {
    /// Wrap dithered palette indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: u32, height: u32, levels: u16) -> Self {
        debug_assert_eq!(
            indices.len(),
            width as usize * height as usize,
            "index count must match {}x{}",
            width,
            height,
        );
        Self {
            width,
            height,
            levels,
            indices,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of palette levels the indices refer to.
    #[inline]
    pub fn levels(&self) -> u16 {
        self.levels
    }

    /// Palette indices, one per pixel, row-major order.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }
}
