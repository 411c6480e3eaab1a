//! Container serialization: packed rows plus headers and palette into a
//! concrete file format.
//!
//! Two containers are supported: single-strip uncompressed bilevel TIFF for
//! 1-bit output, and indexed BMP for 2/4/8-bit output. Both writers are
//! plain byte-wise serializers; the resolved sample density is embedded in
//! each container's resolution metadata.

pub mod bmp;
pub mod tiff;

use crate::error::{InternalError, PipelineError, ValidationError};
use crate::format::OutputFormat;
use crate::pack::PackedImage;
use crate::resolution::ResolutionSpec;

/// Ordered gray levels backing the quantized indices.
///
/// For TIFF the palette stays implicit (BlackIsZero photometric); for BMP it
/// is written out as an explicit color table.
#[derive(Debug, Clone)]
pub struct Palette {
    levels: Vec<u8>,
}

impl Palette {
    /// Linear grayscale ramp: level `i` maps to `i * 255 / (levels - 1)`,
    /// so index 0 is black and the last index is white. Exact for every
    /// supported level count.
    pub fn grayscale(levels: u16) -> Self {
        debug_assert!(levels >= 2);
        let top = levels as u32 - 1;
        Self {
            levels: (0..levels as u32).map(|i| (i * 255 / top) as u8).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Gray value of palette entry `index`.
    #[inline]
    pub fn level(&self, index: usize) -> u8 {
        self.levels[index]
    }
}

/// Final encoded output: format-tagged bytes, owned by the caller.
#[derive(Debug, Clone)]
pub struct ContainerBlob {
    format: OutputFormat,
    bytes: Vec<u8>,
}

impl ContainerBlob {
    #[inline]
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Filename extension matching the container.
    #[inline]
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }
}

/// Serialize a packed image into the requested container.
///
/// The (format, bit depth) pairing and the stride x height invariant are
/// both re-checked here: a mismatch in the former is a caller error, a
/// mismatch in the latter means an upstream stage broke its contract.
pub fn encode(
    format: OutputFormat,
    packed: &PackedImage,
    palette: &Palette,
    resolution: &ResolutionSpec,
) -> Result<ContainerBlob, PipelineError> {
    if packed.bits_per_pixel() != format.bits_per_pixel() {
        return Err(ValidationError::LevelDepthMismatch {
            levels: 1u16 << packed.bits_per_pixel(),
            bits_per_pixel: format.bits_per_pixel(),
            capacity: format.levels(),
        }
        .into());
    }
    let expected = packed.row_stride() * packed.height() as usize;
    if packed.data().len() != expected {
        return Err(InternalError::StrideMismatch {
            stride: packed.row_stride(),
            height: packed.height(),
            actual: packed.data().len(),
        }
        .into());
    }

    let bytes = match format {
        OutputFormat::Tiff1Bit => tiff::encode(packed, resolution),
        OutputFormat::Bmp2Bit | OutputFormat::Bmp4Bit | OutputFormat::Bmp8Bit => {
            bmp::encode(packed, palette, resolution)
        }
    };

    Ok(ContainerBlob { format, bytes })
}
