//! Pipeline orchestration: dither, pack, encode, preview.

use tracing::{debug, warn};

use crate::container::{self, ContainerBlob, Palette};
use crate::dither::{floyd_steinberg, NoiseSource};
use crate::error::{PipelineError, ValidationError};
use crate::format::OutputFormat;
use crate::pack;
use crate::preview;
use crate::raster::GrayscaleRaster;
use crate::resolution::ResolutionSpec;

/// Halftone screening pipeline builder.
///
/// Configure once, then [`run()`](Self::run) any number of rasters; the
/// builder holds no per-invocation state. Each run owns its diffusion
/// buffers and noise generator, so runs on independent rasters may happen
/// in parallel at a higher layer.
///
/// # Example
///
/// ```
/// use rip_halftone::{GrayscaleRaster, Halftoner, OutputFormat, ResolutionSpec};
///
/// let raster = GrayscaleRaster::new(4, 4, vec![128; 16]).unwrap();
/// let resolution = ResolutionSpec::parse("600").unwrap();
///
/// let output = Halftoner::new(OutputFormat::Tiff1Bit)
///     .noise(0.25)
///     .seed(7)
///     .run(&raster, &resolution)
///     .unwrap();
///
/// assert_eq!(output.width, 4);
/// assert_eq!(output.blob.extension(), "tif");
/// ```
#[derive(Debug, Clone)]
pub struct Halftoner {
    format: OutputFormat,
    noise: f32,
    seed: Option<u64>,
}

/// Everything a caller needs from one pipeline run.
#[derive(Debug, Clone)]
pub struct HalftoneOutput {
    /// The encoded container.
    pub blob: ContainerBlob,
    /// PNG preview rendition; `None` when preview generation failed.
    pub preview: Option<Vec<u8>>,
    /// Pixel dimensions, unchanged from the input raster.
    pub width: u32,
    pub height: u32,
    /// The density embedded in the container metadata.
    pub resolution: ResolutionSpec,
}

impl Halftoner {
    /// New pipeline for the given output format, noise 0.0, unseeded.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            noise: 0.0,
            seed: None,
        }
    }

    /// Noise fraction in [0.0, 1.0]. Validated at run time so an
    /// out-of-range value is reported against the run that used it.
    pub fn noise(mut self, noise: f32) -> Self {
        self.noise = noise;
        self
    }

    /// Fix the noise generator seed for reproducible output.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Process one raster to completion: dither, pack, encode, preview.
    pub fn run(
        &self,
        raster: &GrayscaleRaster,
        resolution: &ResolutionSpec,
    ) -> Result<HalftoneOutput, PipelineError> {
        if !(0.0..=1.0).contains(&self.noise) {
            return Err(ValidationError::NoiseOutOfRange { value: self.noise }.into());
        }

        let levels = self.format.levels();
        debug!(
            format = self.format.identifier(),
            width = raster.width(),
            height = raster.height(),
            levels,
            noise = self.noise,
            "halftoning raster"
        );

        let mut noise_source = match self.seed {
            Some(seed) => NoiseSource::from_seed(seed),
            None => NoiseSource::from_entropy(),
        };
        let quantized = floyd_steinberg(raster, levels, self.noise, &mut noise_source)?;

        // The closed format enum guarantees the pairing, but packing input
        // arrives through a public type, so re-check before committing bits.
        if quantized.levels() != self.format.levels() {
            return Err(ValidationError::LevelDepthMismatch {
                levels: quantized.levels(),
                bits_per_pixel: self.format.bits_per_pixel(),
                capacity: self.format.levels(),
            }
            .into());
        }

        let packed = pack::pack(
            &quantized,
            self.format.bits_per_pixel(),
            self.format.row_alignment(),
        )?;
        debug!(
            stride = packed.row_stride(),
            bytes = packed.data().len(),
            "packed rows"
        );

        let palette = Palette::grayscale(levels);
        let blob = container::encode(self.format, &packed, &palette, resolution)?;

        let preview = match preview::render(&packed, &palette) {
            Ok(png) => Some(png),
            Err(error) => {
                warn!(%error, "preview generation failed, continuing without one");
                None
            }
        };

        Ok(HalftoneOutput {
            blob,
            preview,
            width: raster.width(),
            height: raster.height(),
            resolution: *resolution,
        })
    }
}
