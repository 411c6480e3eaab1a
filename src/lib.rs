//! rip-halftone: halftone screening for raster image processors.
//!
//! Converts a continuous-tone 8-bit grayscale raster (as produced by a page
//! rasterizer) into a halftoned, bit-packed image for fixed-palette output
//! devices. The pipeline runs in four stages:
//!
//! 1. **Resolution resolution** — [`ResolutionSpec::parse`] turns a token
//!    like `"600"` or `"1200x600"` into a validated sample density.
//! 2. **Dithering** — stochastic Floyd-Steinberg error diffusion quantizes
//!    the raster to 2, 4, 16, or 256 levels, with a seedable noise
//!    perturbation that breaks up periodic patterning.
//! 3. **Packing** — quantized indices are packed MSB-first at the target
//!    bit depth, with the target container's row stride.
//! 4. **Encoding** — packed rows plus palette and resolution metadata are
//!    serialized to bilevel TIFF (1-bit) or indexed BMP (2/4/8-bit). A
//!    PNG preview is rendered best-effort alongside.
//!
//! # Quick Start
//!
//! [`Halftoner`] is the primary entry point:
//!
//! ```
//! use rip_halftone::{GrayscaleRaster, Halftoner, OutputFormat, ResolutionSpec};
//!
//! let raster = GrayscaleRaster::new(8, 8, vec![128; 64]).unwrap();
//! let resolution = ResolutionSpec::parse("1200x600").unwrap();
//!
//! let output = Halftoner::new(OutputFormat::Tiff1Bit)
//!     .noise(0.5)
//!     .seed(42)
//!     .run(&raster, &resolution)
//!     .unwrap();
//!
//! assert_eq!(output.blob.extension(), "tif");
//! ```
//!
//! # Determinism
//!
//! There is no hidden random state: the noise generator is seeded
//! explicitly (or from OS entropy when no seed is given), so a fixed seed
//! reproduces output byte for byte, and `noise = 0.0` is bit-identical to
//! plain Floyd-Steinberg regardless of seed.
//!
//! # Scope
//!
//! The crate performs no I/O and holds no cross-invocation state. Page
//! interpretation, transport, and job bookkeeping live with the caller;
//! parallelism across independent rasters is safe and encouraged, while the
//! diffusion scan within one raster is inherently sequential.

pub mod container;
pub mod dither;
pub mod error;
pub mod format;
pub mod pack;
pub mod pipeline;
pub mod preview;
pub mod raster;
pub mod resolution;

pub use container::{ContainerBlob, Palette};
pub use dither::{floyd_steinberg, NoiseSource};
pub use error::{InternalError, PipelineError, ValidationError};
pub use format::{Container, OutputFormat};
pub use pack::{pack, PackedImage, RowAlignment};
pub use pipeline::{HalftoneOutput, Halftoner};
pub use raster::{GrayscaleRaster, QuantizedRaster};
pub use resolution::ResolutionSpec;
