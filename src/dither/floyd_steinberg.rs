//! The Floyd-Steinberg engine with noise-modulated quantization.

use crate::error::ValidationError;
use crate::raster::{GrayscaleRaster, QuantizedRaster};

use super::{DiffusionState, NoiseSource, FLOYD_STEINBERG_KERNEL, KERNEL_DIVISOR};

/// Peak perturbation as a fraction of one quantization step at noise=1.0.
///
/// The perturbation is uniform symmetric, bounded by
/// `±NOISE_STEP_FRACTION * noise * step`. Half a step is the largest
/// amplitude that breaks up periodic patterning without flipping pixels
/// more than one level away from their deterministic choice.
const NOISE_STEP_FRACTION: f32 = 0.5;

/// Dither a grayscale raster down to `levels` evenly spaced output levels.
///
/// Single pass, left-to-right top-to-bottom. Per pixel:
///
/// 1. effective = sample + error carried from already-visited neighbors
/// 2. perturbed = effective + draw * `noise` * step (uniform in ±step/2)
/// 3. quantize perturbed to the nearest of the `levels` values in [0, 255]
/// 4. diffuse effective − chosen level (the *unperturbed* error, so the
///    injected noise never biases long-run brightness) at 7/16 right,
///    3/16 below-left, 5/16 below, 1/16 below-right
///
/// At `noise = 0.0` the output is bit-identical to plain Floyd-Steinberg.
///
/// # Errors
///
/// `levels` outside {2, 4, 16, 256} is a [`ValidationError`]. The raster
/// itself was already validated non-empty at construction.
pub fn floyd_steinberg(
    raster: &GrayscaleRaster,
    levels: u16,
    noise: f32,
    noise_source: &mut NoiseSource,
) -> Result<QuantizedRaster, ValidationError> {
    if !matches!(levels, 2 | 4 | 16 | 256) {
        return Err(ValidationError::UnsupportedLevels { levels });
    }

    let width = raster.width() as usize;
    let height = raster.height() as usize;
    let samples = raster.samples();

    let step = 255.0 / (levels - 1) as f32;
    let amplitude = NOISE_STEP_FRACTION * noise * step;
    let max_index = (levels - 1) as f32;

    let mut indices = vec![0u8; width * height];
    let mut state = DiffusionState::new(width);

    for y in 0..height {
        for x in 0..width {
            let pos = y * width + x;
            let effective = samples[pos] as f32 + state.carried(x);

            // The noise only modulates the quantization decision; the
            // diffused error below is computed from the un-noised value.
            let perturbed = effective + noise_source.next_unit() * amplitude;

            let index = (perturbed / step).round().clamp(0.0, max_index);
            let level = index * step;
            let error = effective - level;

            indices[pos] = index as u8;

            for (dx, dy, weight) in FLOYD_STEINBERG_KERNEL {
                state.add(x, dx, dy, error * weight / KERNEL_DIVISOR);
            }
        }
        state.advance_row();
    }

    Ok(QuantizedRaster::new(
        indices,
        raster.width(),
        raster.height(),
        levels,
    ))
}
