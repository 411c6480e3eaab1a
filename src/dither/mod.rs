//! Stochastic error diffusion dithering.
//!
//! Converts a continuous-tone grayscale raster into palette indices at a
//! target level count using Floyd-Steinberg error diffusion, with an
//! optional noise perturbation that breaks up the periodic patterning the
//! deterministic kernel produces on flat tones.
//!
//! # Architecture
//!
//! - [`DiffusionState`]: rolling two-row error accumulator, owned by one
//!   dithering call and discarded at completion.
//! - [`NoiseSource`]: seedable uniform noise generator; reproducibility is
//!   a caller-controlled input, never hidden process state.
//! - [`floyd_steinberg`]: the single-pass engine.
//!
//! The scan is strictly left-to-right, top-to-bottom. The ordering is
//! load-bearing: each pixel's effective value depends on error diffused
//! from already-visited neighbors, so noise=0 runs are byte-for-byte
//! deterministic.

mod floyd_steinberg;
mod noise;

pub use floyd_steinberg::floyd_steinberg;
pub use noise::NoiseSource;

/// Floyd-Steinberg diffusion kernel.
///
/// Distributes 100% of the quantization error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Entries are `(dx, dy, weight)`; each neighbor receives
/// `error * weight / 16`. Shares falling outside the raster are dropped.
const FLOYD_STEINBERG_KERNEL: [(i32, i32, f32); 4] = [
    (1, 0, 7.0),  // right
    (-1, 1, 3.0), // below-left
    (0, 1, 5.0),  // below
    (1, 1, 1.0),  // below-right
];

const KERNEL_DIVISOR: f32 = 16.0;

/// Rolling two-row error accumulator for the diffusion scan.
///
/// The Floyd-Steinberg kernel reaches one row ahead, so only two rows are
/// live at any time: the current row's still-unprocessed carried error and
/// the row below accumulating diffused error. Keeping the window this small
/// keeps ownership single-threaded and local to one invocation instead of
/// sharing a full-image matrix.
#[derive(Debug)]
struct DiffusionState {
    current: Vec<f32>,
    next: Vec<f32>,
    width: usize,
}

impl DiffusionState {
    fn new(width: usize) -> Self {
        Self {
            current: vec![0.0; width],
            next: vec![0.0; width],
            width,
        }
    }

    /// Error carried into the pixel at `x` on the current row.
    #[inline]
    fn carried(&self, x: usize) -> f32 {
        self.current[x]
    }

    /// Diffuse an error share to `(x + dx, y + dy)`. Shares aimed outside
    /// the raster are dropped; border pixels receive no wraparound.
    #[inline]
    fn add(&mut self, x: usize, dx: i32, dy: i32, share: f32) {
        let tx = x as i64 + dx as i64;
        if tx < 0 || tx >= self.width as i64 {
            return;
        }
        match dy {
            0 => self.current[tx as usize] += share,
            _ => self.next[tx as usize] += share,
        }
    }

    /// Advance to the next row: the finished row's buffer is recycled as
    /// the new accumulating row.
    fn advance_row(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_weights_sum_to_divisor() {
        let sum: f32 = FLOYD_STEINBERG_KERNEL.iter().map(|(_, _, w)| w).sum();
        assert_eq!(sum, KERNEL_DIVISOR, "Floyd-Steinberg propagates 100% of error");
    }

    #[test]
    fn test_kernel_reaches_one_row_ahead() {
        let max_dy = FLOYD_STEINBERG_KERNEL
            .iter()
            .map(|(_, dy, _)| *dy)
            .max()
            .unwrap();
        assert_eq!(max_dy, 1);
    }

    #[test]
    fn test_diffusion_state_carries_error() {
        let mut state = DiffusionState::new(4);
        state.add(0, 1, 0, 0.5);
        assert_eq!(state.carried(1), 0.5);
        assert_eq!(state.carried(0), 0.0);
    }

    #[test]
    fn test_diffusion_state_drops_out_of_bounds() {
        let mut state = DiffusionState::new(2);
        state.add(0, -1, 1, 1.0); // below-left of x=0
        state.add(1, 1, 0, 1.0); // right of last column
        state.advance_row();
        assert_eq!(state.carried(0), 0.0);
        assert_eq!(state.carried(1), 0.0);
    }

    #[test]
    fn test_diffusion_state_advance_rotates_rows() {
        let mut state = DiffusionState::new(3);
        state.add(0, 0, 1, 0.25); // below
        assert_eq!(state.carried(0), 0.0);
        state.advance_row();
        assert_eq!(state.carried(0), 0.25);
        state.advance_row();
        assert_eq!(state.carried(0), 0.0);
    }
}
