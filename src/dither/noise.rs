//! Seedable noise source for stochastic dithering.
//!
//! Wraps an explicitly seeded RNG so that reproducibility is a
//! caller-controlled input: a fixed seed gives byte-for-byte identical
//! output across runs, and no global random state is consulted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform noise generator threaded through one dithering call.
#[derive(Debug)]
pub struct NoiseSource {
    rng: StdRng,
}

impl NoiseSource {
    /// Deterministic source: the same seed always yields the same sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Non-reproducible source seeded from OS entropy, for callers that
    /// did not supply a seed.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Next perturbation draw, uniform in `[-0.5, 0.5]`.
    #[inline]
    pub fn next_unit(&mut self) -> f32 {
        self.rng.gen_range(-0.5f32..=0.5f32)
    }
}
