//! Per-request source of randomness.
//!
//! One [`Generator`] owns both the seeded draw stream and the coherent noise
//! sampler for a single request. Nothing is shared between requests, so
//! concurrent generations cannot perturb each other's sequences.

use fastnoise_lite::{FastNoiseLite, NoiseType};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::Seed;

pub struct Generator {
  seed: Seed,
  rng: ChaCha8Rng,
  noise: FastNoiseLite,
}

impl Generator {
  /// Build the draw stream and a 2D OpenSimplex2 sampler from one seed.
  pub fn new(seed: Seed, frequency: f32) -> Self {
    let mut noise = FastNoiseLite::with_seed(seed.noise_seed());
    noise.set_noise_type(Some(NoiseType::OpenSimplex2));
    noise.set_frequency(Some(frequency));

    Self {
      seed,
      rng: ChaCha8Rng::seed_from_u64(seed.raw()),
      noise,
    }
  }

  pub fn seed(&self) -> Seed {
    self.seed
  }

  /// Next uniform draw in `[0, 1)`.
  #[inline]
  pub fn next_f32(&mut self) -> f32 {
    self.rng.random::<f32>()
  }

  /// Coherent noise in roughly `[-1, 1]`.
  #[inline]
  pub fn noise_2d(&self, x: f32, y: f32) -> f32 {
    self.noise.get_noise_2d(x, y)
  }
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod generator_test;
