use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded uniform random source for simulated measurement noise.
///
/// Reseeding with the same seed replays the same sequence of draws, so a
/// frame of computation can be reproduced exactly. The source is always
/// passed explicitly; there is no shared generator.
#[derive(Clone, Debug)]
pub struct NoiseSource {
    seed: u64,
    rng: StdRng,
}

impl NoiseSource {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restarts the sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Seed the current sequence started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in [0, 1).
    #[inline]
    pub fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Centered draw in [-amplitude/2, amplitude/2).
    #[inline]
    pub fn next_offset(&mut self, amplitude: f64) -> f64 {
        (self.next_unit() - 0.5) * amplitude
    }
}
