//! Additive White Gaussian Noise generator
//!
//! Uses the Box-Muller transform for Gaussian samples. This is the shared
//! stochastic primitive behind the constellation, CFO, and ICI models: each
//! of those draws independent Gaussian pairs and scales them to the noise
//! power implied by its parameters.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// AWGN generator with configurable power
pub struct NoiseGenerator {
    /// Standard deviation (sqrt of noise power)
    std_dev: f64,

    /// Internal RNG
    rng: ChaCha8Rng,

    /// Cached second sample from Box-Muller
    cached: Option<f64>,
}

impl NoiseGenerator {
    /// Create a generator producing N(0, noise_power) samples.
    ///
    /// A child RNG is derived from `seed_rng`, so two generators built from
    /// the same seed RNG state are independent yet reproducible.
    pub fn new(noise_power: f64, seed_rng: &mut ChaCha8Rng) -> Self {
        let std_dev = noise_power.sqrt();

        // Create a new RNG with a derived seed
        let seed: u64 = seed_rng.gen();
        let rng = ChaCha8Rng::seed_from_u64(seed);

        Self {
            std_dev,
            rng,
            cached: None,
        }
    }

    /// Generate two independent Gaussian samples with one Box-Muller draw.
    ///
    /// The constellation models add one pair per symbol (I axis, Q axis),
    /// so the natural unit here is the pair rather than the single sample.
    pub fn next_pair(&mut self) -> (f64, f64) {
        let u1: f64 = self.rng.gen();
        let u2: f64 = self.rng.gen();

        // rand's gen::<f64>() covers [0, 1); clamp away from 0 so the log
        // never produces a non-finite sample
        let u1 = u1.max(1e-10);

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        (r * theta.cos() * self.std_dev, r * theta.sin() * self.std_dev)
    }

    /// Generate the next single Gaussian noise sample.
    ///
    /// Caches the second Box-Muller sample so consecutive calls consume
    /// one uniform pair per two outputs.
    pub fn next_sample(&mut self) -> f64 {
        if let Some(cached) = self.cached.take() {
            return cached;
        }

        let (z0, z1) = self.next_pair();
        self.cached = Some(z1);
        z0
    }
}
