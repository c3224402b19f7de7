//! Noisy QPSK constellation generator
//!
//! Scatters `count` received symbols around the four ideal QPSK points at
//! (±1, ±1). Noise power follows from the requested SNR with the signal
//! power fixed by the constellation geometry, and is split evenly between
//! the I and Q axes.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SimError};
use crate::noise::NoiseGenerator;
use crate::types::{Point, PointLabel};

/// Ideal QPSK symbol locations.
///
/// |s|² = 2 for every symbol, which fixes the signal power used in the
/// SNR → noise-power conversion.
pub const QPSK_TARGETS: [(f64, f64); 4] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (-1.0, -1.0),
    (1.0, -1.0),
];

/// QPSK signal power (squared distance from origin to any target).
pub const SIGNAL_POWER: f64 = 2.0;

/// Per-axis noise standard deviation for a given SNR in dB.
///
/// SNR = Ps / Pn, so Pn = Ps / 10^(snr_db/10); the noise power is split
/// between I and Q, giving sigma = sqrt(Pn / 2) per axis.
pub fn noise_std_dev(snr_db: f64) -> f64 {
    let noise_power = SIGNAL_POWER / 10.0_f64.powf(snr_db / 10.0);
    (noise_power / 2.0).sqrt()
}

/// Generate `count` noise-corrupted QPSK symbols at the given SNR.
///
/// Each point picks one of the four targets uniformly at random and adds
/// an independent Gaussian pair scaled to the per-axis sigma. Every output
/// point is labeled [`PointLabel::Received`].
pub fn qpsk_constellation(
    snr_db: f64,
    count: usize,
    rng: &mut ChaCha8Rng,
) -> Result<Vec<Point>> {
    if count == 0 {
        return Err(SimError::InvalidArgument(
            "constellation sample count must be positive".into(),
        ));
    }

    let sigma = noise_std_dev(snr_db);
    let mut noise = NoiseGenerator::new(sigma * sigma, rng);

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let (tx, ty) = QPSK_TARGETS[rng.gen_range(0..QPSK_TARGETS.len())];
        let (z0, z1) = noise.next_pair();
        points.push(Point::labeled(tx + z0, ty + z1, PointLabel::Received));
    }

    Ok(points)
}
