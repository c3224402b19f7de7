//! Carrier-frequency-offset constellation impairment
//!
//! Starts from the noisy QPSK cloud and layers on the two visible effects
//! of a residual carrier offset: common phase rotation and inter-carrier
//! interference. The rotation angle is drawn fresh per sample to depict an
//! averaged snapshot of the rotating constellation rather than a single
//! frozen phase; a real receiver would see a progressive per-symbol ramp,
//! and that simplification is deliberate here.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::constellation::{noise_std_dev, QPSK_TARGETS, SIGNAL_POWER};
use crate::error::{Result, SimError};
use crate::noise::NoiseGenerator;
use crate::types::Point;

/// Generate `count` QPSK symbols impaired by AWGN at `snr_db` plus a
/// normalized carrier frequency offset `cfo` (conventionally 0..=0.5).
///
/// At `cfo = 0` the output reduces exactly to the plain noisy
/// constellation: zero rotation, zero ICI power. Points carry no label.
pub fn cfo_constellation(
    cfo: f64,
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
    let mut awgn = NoiseGenerator::new(sigma * sigma, rng);

    // ICI acts as extra additive noise; power ~ cfo² (1 - sinc(cfo) heuristic)
    let ici_power = 0.5 * cfo * cfo * SIGNAL_POWER;
    let mut ici = NoiseGenerator::new(ici_power, rng);

    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let (tx, ty) = QPSK_TARGETS[rng.gen_range(0..QPSK_TARGETS.len())];
        let (z0, z1) = awgn.next_pair();
        let x = tx + z0;
        let y = ty + z1;

        // Common phase error: random magnitude-scaled snapshot rotation
        let angle = 2.0 * std::f64::consts::PI * cfo * (rng.gen::<f64>() * 2.0);
        let (sin, cos) = angle.sin_cos();
        let x_rot = x * cos - y * sin;
        let y_rot = x * sin + y * cos;

        let (ici_x, ici_y) = ici.next_pair();
        points.push(Point::new(x_rot + ici_x, y_rot + ici_y));
    }

    Ok(points)
}
