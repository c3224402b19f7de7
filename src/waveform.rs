//! Time-domain OFDM symbol waveform
//!
//! Synthesizes the superposition of 8 sinusoidal subcarriers to mimic the
//! look of one OFDM symbol in time. The per-subcarrier phase offset is the
//! deterministic pseudo-phase k², not a fresh random draw: the rendered
//! waveform must be stable across re-renders, and true randomness here
//! would make every parameter change redraw an unrelated squiggle.

use crate::types::Point;

/// Number of summed subcarriers.
const NUM_SUBCARRIERS: usize = 8;

/// Samples per unit of symbol duration.
const SAMPLES_PER_UNIT: usize = 200;

/// Extra duration fraction when the cyclic prefix is shown.
const CP_DURATION: f64 = 1.25;

/// Generate the multi-tone symbol waveform, optionally extended by a
/// cyclic-prefix segment (duration 1.25 units instead of 1.0).
///
/// Deterministic in `add_cyclic_prefix` alone; x is the sample index and
/// y the amplitude normalized into roughly [-1, 1].
pub fn ofdm_waveform(add_cyclic_prefix: bool) -> Vec<Point> {
    let duration = if add_cyclic_prefix { CP_DURATION } else { 1.0 };
    let last_sample = (SAMPLES_PER_UNIT as f64 * duration) as usize;

    let mut points = Vec::with_capacity(last_sample + 1);
    for t in 0..=last_sample {
        let time = t as f64 / SAMPLES_PER_UNIT as f64;

        let mut amplitude = 0.0;
        for k in 1..=NUM_SUBCARRIERS {
            let k = k as f64;
            amplitude += (2.0 * std::f64::consts::PI * k * time + k * k).sin();
        }
        amplitude /= NUM_SUBCARRIERS as f64;

        points.push(Point::new(t as f64, amplitude));
    }

    points
}
