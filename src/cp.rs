//! Cyclic-prefix length vs ISI penalty sweep
//!
//! Sweeps candidate cyclic-prefix lengths 0..=32 and maps each to an
//! effective BER at a fixed operating point. The model encodes one
//! qualitative fact: residual inter-symbol interference scales with the
//! portion of the channel's delay spread the prefix fails to cover, and
//! vanishes entirely once the prefix covers it.

use crate::error::{Result, SimError};
use crate::types::{Point, PointLabel};

/// Largest candidate CP length in the sweep.
pub const MAX_CP: usize = 32;

/// Error floor at the fixed operating SNR with no ISI (10^-4).
pub const BASELINE_BER: f64 = 1e-4;

/// Worst-case ISI penalty added when the prefix covers none of the
/// delay spread.
pub const ISI_PENALTY: f64 = 0.2;

/// Effective BER for one candidate CP length against a channel delay
/// spread, both in samples.
fn effective_ber(cp: usize, delay_spread: usize) -> f64 {
    // Fraction of the delay spread left uncovered, clamped to [0, 1]
    let isi_factor = if cp < delay_spread {
        (delay_spread - cp) as f64 / delay_spread as f64
    } else {
        0.0
    };

    BASELINE_BER + ISI_PENALTY * isi_factor * isi_factor
}

/// Sweep CP candidates 0..=32 and report each candidate's effective BER.
///
/// The candidate equal to `cp_length` is labeled [`PointLabel::Current`];
/// all others are [`PointLabel::Simulated`]. `delay_spread` must be
/// positive (the ISI fraction divides by it).
pub fn cp_performance(cp_length: usize, delay_spread: usize) -> Result<Vec<Point>> {
    if delay_spread == 0 {
        return Err(SimError::InvalidArgument(
            "delay spread must be positive".into(),
        ));
    }

    let points = (0..=MAX_CP)
        .map(|cp| {
            let label = if cp == cp_length {
                PointLabel::Current
            } else {
                PointLabel::Simulated
            };
            Point::labeled(cp as f64, effective_ber(cp, delay_spread), label)
        })
        .collect();

    Ok(points)
}
