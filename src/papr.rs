//! Peak-to-average power ratio and Selected Mapping search
//!
//! Builds candidate real-valued OFDM symbols as phase-randomized sums over
//! an active band of subcarriers, scores each by PAPR, and keeps the best.
//! With SLM enabled the search tries 8 independent phase draws; the
//! best-of-N order statistic is what pulls the expected PAPR down.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Result, SimError};
use crate::types::Point;

/// FFT-size analog: samples per symbol and total subcarrier slots.
pub const SYMBOL_LEN: usize = 64;

/// Active subcarrier indices (the in-band portion of the 64 slots).
pub const ACTIVE_BAND: std::ops::Range<usize> = 11..54;

/// Candidate draws when SLM is enabled.
pub const SLM_CANDIDATES: usize = 8;

/// Mean-power threshold below which the PAPR ratio is degenerate.
const POWER_EPSILON: f64 = 1e-12;

/// Result of a PAPR search: the selected time-domain symbol and its PAPR.
#[derive(Debug, Clone, PartialEq)]
pub struct PaprResult {
    /// Selected symbol; x is the sample index, y the amplitude.
    pub points: Vec<Point>,
    /// PAPR of the selected symbol in dB. `f64::INFINITY` in the
    /// degenerate near-zero-power case.
    pub papr_db: f64,
}

/// Synthesize one candidate symbol with a fresh uniform phase per active
/// subcarrier.
fn generate_symbol(rng: &mut ChaCha8Rng) -> Vec<f64> {
    let phases: Vec<f64> = ACTIVE_BAND
        .map(|_| rng.gen::<f64>() * 2.0 * std::f64::consts::PI)
        .collect();

    (0..SYMBOL_LEN)
        .map(|t| {
            ACTIVE_BAND
                .zip(phases.iter())
                .map(|(k, &phase)| {
                    let arg = 2.0 * std::f64::consts::PI * k as f64 * t as f64
                        / SYMBOL_LEN as f64;
                    (arg + phase).cos()
                })
                .sum()
        })
        .collect()
}

/// PAPR of a real signal in dB.
///
/// A mean power below epsilon (all active phases combining destructively
/// everywhere) is reported as `f64::INFINITY` rather than dividing toward
/// a meaningless ratio.
fn papr_db(signal: &[f64]) -> f64 {
    let power: Vec<f64> = signal.iter().map(|v| v * v).collect();
    let peak = power.iter().cloned().fold(0.0, f64::max);
    let mean = power.iter().sum::<f64>() / power.len() as f64;

    if mean < POWER_EPSILON {
        return f64::INFINITY;
    }

    10.0 * (peak / mean).log10()
}

/// Run the SLM search over an explicit number of candidate symbols and
/// return the one with minimum PAPR.
pub fn papr_search_candidates(
    candidates: usize,
    rng: &mut ChaCha8Rng,
) -> Result<PaprResult> {
    if candidates == 0 {
        return Err(SimError::InvalidArgument(
            "candidate count must be positive".into(),
        ));
    }

    // The first candidate seeds the selection, so even a degenerate
    // all-infinite run returns a symbol rather than an empty series
    let mut best_signal = generate_symbol(rng);
    let mut best_papr = papr_db(&best_signal);

    for _ in 1..candidates {
        let signal = generate_symbol(rng);
        let papr = papr_db(&signal);

        if papr < best_papr {
            best_signal = signal;
            best_papr = papr;
        }
    }

    let points = best_signal
        .iter()
        .enumerate()
        .map(|(t, &y)| Point::new(t as f64, y))
        .collect();

    Ok(PaprResult {
        points,
        papr_db: best_papr,
    })
}

/// Convenience entry point: 8 candidates with SLM enabled, 1 without.
pub fn papr_search(slm_enabled: bool, rng: &mut ChaCha8Rng) -> Result<PaprResult> {
    let candidates = if slm_enabled { SLM_CANDIDATES } else { 1 };
    papr_search_candidates(candidates, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_zero_candidates_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(papr_search_candidates(0, &mut rng).is_err());
    }

    #[test]
    fn test_symbol_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let result = papr_search(false, &mut rng).unwrap();

        assert_eq!(result.points.len(), SYMBOL_LEN);
        for (t, p) in result.points.iter().enumerate() {
            assert_eq!(p.x, t as f64);
            assert!(p.y.is_finite(), "Non-finite amplitude at sample {}", t);
        }
        assert!(result.papr_db.is_finite(),
            "PAPR {} should be finite for a random phase draw", result.papr_db);
    }

    #[test]
    fn test_papr_positive() {
        // Peak power can never fall below mean power
        for seed in [1u64, 2, 3, 4, 5] {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let result = papr_search(true, &mut rng).unwrap();
            assert!(result.papr_db > 0.0,
                "PAPR {} dB should be positive (seed {})", result.papr_db, seed);
        }
    }

    #[test]
    fn test_slm_lowers_average_papr() {
        let runs = 200;

        let mut sum_slm = 0.0;
        let mut sum_single = 0.0;

        for seed in 0..runs {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            sum_slm += papr_search(true, &mut rng).unwrap().papr_db;

            let mut rng = ChaCha8Rng::seed_from_u64(seed + 10_000);
            sum_single += papr_search(false, &mut rng).unwrap().papr_db;
        }

        let avg_slm = sum_slm / runs as f64;
        let avg_single = sum_single / runs as f64;

        assert!(avg_slm < avg_single,
            "SLM average PAPR {:.2} dB should beat single-candidate {:.2} dB",
            avg_slm, avg_single);
    }

    #[test]
    fn test_selected_candidate_is_minimum() {
        // Re-running the same seed with fewer candidates can never yield
        // a strictly smaller PAPR than the full search over that seed.
        let mut rng_full = ChaCha8Rng::seed_from_u64(42);
        let full = papr_search_candidates(8, &mut rng_full).unwrap();

        let mut rng_prefix = ChaCha8Rng::seed_from_u64(42);
        let prefix = papr_search_candidates(3, &mut rng_prefix).unwrap();

        assert!(full.papr_db <= prefix.papr_db,
            "8-candidate PAPR {:.3} exceeds 3-candidate prefix {:.3}",
            full.papr_db, prefix.papr_db);
    }

    #[test]
    fn test_every_candidate_count_returns_full_symbol() {
        // The first candidate seeds the selection, so no candidate count
        // can ever yield an empty series or a placeholder PAPR
        for candidates in 1..=SLM_CANDIDATES {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let result = papr_search_candidates(candidates, &mut rng).unwrap();

            assert_eq!(result.points.len(), SYMBOL_LEN,
                "{} candidates returned {} points", candidates, result.points.len());
            assert!(result.papr_db > 0.0,
                "{} candidates returned PAPR {} dB", candidates, result.papr_db);
        }
    }

    #[test]
    fn test_degenerate_power_reports_infinity() {
        assert_eq!(papr_db(&[0.0; SYMBOL_LEN]), f64::INFINITY);
        assert_eq!(papr_db(&[1e-9; SYMBOL_LEN]), f64::INFINITY);
    }

    #[test]
    fn test_papr_of_constant_signal_is_zero_db() {
        // Peak equals mean for a constant, so the ratio is exactly 1
        let papr = papr_db(&[0.5; SYMBOL_LEN]);
        assert!(papr.abs() < 1e-12, "Constant-signal PAPR {} should be 0 dB", papr);
    }

    #[test]
    fn test_deterministic_same_seed() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(11);
        let mut rng2 = ChaCha8Rng::seed_from_u64(11);

        let a = papr_search(true, &mut rng1).unwrap();
        let b = papr_search(true, &mut rng2).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_active_band_energy_only() {
        // Correlate the selected symbol against in-band and out-of-band
        // subcarrier frequencies; only the active band should respond.
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let result = papr_search(false, &mut rng).unwrap();
        let signal: Vec<f64> = result.points.iter().map(|p| p.y).collect();

        let tone_energy = |k: usize| -> f64 {
            let mut sum_cos = 0.0;
            let mut sum_sin = 0.0;
            for (t, &s) in signal.iter().enumerate() {
                let arg = 2.0 * std::f64::consts::PI * k as f64 * t as f64
                    / SYMBOL_LEN as f64;
                sum_cos += s * arg.cos();
                sum_sin += s * arg.sin();
            }
            sum_cos * sum_cos + sum_sin * sum_sin
        };

        let in_band = tone_energy(20);
        let out_of_band = tone_energy(5);

        assert!(in_band > 100.0 * out_of_band.max(1e-12),
            "In-band energy {:.3} should dominate out-of-band {:.3}",
            in_band, out_of_band);
    }
}
