//! Closed-form BER-vs-SNR curve
//!
//! The curve is an intentionally rough stand-in for the true QPSK
//! error-function BER: `0.5·exp(-snr_linear/2)`. It exists to draw a
//! plausible waterfall shape, not to predict link performance, and the
//! exact formula is part of the contract — swapping in the erfc expression
//! would change every rendered chart.

use crate::types::BerPoint;

/// Evaluate the illustrative BER model over a sweep of SNR values (dB).
///
/// Deterministic; output order matches input order. Strictly decreasing in
/// SNR and never reaches zero.
pub fn theoretical_ber(snr_range_db: &[f64]) -> Vec<BerPoint> {
    snr_range_db
        .iter()
        .map(|&snr_db| {
            let linear_snr = 10.0_f64.powf(snr_db / 10.0);
            BerPoint {
                snr_db,
                ber: 0.5 * (-linear_snr / 2.0).exp(),
            }
        })
        .collect()
}
