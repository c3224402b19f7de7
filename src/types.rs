//! Chart-facing value types
//!
//! Every generator in this crate returns ordered sequences of these plain
//! values. Order is the render order: significant for line and waveform
//! traces, irrelevant for scatter clouds.

/// Tag attached to a subset of a series so the caller can render it
/// distinctly (e.g. highlight the currently-selected CP length).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLabel {
    /// A received (noise-corrupted) constellation sample.
    Received,
    /// The operating point matching the caller's current parameter.
    Current,
    /// A swept candidate that is not the current operating point.
    Simulated,
}

/// A single chart point, optionally labeled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub label: Option<PointLabel>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    pub fn labeled(x: f64, y: f64, label: PointLabel) -> Self {
        Self {
            x,
            y,
            label: Some(label),
        }
    }
}

/// One sample of a BER-vs-SNR curve.
///
/// `ber` is conceptually in (0, 1], but the illustrative closed-form model
/// can exceed 1 at very low SNR; callers must not assume a hard upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BerPoint {
    /// Signal-to-noise ratio in dB.
    pub snr_db: f64,
    /// Modeled bit error rate at that SNR.
    pub ber: f64,
}
