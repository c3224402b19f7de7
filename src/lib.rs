//! ofdm_sim - Illustrative OFDM impairment models for course charts
//!
//! Stateless generators that synthesize the data series behind an OFDM
//! teaching visualizer: noisy QPSK constellations, an illustrative BER
//! waterfall, a multi-tone symbol waveform, a cyclic-prefix/ISI sweep, a
//! carrier-frequency-offset impairment, and a PAPR-reducing Selected
//! Mapping search.
//!
//! These are chart models, not a transceiver: no modulation pipeline, no
//! FFT, no bit-level coding. The closed-form curves are intentionally rough
//! approximations whose exact shape is part of the contract with the
//! charts they drive.
//!
//! Every stochastic routine takes a `&mut ChaCha8Rng` drawn by the caller,
//! so runs are reproducible from a seed and concurrent callers simply use
//! one RNG each. Nothing in the crate holds state between calls.

pub mod ber;
pub mod cfo;
pub mod constellation;
pub mod cp;
pub mod error;
pub mod noise;
pub mod papr;
pub mod types;
pub mod waveform;

// Re-export core types and entry points for convenience
pub use ber::theoretical_ber;
pub use cfo::cfo_constellation;
pub use constellation::qpsk_constellation;
pub use cp::cp_performance;
pub use error::{Result, SimError};
pub use noise::NoiseGenerator;
pub use papr::{papr_search, papr_search_candidates, PaprResult};
pub use types::{BerPoint, Point, PointLabel};
pub use waveform::ofdm_waveform;
