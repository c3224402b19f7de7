//! Error types for ofdm_sim

use thiserror::Error;

/// Simulation error type
#[derive(Error, Debug)]
pub enum SimError {
    /// A caller-supplied parameter is outside the routine's domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SimError>;
