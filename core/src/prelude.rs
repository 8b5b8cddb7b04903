pub use crate::config::SyntheticConfig;
pub use crate::signal::{
    compose, sinusoid, synthetic_data, try_synthetic_data, ComponentSet, Sinusoid,
    DEFAULT_NOISE_AMPLITUDE,
};

/// Common error type for the strict generation paths.
#[derive(thiserror::Error, Debug)]
pub enum SignalError {
    #[error("parameter lengths differ: {periods} periods, {shifts} shifts, {amplitudes} amplitudes")]
    LengthMismatch {
        periods: usize,
        shifts: usize,
        amplitudes: usize,
    },
    #[error("component {index} has invalid period {period}")]
    InvalidPeriod { index: usize, period: f64 },
    #[error("noise amplitude must be finite, got {0}")]
    InvalidNoise(f64),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("sample spacing must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("series is empty")]
    EmptySeries,
}

pub type SignalResult<T> = Result<T, SignalError>;
