//! Synthetic time series for spectral-analysis demonstrations.
//!
//! Signals are sums of sinusoids with a known period, shift and amplitude,
//! plus uniform noise drawn from a caller-owned random source, so the ground
//! truth behind every generated series is always available.

pub mod config;
pub mod math;
pub mod noise;
pub mod prelude;
pub mod signal;
pub mod telemetry;

pub use prelude::{SignalError, SignalResult};
pub use signal::{compose, sinusoid, synthetic_data, try_synthetic_data, ComponentSet, Sinusoid};
