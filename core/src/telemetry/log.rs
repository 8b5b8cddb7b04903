use crate::math::stats::StatsHelper;
use log::{debug, log_enabled, warn, Level};
use ndarray::ArrayView1;

const TARGET: &str = "synthcore::signal";

/// Emits generation events through the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalLog;

impl SignalLog {
    pub fn new() -> Self {
        Self
    }

    /// RMS of `data` is only computed when debug records are enabled.
    pub fn composed(&self, components: usize, noise: f64, data: ArrayView1<f64>) {
        if !log_enabled!(target: TARGET, Level::Debug) {
            return;
        }
        debug!(
            target: TARGET,
            "composed {} components over {} samples (noise {:.4}, RMS {:.4})",
            components,
            data.len(),
            noise,
            StatsHelper::rms(data)
        );
    }

    pub fn truncated(&self, periods: usize, shifts: usize, amplitudes: usize, used: usize) {
        warn!(
            target: TARGET,
            "parameter lengths differ ({} periods, {} shifts, {} amplitudes); using first {}",
            periods,
            shifts,
            amplitudes,
            used
        );
    }

    pub fn invalid_period(&self, period: f64) {
        warn!(
            target: TARGET,
            "period {} is not positive and finite; output will be degenerate",
            period
        );
    }
}
