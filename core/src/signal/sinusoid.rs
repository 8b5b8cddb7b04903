use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

fn unit_amplitude() -> f64 {
    1.0
}

/// One sinusoidal component, `amplitude * sin(2π / period * (t - shift))`.
///
/// Periods and shifts are in days. A missing `shift` deserializes to zero and a
/// missing `amplitude` to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sinusoid {
    pub period: f64,
    #[serde(default)]
    pub shift: f64,
    #[serde(default = "unit_amplitude")]
    pub amplitude: f64,
}

impl Sinusoid {
    pub fn new(period: f64) -> Self {
        Self {
            period,
            shift: 0.0,
            amplitude: unit_amplitude(),
        }
    }

    pub fn with_shift(mut self, shift: f64) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// ω = 2π / period. Infinite for a zero period.
    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI / self.period
    }

    /// Whether the period gives a meaningful waveform (finite and positive).
    pub fn has_valid_period(&self) -> bool {
        self.period.is_finite() && self.period > 0.0
    }

    pub fn value_at(&self, time: f64) -> f64 {
        self.amplitude * (self.angular_frequency() * (time - self.shift)).sin()
    }

    pub fn evaluate(&self, times: ArrayView1<f64>) -> Array1<f64> {
        sinusoid(times, self.period, self.shift, self.amplitude)
    }
}

/// Samples a single sinusoid at `times`.
///
/// The period is not checked: zero yields an infinite angular frequency and the
/// resulting NaNs propagate into the output.
pub fn sinusoid(times: ArrayView1<f64>, period: f64, shift: f64, amplitude: f64) -> Array1<f64> {
    let omega = 2.0 * PI / period;
    times.mapv(|t| amplitude * (omega * (t - shift)).sin())
}
