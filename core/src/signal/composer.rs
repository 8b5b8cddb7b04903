use crate::noise::uniform_noise;
use crate::prelude::{SignalError, SignalResult};
use crate::signal::components::ComponentSet;
use crate::telemetry::SignalLog;
use ndarray::{Array1, ArrayView1};
use rand::Rng;

/// Noise amplitude used when a caller has no preference.
pub const DEFAULT_NOISE_AMPLITUDE: f64 = 1.0;

/// Sums every component over `times` and adds `noise * U[0, 1)` per sample.
///
/// Draws exactly `times.len()` values from `rng`.
pub fn compose<R: Rng + ?Sized>(
    times: ArrayView1<f64>,
    components: &ComponentSet,
    noise: f64,
    rng: &mut R,
) -> Array1<f64> {
    let logger = SignalLog::new();
    let mut data = Array1::<f64>::zeros(times.len());

    for component in components {
        if !component.has_valid_period() {
            logger.invalid_period(component.period);
        }
        data += &component.evaluate(times);
    }

    data += &uniform_noise(times.len(), noise, rng);

    logger.composed(components.len(), noise, data.view());
    data
}

/// Lenient composition from parameter columns; mismatched columns are
/// truncated to the shortest one.
pub fn synthetic_data<R: Rng + ?Sized>(
    times: ArrayView1<f64>,
    periods: &[f64],
    shifts: &[f64],
    amplitudes: &[f64],
    noise: f64,
    rng: &mut R,
) -> Array1<f64> {
    let components = ComponentSet::zip_truncating(periods, shifts, amplitudes);
    compose(times, &components, noise, rng)
}

/// Strict composition: columns must have equal length, periods must be
/// positive and finite, and the noise amplitude finite.
pub fn try_synthetic_data<R: Rng + ?Sized>(
    times: ArrayView1<f64>,
    periods: &[f64],
    shifts: &[f64],
    amplitudes: &[f64],
    noise: f64,
    rng: &mut R,
) -> SignalResult<Array1<f64>> {
    let components = ComponentSet::from_columns(periods, shifts, amplitudes)?;
    if !noise.is_finite() {
        return Err(SignalError::InvalidNoise(noise));
    }
    Ok(compose(times, &components, noise, rng))
}
