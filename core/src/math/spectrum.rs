use crate::prelude::{SignalError, SignalResult};
use ndarray::{Array1, ArrayView1};
use num_complex::Complex64;
use rustfft::{num_traits::Zero, Fft, FftPlanner};
use std::sync::Arc;

/// One-sided amplitude spectrum of evenly sampled real series.
///
/// Series are zero-padded or cut to the planned length. Bin amplitudes are
/// normalised so a sinusoid that completes a whole number of cycles over the
/// window reports its own amplitude.
pub struct SpectrumHelper {
    fft: Arc<dyn Fft<f64>>,
    len: usize,
}

impl SpectrumHelper {
    pub fn new(len: usize) -> Self {
        let len = len.max(1);
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(len);
        Self { fft, len }
    }

    pub fn bins(&self) -> usize {
        self.len / 2 + 1
    }

    pub fn amplitudes(&self, series: ArrayView1<f64>) -> SignalResult<Array1<f64>> {
        if series.is_empty() {
            return Err(SignalError::EmptySeries);
        }

        let mut buffer: Vec<Complex64> = series
            .iter()
            .take(self.len)
            .map(|&value| Complex64::new(value, 0.0))
            .collect();
        buffer.resize(self.len, Complex64::zero());
        self.fft.process(&mut buffer);

        let n = self.len as f64;
        let nyquist = (self.len % 2 == 0).then_some(self.len / 2);
        Ok(Array1::from_shape_fn(self.bins(), |k| {
            let magnitude = buffer[k].norm();
            if k == 0 || Some(k) == nyquist {
                magnitude / n
            } else {
                2.0 * magnitude / n
            }
        }))
    }

    /// Frequency (cycles per day) of each bin for a sample spacing of `step` days.
    ///
    /// `step` must be positive and finite.
    pub fn frequencies(&self, step: f64) -> SignalResult<Array1<f64>> {
        if !(step.is_finite() && step > 0.0) {
            return Err(SignalError::InvalidStep(step));
        }
        let span = self.len as f64 * step;
        Ok(Array1::from_shape_fn(self.bins(), |k| k as f64 / span))
    }

    /// Period of the strongest non-DC bin, `None` when there is no such bin.
    pub fn dominant_period(&self, series: ArrayView1<f64>, step: f64) -> SignalResult<Option<f64>> {
        let frequencies = self.frequencies(step)?;
        let amplitudes = self.amplitudes(series)?;

        let strongest = amplitudes
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, _)| 1.0 / frequencies[k]);
        Ok(strongest)
    }
}
