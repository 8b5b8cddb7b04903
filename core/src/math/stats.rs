use ndarray::ArrayView1;

/// Summary statistics for generated series.
pub struct StatsHelper;

impl StatsHelper {
    pub fn rms(samples: ArrayView1<f64>) -> f64 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f64 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f64).sqrt()
    }

    pub fn mean(samples: ArrayView1<f64>) -> f64 {
        samples.mean().unwrap_or(0.0)
    }

    /// Largest absolute value, zero for an empty series.
    pub fn peak(samples: ArrayView1<f64>) -> f64 {
        samples.iter().fold(0.0, |acc: f64, &v| acc.max(v.abs()))
    }
}
