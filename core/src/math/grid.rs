use ndarray::Array1;

/// `count` evenly spaced times (days) starting at `start`.
pub fn time_grid(start: f64, step: f64, count: usize) -> Array1<f64> {
    Array1::from_shape_fn(count, |i| start + step * i as f64)
}
