pub mod grid;
pub mod spectrum;
pub mod stats;

pub use grid::time_grid;
pub use spectrum::SpectrumHelper;
pub use stats::StatsHelper;
