pub mod components;
pub mod composer;
pub mod sinusoid;

pub use components::ComponentSet;
pub use composer::{compose, synthetic_data, try_synthetic_data, DEFAULT_NOISE_AMPLITUDE};
pub use sinusoid::{sinusoid, Sinusoid};
