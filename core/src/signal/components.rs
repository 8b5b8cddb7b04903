use crate::prelude::{SignalError, SignalResult};
use crate::signal::sinusoid::Sinusoid;
use crate::telemetry::SignalLog;
use serde::{Deserialize, Serialize};

/// Ordered list of sinusoidal components making up one synthetic series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentSet {
    components: Vec<Sinusoid>,
}

impl ComponentSet {
    pub fn new(components: Vec<Sinusoid>) -> Self {
        Self { components }
    }

    /// Pairs the three columns index by index, stopping at the shortest one.
    pub fn zip_truncating(periods: &[f64], shifts: &[f64], amplitudes: &[f64]) -> Self {
        let components: Vec<Sinusoid> = periods
            .iter()
            .zip(shifts)
            .zip(amplitudes)
            .map(|((&period, &shift), &amplitude)| Sinusoid {
                period,
                shift,
                amplitude,
            })
            .collect();

        if components.len() != periods.len()
            || components.len() != shifts.len()
            || components.len() != amplitudes.len()
        {
            SignalLog::new().truncated(
                periods.len(),
                shifts.len(),
                amplitudes.len(),
                components.len(),
            );
        }

        Self { components }
    }

    /// Builds the set from three equal-length columns with valid periods.
    pub fn from_columns(periods: &[f64], shifts: &[f64], amplitudes: &[f64]) -> SignalResult<Self> {
        if periods.len() != shifts.len() || periods.len() != amplitudes.len() {
            return Err(SignalError::LengthMismatch {
                periods: periods.len(),
                shifts: shifts.len(),
                amplitudes: amplitudes.len(),
            });
        }

        let set = Self::zip_truncating(periods, shifts, amplitudes);
        set.validate()?;
        Ok(set)
    }

    pub fn validate(&self) -> SignalResult<()> {
        match self
            .components
            .iter()
            .position(|component| !component.has_valid_period())
        {
            Some(index) => Err(SignalError::InvalidPeriod {
                index,
                period: self.components[index].period,
            }),
            None => Ok(()),
        }
    }

    pub fn push(&mut self, component: Sinusoid) {
        self.components.push(component);
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sinusoid> {
        self.components.iter()
    }

    pub fn periods(&self) -> Vec<f64> {
        self.components.iter().map(|c| c.period).collect()
    }
}

impl FromIterator<Sinusoid> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Sinusoid>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ComponentSet {
    type Item = &'a Sinusoid;
    type IntoIter = std::slice::Iter<'a, Sinusoid>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
