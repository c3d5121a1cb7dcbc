use std::collections::HashSet;

use crate::error::EstimateError;
use crate::factory::StratumSize;

/// Stratified point estimator of a population total and mean.
///
/// Each stratum carries its estimated population size `N_h`. Observations are
/// fed per stratum; the total is estimated as `sum(N_h * mean_h)` and the mean
/// as that total divided by `N = sum(N_h)`.
#[derive(Clone, Debug)]
pub struct StratifiedPopulationEstimate {
    strata: Vec<Entry>,
}

#[derive(Clone, Debug)]
struct Entry {
    size: StratumSize,
    observations: Vec<f64>,
}

impl Entry {
    fn sample_mean(&self) -> Option<f64> {
        if self.observations.is_empty() {
            return None;
        }
        Some(self.observations.iter().sum::<f64>() / self.observations.len() as f64)
    }
}

impl StratifiedPopulationEstimate {
    /// Create an estimator over the given strata, preserving their order.
    pub fn new(strata: Vec<StratumSize>) -> Result<Self, EstimateError> {
        if strata.is_empty() {
            return Err(EstimateError::NoStrata);
        }

        let mut seen = HashSet::new();
        for s in &strata {
            if !seen.insert(s.name.as_str()) {
                return Err(EstimateError::DuplicateStratum(s.name.clone()));
            }
            if !s.population_size.is_finite() || s.population_size <= 0.0 {
                return Err(EstimateError::InvalidPopulationSize {
                    name: s.name.clone(),
                    size: s.population_size,
                });
            }
        }

        Ok(Self {
            strata: strata
                .into_iter()
                .map(|size| Entry {
                    size,
                    observations: Vec::new(),
                })
                .collect(),
        })
    }

    /// Total number of sampling units across all strata.
    pub fn population_size(&self) -> f64 {
        self.strata.iter().map(|e| e.size.population_size).sum()
    }

    /// Stratum names in construction order.
    pub fn stratum_names(&self) -> Vec<&str> {
        self.strata.iter().map(|e| e.size.name.as_str()).collect()
    }

    /// The strata this estimator was built from.
    pub fn strata(&self) -> Vec<StratumSize> {
        self.strata.iter().map(|e| e.size.clone()).collect()
    }

    /// Population size of a single stratum.
    pub fn stratum_population_size(&self, name: &str) -> Option<f64> {
        self.entry(name).map(|e| e.size.population_size)
    }

    /// Record one observation (e.g., volume per plot) for a stratum.
    pub fn add_observation(&mut self, name: &str, value: f64) -> Result<(), EstimateError> {
        if !value.is_finite() {
            return Err(EstimateError::NonFiniteObservation {
                name: name.to_string(),
                value,
            });
        }
        let entry = self
            .strata
            .iter_mut()
            .find(|e| e.size.name == name)
            .ok_or_else(|| EstimateError::UnknownStratum(name.to_string()))?;
        entry.observations.push(value);
        Ok(())
    }

    /// Number of observations recorded for a stratum.
    pub fn observation_count(&self, name: &str) -> Option<usize> {
        self.entry(name).map(|e| e.observations.len())
    }

    /// Stratified estimate of the population total.
    ///
    /// Every stratum needs at least one observation.
    pub fn total(&self) -> Result<f64, EstimateError> {
        let mut total = 0.0;
        for entry in &self.strata {
            let mean = entry
                .sample_mean()
                .ok_or_else(|| EstimateError::NoObservations(entry.size.name.clone()))?;
            total += entry.size.population_size * mean;
        }
        Ok(total)
    }

    /// Stratified estimate of the population mean per sampling unit.
    pub fn mean(&self) -> Result<f64, EstimateError> {
        Ok(self.total()? / self.population_size())
    }

    fn entry(&self, name: &str) -> Option<&Entry> {
        self.strata.iter().find(|e| e.size.name == name)
    }
}
