use serde::{Deserialize, Serialize};

use crate::error::EstimateError;
use crate::stratified::StratifiedPopulationEstimate;

/// A stratum as seen by an estimator: its name and the estimated number of
/// sampling units it represents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StratumSize {
    pub name: String,
    pub population_size: f64,
}

impl StratumSize {
    pub fn new(name: impl Into<String>, population_size: f64) -> Self {
        Self {
            name: name.into(),
            population_size,
        }
    }
}

/// Construction boundary for point estimators.
///
/// The design engine calls [`build`](Self::build) with strata in a
/// deterministic order and returns whatever the factory produces.
pub trait PointEstimatorFactory {
    type Estimator;

    fn build(&self, strata: Vec<StratumSize>) -> Result<Self::Estimator, EstimateError>;
}

/// Factory for [`StratifiedPopulationEstimate`].
#[derive(Clone, Copy, Debug, Default)]
pub struct StratifiedEstimateFactory;

impl PointEstimatorFactory for StratifiedEstimateFactory {
    type Estimator = StratifiedPopulationEstimate;

    fn build(&self, strata: Vec<StratumSize>) -> Result<Self::Estimator, EstimateError> {
        StratifiedPopulationEstimate::new(strata)
    }
}
