/// Errors produced while building or feeding a point estimator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EstimateError {
    /// The stratum list was empty.
    #[error("an estimator needs at least one stratum")]
    NoStrata,

    /// Two strata share a name.
    #[error("stratum '{0}' is listed more than once")]
    DuplicateStratum(String),

    /// A population size is zero, negative or not finite.
    #[error("population size of stratum '{name}' must be positive and finite, got {size}")]
    InvalidPopulationSize { name: String, size: f64 },

    /// An observation named a stratum the estimator does not know.
    #[error("estimator has no stratum named '{0}'")]
    UnknownStratum(String),

    /// An observed value is NaN or infinite.
    #[error("observation for stratum '{name}' is not finite: {value}")]
    NonFiniteObservation { name: String, value: f64 },

    /// A total or mean was requested before every stratum had a value.
    #[error("stratum '{0}' has no observations")]
    NoObservations(String),
}
