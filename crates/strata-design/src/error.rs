use strata_estimate::EstimateError;
use strata_types::LandUse;

/// Errors raised while building a [`StrataManager`](crate::StrataManager)
/// from a plot snapshot. These always point at bad input data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    /// Two plots share the same id.
    #[error("duplicate plot id: {0}")]
    DuplicatePlotId(String),

    /// A plot's area differs from the first plot of its land use by more
    /// than the configured tolerance.
    #[error(
        "inconsistent plot areas in land use {land_use:?}: \
         plot '{plot_id}' has {found_ha} ha, expected {expected_ha} ha"
    )]
    InconsistentPlotAreas {
        land_use: LandUse,
        plot_id: String,
        expected_ha: f64,
        found_ha: f64,
    },

    /// A plot area is not a positive finite number.
    #[error("invalid plot area in land use {land_use:?}: {area_ha} ha")]
    InvalidPlotArea { land_use: LandUse, area_ha: f64 },

    /// The design configuration failed its own checks.
    #[error("invalid design configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised by mutations and queries of a constructed design.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// An assigned stratum area is zero, negative or not finite.
    #[error("stratum area for land use {land_use:?} must be greater than 0, got {area_ha}")]
    NonPositiveArea { land_use: LandUse, area_ha: f64 },

    /// Area assigned to a stratum with no plots.
    #[error("cannot assign an area to land use {0:?} which has no plots")]
    AreaWithoutPlots(LandUse),

    /// The stratum has fewer plots than the configured minimum.
    #[error("sample size of land use {land_use:?} is {plot_count}, smaller than {minimum}")]
    SampleTooSmall {
        land_use: LandUse,
        plot_count: usize,
        minimum: usize,
    },

    /// Validation reached a stratum whose area was never assigned.
    #[error("stratum area for land use {0:?} is not set")]
    AreaNotSet(LandUse),

    /// The land use has no stratum in this design.
    #[error("the design has no stratum for land use {0:?}")]
    UnknownLandUse(LandUse),

    /// No plot with this id was part of the snapshot.
    #[error("unknown plot id: {0}")]
    UnknownPlot(String),

    /// A land-use list argument was empty.
    #[error("land use list must not be empty")]
    EmptyList,

    /// A subdomain selection was empty.
    #[error("subdomain selection must contain at least one land use")]
    EmptySelection,

    /// The point estimator factory rejected the strata.
    #[error("estimator error: {0}")]
    Estimator(#[from] EstimateError),
}

/// Errors raised while reading a [`DesignConfig`](crate::DesignConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML text could not be deserialized.
    #[error("failed to parse design configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The parsed configuration failed validation.
    #[error(transparent)]
    Invalid(#[from] ConstructionError),
}
