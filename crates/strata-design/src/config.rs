use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConstructionError};
use crate::stratum::MIN_PLOTS_PER_STRATUM;

/// Configuration of the sampling design checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    /// Absolute tolerance (ha) when checking that all plots of a land use
    /// share the same area.
    pub plot_area_tolerance_ha: f64,
    /// Smallest number of plots a stratum needs for its inclusion
    /// probability to be computed. Never below 2.
    pub min_plots_per_stratum: usize,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            plot_area_tolerance_ha: 1e-8,
            min_plots_per_stratum: MIN_PLOTS_PER_STRATUM,
        }
    }
}

impl DesignConfig {
    /// Parse a configuration from TOML. Missing keys take their default.
    ///
    /// ```toml
    /// plot_area_tolerance_ha = 1e-6
    /// min_plots_per_stratum = 3
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive a design.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if !self.plot_area_tolerance_ha.is_finite() || self.plot_area_tolerance_ha < 0.0 {
            return Err(ConstructionError::InvalidConfig(format!(
                "plot_area_tolerance_ha must be a non-negative number, got {}",
                self.plot_area_tolerance_ha
            )));
        }
        if self.min_plots_per_stratum < MIN_PLOTS_PER_STRATUM {
            return Err(ConstructionError::InvalidConfig(format!(
                "min_plots_per_stratum must be at least {MIN_PLOTS_PER_STRATUM}, got {}",
                self.min_plots_per_stratum
            )));
        }
        Ok(())
    }
}
