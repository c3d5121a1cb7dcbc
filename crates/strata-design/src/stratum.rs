use std::fmt;

use serde::{Deserialize, Serialize};
use strata_types::LandUse;

use crate::error::{ConstructionError, DomainError};

/// Fewest plots for which an inclusion probability is defined.
pub const MIN_PLOTS_PER_STRATUM: usize = 2;

/// The plots of one land use, aggregated.
///
/// A stratum knows how many plots were sampled in its land use, the common
/// area of those plots, and (once assigned) the total area the land use
/// covers in the population. Strata are owned by a
/// [`StrataManager`](crate::StrataManager); their area can only change
/// through it.
#[derive(Clone, Debug, PartialEq)]
pub struct Stratum {
    land_use: LandUse,
    plot_count: usize,
    individual_plot_area_ha: f64,
    stratum_area_ha: Option<f64>,
}

impl Stratum {
    /// Create a stratum with no assigned area.
    pub fn new(
        land_use: LandUse,
        plot_count: usize,
        individual_plot_area_ha: f64,
    ) -> Result<Self, ConstructionError> {
        if !individual_plot_area_ha.is_finite() || individual_plot_area_ha < 0.0 {
            return Err(ConstructionError::InvalidPlotArea {
                land_use,
                area_ha: individual_plot_area_ha,
            });
        }
        Ok(Self {
            land_use,
            plot_count,
            individual_plot_area_ha,
            stratum_area_ha: None,
        })
    }

    pub fn land_use(&self) -> LandUse {
        self.land_use
    }

    pub fn plot_count(&self) -> usize {
        self.plot_count
    }

    pub fn individual_plot_area_ha(&self) -> f64 {
        self.individual_plot_area_ha
    }

    /// Area of the land use in the population, if assigned.
    pub fn stratum_area_ha(&self) -> Option<f64> {
        self.stratum_area_ha
    }

    /// Estimated number of sampling units represented by this stratum.
    ///
    /// Zero while no area is assigned or when plots have no area.
    pub fn population_size(&self) -> f64 {
        match self.stratum_area_ha {
            Some(area_ha) if self.individual_plot_area_ha > 0.0 => {
                area_ha / self.individual_plot_area_ha
            }
            _ => 0.0,
        }
    }

    pub(crate) fn set_stratum_area_ha(&mut self, area_ha: f64) -> Result<(), DomainError> {
        if !area_ha.is_finite() || area_ha <= 0.0 {
            return Err(DomainError::NonPositiveArea {
                land_use: self.land_use,
                area_ha,
            });
        }
        if self.plot_count == 0 {
            return Err(DomainError::AreaWithoutPlots(self.land_use));
        }
        self.stratum_area_ha = Some(area_ha);
        Ok(())
    }

    /// Check the stratum and compute its inclusion probability.
    ///
    /// The probability is the sampled area over the stratum area,
    /// `plot_count * individual_plot_area_ha / stratum_area_ha`. A
    /// `min_plots` below [`MIN_PLOTS_PER_STRATUM`] is raised to it.
    pub fn validate(&self, min_plots: usize) -> Result<f64, DomainError> {
        let min_plots = min_plots.max(MIN_PLOTS_PER_STRATUM);
        if self.plot_count < min_plots {
            return Err(DomainError::SampleTooSmall {
                land_use: self.land_use,
                plot_count: self.plot_count,
                minimum: min_plots,
            });
        }
        let area_ha = self
            .stratum_area_ha
            .ok_or(DomainError::AreaNotSet(self.land_use))?;
        Ok(self.plot_count as f64 * self.individual_plot_area_ha / area_ha)
    }

    /// Read-only snapshot of this stratum.
    pub fn summary(&self) -> StratumSummary {
        StratumSummary {
            land_use: self.land_use,
            plot_count: self.plot_count,
            individual_plot_area_ha: self.individual_plot_area_ha,
            stratum_area_ha: self.stratum_area_ha,
        }
    }
}

impl fmt::Display for Stratum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stratum {}; Nb plots = {}; Area (ha) = {}",
            self.land_use.name(),
            self.plot_count,
            self.stratum_area_ha.unwrap_or(0.0)
        )
    }
}

/// Detached copy of a stratum's state, for editors and reports.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StratumSummary {
    pub land_use: LandUse,
    pub plot_count: usize,
    pub individual_plot_area_ha: f64,
    pub stratum_area_ha: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wood(plot_count: usize) -> Stratum {
        Stratum::new(LandUse::WoodProduction, plot_count, 0.04).unwrap()
    }

    #[test]
    fn new_rejects_negative_plot_area() {
        let err = Stratum::new(LandUse::Conservation, 3, -0.01).unwrap_err();
        assert!(matches!(err, ConstructionError::InvalidPlotArea { .. }));
        assert!(Stratum::new(LandUse::Conservation, 3, f64::NAN).is_err());
        assert!(Stratum::new(LandUse::Conservation, 0, 0.0).is_ok());
    }

    #[test]
    fn new_stratum_has_no_area() {
        let s = wood(2);
        assert_eq!(s.stratum_area_ha(), None);
        assert_eq!(s.population_size(), 0.0);
    }

    #[test]
    fn area_must_be_positive() {
        let mut s = wood(2);
        assert_eq!(
            s.set_stratum_area_ha(0.0).unwrap_err(),
            DomainError::NonPositiveArea {
                land_use: LandUse::WoodProduction,
                area_ha: 0.0
            }
        );
        assert!(s.set_stratum_area_ha(-5.0).is_err());
        assert!(s.set_stratum_area_ha(f64::INFINITY).is_err());
        assert_eq!(s.stratum_area_ha(), None);
    }

    #[test]
    fn area_needs_plots() {
        let mut s = wood(0);
        assert_eq!(
            s.set_stratum_area_ha(10.0).unwrap_err(),
            DomainError::AreaWithoutPlots(LandUse::WoodProduction)
        );
    }

    #[test]
    fn validate_checks_sample_size_first() {
        let mut s = wood(1);
        s.set_stratum_area_ha(100.0).unwrap();
        assert!(matches!(
            s.validate(2).unwrap_err(),
            DomainError::SampleTooSmall { plot_count: 1, minimum: 2, .. }
        ));
        assert!(matches!(wood(0).validate(2), Err(DomainError::SampleTooSmall { .. })));
    }

    #[test]
    fn validate_never_accepts_a_single_plot() {
        let mut s = wood(1);
        s.set_stratum_area_ha(100.0).unwrap();
        assert!(matches!(
            s.validate(1).unwrap_err(),
            DomainError::SampleTooSmall { plot_count: 1, minimum: 2, .. }
        ));
        assert!(matches!(s.validate(0), Err(DomainError::SampleTooSmall { .. })));
    }

    #[test]
    fn population_size_without_plot_area_is_zero() {
        let mut s = Stratum::new(LandUse::Conservation, 2, 0.0).unwrap();
        s.set_stratum_area_ha(10.0).unwrap();
        assert_eq!(s.population_size(), 0.0);
    }

    #[test]
    fn validate_requires_area() {
        assert_eq!(
            wood(2).validate(2).unwrap_err(),
            DomainError::AreaNotSet(LandUse::WoodProduction)
        );
    }

    #[test]
    fn inclusion_probability_and_population_size() {
        let mut s = wood(2);
        s.set_stratum_area_ha(100.0).unwrap();
        assert!((s.validate(2).unwrap() - 0.0008).abs() < 1e-12);
        assert!((s.population_size() - 2500.0).abs() < 1e-8);
    }

    #[test]
    fn display() {
        let mut s = wood(2);
        s.set_stratum_area_ha(100.0).unwrap();
        assert_eq!(s.to_string(), "Stratum WoodProduction; Nb plots = 2; Area (ha) = 100");
    }

    #[test]
    fn summary_is_detached() {
        let mut s = wood(3);
        let before = s.summary();
        s.set_stratum_area_ha(50.0).unwrap();
        assert_eq!(before.stratum_area_ha, None);
        assert_eq!(s.summary().stratum_area_ha, Some(50.0));
        assert_eq!(s.summary().plot_count, 3);
    }
}
