use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use strata_estimate::{
    PointEstimatorFactory, StratifiedEstimateFactory, StratifiedPopulationEstimate, StratumSize,
};
use strata_types::{LandUse, SamplePlot};
use tracing::{debug, warn};

use crate::config::DesignConfig;
use crate::error::{ConstructionError, DomainError};
use crate::state::DesignState;
use crate::stratum::{Stratum, StratumSummary};

/// Land-use stratification of a set of sample plots.
///
/// The manager groups plots into one [`Stratum`] per land use, lets the
/// caller assign the area of each land use, and validates the design lazily:
/// every query that depends on inclusion probabilities revalidates first if
/// an area changed since the last successful validation.
///
/// Validating queries take `&mut self`. Callers sharing a manager across
/// threads must serialize access themselves (e.g., `Mutex<StrataManager>`).
#[derive(Clone, Debug)]
pub struct StrataManager {
    strata: BTreeMap<LandUse, Stratum>,
    plot_index: HashMap<String, LandUse>,
    state: DesignState,
    config: DesignConfig,
}

impl StrataManager {
    /// Build the strata from a plot snapshot with the default configuration.
    pub fn new<I>(plots: I) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: SamplePlot,
    {
        Self::with_config(plots, DesignConfig::default())
    }

    /// Build the strata from a plot snapshot.
    ///
    /// Fails on a non-positive plot area, on plots of the same land use whose
    /// areas differ by more than the configured tolerance, and on duplicate
    /// plot ids. No stratum area is assigned.
    pub fn with_config<I>(plots: I, config: DesignConfig) -> Result<Self, ConstructionError>
    where
        I: IntoIterator,
        I::Item: SamplePlot,
    {
        config.validate()?;

        // land use -> (plot count, area of the first plot seen)
        let mut groups: BTreeMap<LandUse, (usize, f64)> = BTreeMap::new();
        let mut plot_index = HashMap::new();

        for plot in plots {
            let land_use = plot.land_use();
            let area_ha = plot.area_ha();
            if !area_ha.is_finite() || area_ha <= 0.0 {
                return Err(ConstructionError::InvalidPlotArea { land_use, area_ha });
            }

            match groups.entry(land_use) {
                Entry::Occupied(mut e) => {
                    let (count, expected_ha) = e.get_mut();
                    if (area_ha - *expected_ha).abs() > config.plot_area_tolerance_ha {
                        return Err(ConstructionError::InconsistentPlotAreas {
                            land_use,
                            plot_id: plot.id().to_string(),
                            expected_ha: *expected_ha,
                            found_ha: area_ha,
                        });
                    }
                    *count += 1;
                }
                Entry::Vacant(e) => {
                    e.insert((1, area_ha));
                }
            }

            if plot_index.insert(plot.id().to_string(), land_use).is_some() {
                return Err(ConstructionError::DuplicatePlotId(plot.id().to_string()));
            }
        }

        let strata = groups
            .into_iter()
            .map(|(land_use, (count, area_ha))| {
                Stratum::new(land_use, count, area_ha).map(|s| (land_use, s))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        debug!(
            strata = strata.len(),
            plots = plot_index.len(),
            "built land-use strata"
        );

        Ok(Self {
            strata,
            plot_index,
            state: DesignState::Unvalidated,
            config,
        })
    }

    pub fn config(&self) -> &DesignConfig {
        &self.config
    }

    pub fn state(&self) -> &DesignState {
        &self.state
    }

    pub fn is_validated(&self) -> bool {
        self.state.is_validated()
    }

    /// Read-only access to the stratum of a land use.
    pub fn stratum(&self, land_use: LandUse) -> Option<&Stratum> {
        self.strata.get(&land_use)
    }

    /// Number of plots sampled in a land use (0 if the design has none).
    pub fn plot_count_for_land_use(&self, land_use: LandUse) -> usize {
        self.strata.get(&land_use).map_or(0, Stratum::plot_count)
    }

    /// Validate every stratum and cache the inclusion probabilities.
    ///
    /// A no-op when the design is already validated. Stops at the first
    /// failing stratum (in land-use order) and leaves the design unvalidated.
    pub fn validate_design(&mut self) -> Result<(), DomainError> {
        if self.state.is_validated() {
            return Ok(());
        }

        let mut probabilities = BTreeMap::new();
        for (land_use, stratum) in &self.strata {
            match stratum.validate(self.config.min_plots_per_stratum) {
                Ok(p) => {
                    probabilities.insert(*land_use, p);
                }
                Err(e) => {
                    warn!(land_use = land_use.name(), error = %e, "sampling design is not valid");
                    return Err(e);
                }
            }
        }

        debug!(strata = probabilities.len(), "sampling design validated");
        self.state = DesignState::Validated(probabilities);
        Ok(())
    }

    /// Inclusion probability of the plots of a land use.
    pub fn inclusion_probability_for_land_use(
        &mut self,
        land_use: LandUse,
    ) -> Result<f64, DomainError> {
        self.validate_design()?;
        self.state
            .probability(land_use)
            .ok_or(DomainError::UnknownLandUse(land_use))
    }

    /// Inclusion probability of a single plot.
    pub fn inclusion_probability_for_plot(&mut self, plot_id: &str) -> Result<f64, DomainError> {
        self.validate_design()?;
        let land_use = *self
            .plot_index
            .get(plot_id)
            .ok_or_else(|| DomainError::UnknownPlot(plot_id.to_string()))?;
        self.state
            .probability(land_use)
            .ok_or(DomainError::UnknownLandUse(land_use))
    }

    /// Assign the area (ha) a land use covers in the population.
    ///
    /// Any successful assignment invalidates the design, even when the value
    /// is unchanged.
    pub fn set_stratum_area_ha(
        &mut self,
        land_use: LandUse,
        area_ha: f64,
    ) -> Result<(), DomainError> {
        let stratum = self
            .strata
            .get_mut(&land_use)
            .ok_or(DomainError::UnknownLandUse(land_use))?;
        stratum.set_stratum_area_ha(area_ha)?;
        self.state = DesignState::Unvalidated;
        debug!(land_use = land_use.name(), area_ha, "stratum area assigned");
        Ok(())
    }

    /// Sum of the assigned areas of some land uses.
    ///
    /// Unassigned areas count as zero. Duplicates are summed again.
    pub fn total_stratum_area_ha(&self, land_uses: &[LandUse]) -> Result<f64, DomainError> {
        if land_uses.is_empty() {
            return Err(DomainError::EmptyList);
        }
        let mut total_ha = 0.0;
        for land_use in land_uses {
            let stratum = self
                .strata
                .get(land_use)
                .ok_or(DomainError::UnknownLandUse(*land_use))?;
            total_ha += stratum.stratum_area_ha().unwrap_or(0.0);
        }
        Ok(total_ha)
    }

    /// Stratified point estimator over every stratum of the design.
    pub fn point_estimate(&mut self) -> Result<StratifiedPopulationEstimate, DomainError> {
        self.point_estimate_with(&StratifiedEstimateFactory)
    }

    /// Build a point estimator over every stratum with a custom factory.
    ///
    /// Strata are handed to the factory sorted by land-use name.
    pub fn point_estimate_with<F>(&mut self, factory: &F) -> Result<F::Estimator, DomainError>
    where
        F: PointEstimatorFactory,
    {
        self.validate_design()?;
        let mut sizes: Vec<StratumSize> = self.strata.values().map(stratum_size).collect();
        sizes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(factory.build(sizes)?)
    }

    /// Stratified point estimator restricted to some land uses.
    pub fn point_estimate_for_subdomains(
        &mut self,
        land_uses: &[LandUse],
    ) -> Result<StratifiedPopulationEstimate, DomainError> {
        self.point_estimate_for_subdomains_with(land_uses, &StratifiedEstimateFactory)
    }

    /// Build a point estimator over a subdomain with a custom factory.
    ///
    /// Duplicates in `land_uses` are dropped; strata are handed to the
    /// factory in first-seen order.
    pub fn point_estimate_for_subdomains_with<F>(
        &mut self,
        land_uses: &[LandUse],
        factory: &F,
    ) -> Result<F::Estimator, DomainError>
    where
        F: PointEstimatorFactory,
    {
        if land_uses.is_empty() {
            return Err(DomainError::EmptySelection);
        }

        let mut selected: Vec<LandUse> = Vec::with_capacity(land_uses.len());
        for land_use in land_uses {
            if selected.contains(land_use) {
                continue;
            }
            if !self.strata.contains_key(land_use) {
                return Err(DomainError::UnknownLandUse(*land_use));
            }
            selected.push(*land_use);
        }

        self.validate_design()?;
        let sizes = selected
            .iter()
            .filter_map(|land_use| self.strata.get(land_use))
            .map(stratum_size)
            .collect();
        Ok(factory.build(sizes)?)
    }

    /// Land uses of the design, in natural order.
    pub fn strata(&self) -> Vec<LandUse> {
        self.strata.keys().copied().collect()
    }

    /// Land uses of the design where harvesting is allowed, in natural order.
    pub fn harvestable_strata(&self) -> Vec<LandUse> {
        self.strata
            .keys()
            .copied()
            .filter(LandUse::is_harvesting_allowed)
            .collect()
    }

    /// Snapshot of every stratum, in natural land-use order.
    pub fn summaries(&self) -> Vec<StratumSummary> {
        self.strata.values().map(Stratum::summary).collect()
    }
}

fn stratum_size(stratum: &Stratum) -> StratumSize {
    StratumSize::new(stratum.land_use().name(), stratum.population_size())
}
