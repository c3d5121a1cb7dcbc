//! Land-use stratified sampling design.
//!
//! Sample plots are grouped into one stratum per land use. Once the caller
//! has assigned the area each land use covers, the design is validated and
//! yields per-plot inclusion probabilities and stratified point estimators
//! over the whole population or over a subdomain of land uses.
//!
//! # Quick Start
//!
//! ```rust
//! use strata_design::{LandUse, Plot, StrataManager};
//!
//! let plots = vec![
//!     Plot::new("1", 0.04, LandUse::WoodProduction),
//!     Plot::new("2", 0.04, LandUse::WoodProduction),
//! ];
//! let mut manager = StrataManager::new(&plots).unwrap();
//! manager.set_stratum_area_ha(LandUse::WoodProduction, 100.0).unwrap();
//! let p = manager.inclusion_probability_for_land_use(LandUse::WoodProduction).unwrap();
//! assert!((p - 0.0008).abs() < 1e-12);
//! ```

pub mod config;
pub mod error;
pub mod manager;
pub mod state;
pub mod stratum;

// Re-exports for convenience.
pub use config::DesignConfig;
pub use error::{ConfigError, ConstructionError, DomainError};
pub use manager::StrataManager;
pub use state::DesignState;
pub use stratum::{Stratum, StratumSummary};

pub use strata_estimate::{
    EstimateError, PointEstimatorFactory, StratifiedEstimateFactory, StratifiedPopulationEstimate,
    StratumSize,
};
pub use strata_types::{LandUse, Language, Plot, SamplePlot};
