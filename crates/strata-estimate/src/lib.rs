//! Point estimators for stratified populations.
//!
//! The sampling design engine never looks inside an estimator. It only hands
//! a [`PointEstimatorFactory`] the ordered list of strata with their
//! estimated population sizes. This crate defines that boundary and ships a
//! default estimator:
//! - [`StratumSize`] pairs (stratum name, population size)
//! - [`PointEstimatorFactory`] trait boundary
//! - [`StratifiedPopulationEstimate`] with stratified point estimates of the
//!   total and the mean

pub mod error;
pub mod factory;
pub mod stratified;

pub use error::EstimateError;
pub use factory::{PointEstimatorFactory, StratifiedEstimateFactory, StratumSize};
pub use stratified::StratifiedPopulationEstimate;
