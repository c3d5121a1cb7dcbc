//! Foundation types for land-use stratified sampling.
//!
//! This crate provides the input vocabulary of the sampling design engine.
//! Every other strata crate depends on `strata-types`.
//!
//! # Key Types
//!
//! - [`LandUse`] — Closed set of land-use categories used as stratification keys
//! - [`Language`] — Display language for land-use labels
//! - [`SamplePlot`] — Trait for anything that can be stratified by land use
//! - [`Plot`] — Concrete, immutable sample plot record

pub mod error;
pub mod land_use;
pub mod plot;

pub use error::TypeError;
pub use land_use::{LandUse, Language};
pub use plot::{Plot, SamplePlot};
