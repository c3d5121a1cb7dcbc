use std::collections::BTreeMap;

use strata_types::LandUse;

/// Validation state of a sampling design.
///
/// Inclusion probabilities exist only inside `Validated`, so a design can
/// never expose probabilities that were computed before its last change.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DesignState {
    /// Some stratum changed (or nothing was checked yet).
    #[default]
    Unvalidated,
    /// Every stratum passed validation; holds one probability per stratum.
    Validated(BTreeMap<LandUse, f64>),
}

impl DesignState {
    pub fn is_validated(&self) -> bool {
        matches!(self, Self::Validated(_))
    }

    /// Inclusion probability of a land use, when validated.
    pub fn probability(&self, land_use: LandUse) -> Option<f64> {
        match self {
            Self::Validated(probabilities) => probabilities.get(&land_use).copied(),
            Self::Unvalidated => None,
        }
    }
}
