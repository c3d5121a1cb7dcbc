use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Language used for human-readable land-use labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    French,
}

/// Land-use category of a sample plot.
///
/// The land use is the stratification key of the sampling design. The
/// natural ordering follows declaration order, which is also the order in
/// which strata are listed to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LandUse {
    /// Land for wood production without constraints.
    WoodProduction,
    /// Unproductive land (e.g., bare land, unforested peatland).
    Unproductive,
    /// Conservation areas.
    Conservation,
    /// Land for wood production with constraints (e.g., species habitat).
    SensitiveWoodProduction,
}

impl LandUse {
    /// Every land use, in natural order.
    pub const ALL: [LandUse; 4] = [
        Self::WoodProduction,
        Self::Unproductive,
        Self::Conservation,
        Self::SensitiveWoodProduction,
    ];

    /// Stable identifier of the category.
    ///
    /// This is the stratum name handed to point estimators, and the key
    /// used to order strata in an estimator.
    pub fn name(&self) -> &'static str {
        match self {
            Self::WoodProduction => "WoodProduction",
            Self::Unproductive => "Unproductive",
            Self::Conservation => "Conservation",
            Self::SensitiveWoodProduction => "SensitiveWoodProduction",
        }
    }

    /// Whether harvesting is allowed in this land use.
    pub fn is_harvesting_allowed(&self) -> bool {
        matches!(self, Self::WoodProduction | Self::SensitiveWoodProduction)
    }

    /// Human-readable label in the requested language.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::WoodProduction, Language::English) => "Wood production",
            (Self::WoodProduction, Language::French) => "Production ligneuse",
            (Self::Unproductive, Language::English) => "Unproductive",
            (Self::Unproductive, Language::French) => "Improductif",
            (Self::Conservation, Language::English) => "Conservation",
            (Self::Conservation, Language::French) => "Conservation",
            (Self::SensitiveWoodProduction, Language::English) => {
                "Wood production with constraints"
            }
            (Self::SensitiveWoodProduction, Language::French) => {
                "Production ligneuse avec contraintes"
            }
        }
    }
}

impl fmt::Display for LandUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Language::English))
    }
}

impl FromStr for LandUse {
    type Err = TypeError;

    /// Parse a land use from its [`LandUse::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lu| lu.name() == s)
            .ok_or_else(|| TypeError::UnknownLandUse(s.to_string()))
    }
}
