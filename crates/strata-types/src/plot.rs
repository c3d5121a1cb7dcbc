use serde::{Deserialize, Serialize};

use crate::land_use::LandUse;

/// A sample plot that can be grouped into land-use strata.
///
/// Implemented by whatever plot type the caller's inventory model uses, so
/// the design engine never needs to own plot data.
pub trait SamplePlot {
    /// Identifier of the plot, unique within a sampling design.
    fn id(&self) -> &str;

    /// Area of the plot in hectares.
    fn area_ha(&self) -> f64;

    /// Land use the plot belongs to.
    fn land_use(&self) -> LandUse;
}

/// Immutable sample plot record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    id: String,
    area_ha: f64,
    land_use: LandUse,
}

impl Plot {
    pub fn new(id: impl Into<String>, area_ha: f64, land_use: LandUse) -> Self {
        Self {
            id: id.into(),
            area_ha,
            land_use,
        }
    }
}

impl SamplePlot for Plot {
    fn id(&self) -> &str {
        &self.id
    }

    fn area_ha(&self) -> f64 {
        self.area_ha
    }

    fn land_use(&self) -> LandUse {
        self.land_use
    }
}

impl<P: SamplePlot + ?Sized> SamplePlot for &P {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn area_ha(&self) -> f64 {
        (**self).area_ha()
    }

    fn land_use(&self) -> LandUse {
        (**self).land_use()
    }
}
