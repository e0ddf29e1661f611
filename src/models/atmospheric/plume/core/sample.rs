use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, MassDensity, Time};

/// Concentration at one point on the downwind axis.
///
/// Quantities serialize as SI base-unit numbers: metres, kg/m³, and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationSample {
    /// Downwind distance from the source.
    pub distance: Length,

    /// Concentration at the receptor.
    pub concentration: MassDensity,

    /// Plume travel time from the source, `distance / wind velocity`.
    pub time: Time,
}
