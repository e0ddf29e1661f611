use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, MassRate, Velocity},
    length::meter,
    mass_rate::kilogram_per_second,
    velocity::meter_per_second,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

use super::{DispersionError, StabilityClass};

/// Source and meteorological inputs for one plume run.
///
/// Every value is validated at construction and the request cannot be
/// modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "RequestPayload", try_from = "RequestPayload")]
pub struct SimulationRequest {
    release_amount: MassRate,
    wind_velocity: Velocity,
    release_height: Length,
    stability_class: StabilityClass,
}

impl SimulationRequest {
    /// Constructs a validated request.
    ///
    /// # Errors
    ///
    /// Returns [`DispersionError::InvalidParameter`] if the release amount or
    /// wind velocity is not strictly positive, or the release height is negative.
    pub fn new(
        release_amount: MassRate,
        wind_velocity: Velocity,
        release_height: Length,
        stability_class: StabilityClass,
    ) -> Result<Self, DispersionError> {
        let release_amount = StrictlyPositive::new(release_amount)
            .map_err(DispersionError::invalid("release amount"))?;
        let wind_velocity = StrictlyPositive::new(wind_velocity)
            .map_err(DispersionError::invalid("wind velocity"))?;
        let release_height = NonNegative::new(release_height)
            .map_err(DispersionError::invalid("release height"))?;

        Ok(Self::from_constrained(
            release_amount,
            wind_velocity,
            release_height,
            stability_class,
        ))
    }

    /// Constructs a request from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        release_amount: Constrained<MassRate, StrictlyPositive>,
        wind_velocity: Constrained<Velocity, StrictlyPositive>,
        release_height: Constrained<Length, NonNegative>,
        stability_class: StabilityClass,
    ) -> Self {
        Self {
            release_amount: release_amount.into_inner(),
            wind_velocity: wind_velocity.into_inner(),
            release_height: release_height.into_inner(),
            stability_class,
        }
    }

    /// Source emission rate.
    #[must_use]
    pub fn release_amount(&self) -> MassRate {
        self.release_amount
    }

    /// Mean wind speed at release height.
    #[must_use]
    pub fn wind_velocity(&self) -> Velocity {
        self.wind_velocity
    }

    /// Source height above ground.
    #[must_use]
    pub fn release_height(&self) -> Length {
        self.release_height
    }

    #[must_use]
    pub fn stability_class(&self) -> StabilityClass {
        self.stability_class
    }
}

/// A 1 kg/s release at 3 m into a 5 m/s wind under neutral conditions.
impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            release_amount: MassRate::new::<kilogram_per_second>(1.0),
            wind_velocity: Velocity::new::<meter_per_second>(5.0),
            release_height: Length::new::<meter>(3.0),
            stability_class: StabilityClass::D,
        }
    }
}

/// Wire form of a [`SimulationRequest`], in SI base units.
///
/// Field names follow the camelCase layout of the archived records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    /// Release rate in kg/s.
    pub release_amount: f64,

    /// Wind speed in m/s.
    pub wind_velocity: f64,

    /// Release height in m.
    pub release_height: f64,

    /// Stability class label, `"A"` through `"F"`.
    pub stability_class: String,
}

impl TryFrom<RequestPayload> for SimulationRequest {
    type Error = DispersionError;

    fn try_from(payload: RequestPayload) -> Result<Self, Self::Error> {
        Self::new(
            MassRate::new::<kilogram_per_second>(payload.release_amount),
            Velocity::new::<meter_per_second>(payload.wind_velocity),
            Length::new::<meter>(payload.release_height),
            payload.stability_class.parse()?,
        )
    }
}

impl From<SimulationRequest> for RequestPayload {
    fn from(request: SimulationRequest) -> Self {
        Self {
            release_amount: request.release_amount.get::<kilogram_per_second>(),
            wind_velocity: request.wind_velocity.get::<meter_per_second>(),
            release_height: request.release_height.get::<meter>(),
            stability_class: request.stability_class.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    fn payload(q: f64, u: f64, h: f64, class: &str) -> RequestPayload {
        RequestPayload {
            release_amount: q,
            wind_velocity: u,
            release_height: h,
            stability_class: class.to_string(),
        }
    }

    #[test]
    fn accepts_ground_level_release() {
        let request = SimulationRequest::try_from(payload(1.0, 5.0, 0.0, "A")).unwrap();
        assert_eq!(request.release_height().get::<meter>(), 0.0);
        assert_eq!(request.stability_class(), StabilityClass::A);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let cases = [
            (payload(0.0, 5.0, 3.0, "D"), "release amount", ConstraintError::Zero),
            (payload(1.0, 0.0, 3.0, "D"), "wind velocity", ConstraintError::Zero),
            (payload(1.0, -2.0, 3.0, "D"), "wind velocity", ConstraintError::Negative),
            (payload(1.0, 5.0, -1.0, "D"), "release height", ConstraintError::Negative),
            (payload(f64::NAN, 5.0, 3.0, "D"), "release amount", ConstraintError::NotANumber),
        ];

        for (input, parameter, source) in cases {
            assert_eq!(
                SimulationRequest::try_from(input),
                Err(DispersionError::InvalidParameter { parameter, source })
            );
        }
    }

    #[test]
    fn rejects_unknown_class() {
        assert_eq!(
            SimulationRequest::try_from(payload(1.0, 5.0, 3.0, "Q")),
            Err(DispersionError::InvalidStabilityClass {
                value: "Q".to_string()
            })
        );
    }

    #[test]
    fn uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(SimulationRequest::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "releaseAmount": 1.0,
                "windVelocity": 5.0,
                "releaseHeight": 3.0,
                "stabilityClass": "D",
            })
        );
    }

    #[test]
    fn deserializing_validates() {
        let json = r#"{"releaseAmount":1,"windVelocity":0,"releaseHeight":3,"stabilityClass":"D"}"#;
        assert!(serde_json::from_str::<SimulationRequest>(json).is_err());
    }
}
