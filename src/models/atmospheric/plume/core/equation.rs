//! Point evaluation of the Gaussian plume equation.

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, MassDensity, MassRate, Ratio, Velocity},
    ratio::ratio,
};

use crate::support::constraint::{NonZero, StrictlyPositive};

use super::{DispersionError, StabilityClass};

/// Evaluation point relative to the source, in plume coordinates.
///
/// `x` runs downwind along the plume centreline, `y` is the crosswind offset
/// from the centreline, and `z` is the height above ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Receptor {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

/// Computes the steady-state concentration at `receptor` downwind of a
/// continuous point source.
///
/// `q` is the release rate, `u` the mean wind speed, and `h` the release
/// height. The vertical term sums the real source at `+h` and an image source
/// at `-h`, which models total reflection at the ground.
///
/// # Errors
///
/// Returns [`DispersionError::InvalidParameter`] if the downwind distance is
/// not strictly positive or the wind speed is zero (or either is `NaN`).
pub fn concentration(
    q: MassRate,
    u: Velocity,
    h: Length,
    receptor: Receptor,
    class: StabilityClass,
) -> Result<MassDensity, DispersionError> {
    let x = StrictlyPositive::new(receptor.x)
        .map_err(DispersionError::invalid("downwind distance"))?
        .into_inner();
    let u = NonZero::new(u)
        .map_err(DispersionError::invalid("wind velocity"))?
        .into_inner();

    let coefficients = class.coefficients();
    let sigma_y = coefficients.sigma_y(x);
    let sigma_z = coefficients.sigma_z(x);

    let centreline: MassDensity = q / (u * sigma_y * sigma_z) / (2.0 * PI);

    let crosswind: Ratio = receptor.y / sigma_y;
    let below: Ratio = (receptor.z - h) / sigma_z;
    let above: Ratio = (receptor.z + h) / sigma_z;

    let lateral = gaussian(crosswind.get::<ratio>());
    let vertical = gaussian(below.get::<ratio>()) + gaussian(above.get::<ratio>());

    Ok(centreline * (lateral * vertical))
}

/// Unnormalized Gaussian kernel `exp(-s²/2)`.
fn gaussian(s: f64) -> f64 {
    (-0.5 * s * s).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::meter, mass_density::kilogram_per_cubic_meter, mass_rate::kilogram_per_second,
        velocity::meter_per_second,
    };

    use crate::support::constraint::ConstraintError;

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn receptor(x: f64, y: f64, z: f64) -> Receptor {
        Receptor {
            x: m(x),
            y: m(y),
            z: m(z),
        }
    }

    fn evaluate(
        q: f64,
        u: f64,
        h: f64,
        at: Receptor,
        class: StabilityClass,
    ) -> Result<f64, DispersionError> {
        concentration(
            MassRate::new::<kilogram_per_second>(q),
            Velocity::new::<meter_per_second>(u),
            m(h),
            at,
            class,
        )
        .map(|c| c.get::<kilogram_per_cubic_meter>())
    }

    #[test]
    fn matches_reference_evaluation() {
        // Q = 1 kg/s, u = 5 m/s, H = 3 m, class D, receptor at 100 m, 1.5 m up.
        let c = evaluate(1.0, 5.0, 3.0, receptor(100.0, 0.0, 1.5), StabilityClass::D).unwrap();
        assert_relative_eq!(c, 0.001_028_544_627_847_083_3, max_relative = 1e-9);
    }

    #[test]
    fn finite_non_negative_and_symmetric_in_y() {
        for class in StabilityClass::ALL {
            for x in [1.0, 50.0, 100.0, 750.0, 2000.0, 10_000.0] {
                for y in [0.0, 5.0, 40.0, 300.0] {
                    let left = evaluate(2.0, 3.0, 10.0, receptor(x, -y, 1.5), class).unwrap();
                    let right = evaluate(2.0, 3.0, 10.0, receptor(x, y, 1.5), class).unwrap();

                    assert!(right.is_finite(), "{class} x={x} y={y}");
                    assert!(right >= 0.0, "{class} x={x} y={y}");
                    assert_eq!(left, right, "{class} x={x} y={y}");
                }
            }
        }
    }

    #[test]
    fn ground_release_doubles_the_direct_term() {
        let (q, u, x) = (1.0, 4.0, 500.0);
        let class = StabilityClass::C;

        let coefficients = class.coefficients();
        let sigma_y = coefficients.sigma_y(m(x)).get::<meter>();
        let sigma_z = coefficients.sigma_z(m(x)).get::<meter>();
        let direct = q / (2.0 * PI * u * sigma_y * sigma_z);

        let c = evaluate(q, u, 0.0, receptor(x, 0.0, 0.0), class).unwrap();
        assert_relative_eq!(c, 2.0 * direct, max_relative = 1e-12);
    }

    #[test]
    fn off_axis_concentration_is_lower() {
        let on_axis = evaluate(1.0, 5.0, 3.0, receptor(400.0, 0.0, 1.5), StabilityClass::B).unwrap();
        let off_axis =
            evaluate(1.0, 5.0, 3.0, receptor(400.0, 50.0, 1.5), StabilityClass::B).unwrap();
        assert!(off_axis < on_axis);
    }

    #[test]
    fn rejects_calm_wind() {
        let result = evaluate(1.0, 0.0, 3.0, receptor(100.0, 0.0, 1.5), StabilityClass::D);
        assert_eq!(
            result,
            Err(DispersionError::InvalidParameter {
                parameter: "wind velocity",
                source: ConstraintError::Zero,
            })
        );
    }

    #[test]
    fn rejects_non_positive_distance() {
        for (x, source) in [
            (0.0, ConstraintError::Zero),
            (-10.0, ConstraintError::Negative),
            (f64::NAN, ConstraintError::NotANumber),
        ] {
            let result = evaluate(1.0, 5.0, 3.0, receptor(x, 0.0, 1.5), StabilityClass::A);
            assert_eq!(
                result,
                Err(DispersionError::InvalidParameter {
                    parameter: "downwind distance",
                    source,
                })
            );
        }
    }
}
