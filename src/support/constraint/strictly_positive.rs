use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Release rates, wind speeds, and downwind distances all use this constraint.
///
/// # Examples
///
/// ```
/// use plume_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<_, StrictlyPositive>::new(100.0).unwrap();
/// assert_eq!(x.into_inner(), 100.0);
///
/// let q = StrictlyPositive::new(0.5).unwrap();
/// assert_eq!(q.into_inner(), 0.5);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, MassRate},
        length::meter,
        mass_rate::kilogram_per_second,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn release_rates() {
        let q = MassRate::new::<kilogram_per_second>(2.5);
        assert!(StrictlyPositive::new(q).is_ok());

        let q = MassRate::new::<kilogram_per_second>(0.0);
        assert!(StrictlyPositive::new(q).is_err());
    }

    #[test]
    fn downwind_distances() {
        let x = StrictlyPositive::new(Length::new::<meter>(100.0)).unwrap();
        assert_eq!(x.as_ref().get::<meter>(), 100.0);

        assert!(StrictlyPositive::new(Length::new::<meter>(-100.0)).is_err());
    }
}
