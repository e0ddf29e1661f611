use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{DispersionError, Receptor};

/// Number of downwind sample points.
pub const DEFAULT_POINTS: usize = 20;

/// Distance of the first sample from the source, in metres.
pub const DEFAULT_START: f64 = 100.0;

/// Spacing between consecutive samples, in metres.
pub const DEFAULT_SPACING: f64 = 100.0;

/// Crosswind offset of every receptor, in metres (on the plume centreline).
pub const DEFAULT_CROSSWIND_OFFSET: f64 = 0.0;

/// Height of every receptor above ground, in metres (breathing height).
pub const DEFAULT_RECEPTOR_HEIGHT: f64 = 1.5;

/// Downwind sampling layout for a plume run.
///
/// Receptors sit at `start + i * spacing` for `i` in `0..points`, all at the
/// same crosswind offset and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingGrid {
    /// Number of receptors.
    pub points: usize,

    /// Downwind distance of the first receptor.
    pub start: Length,

    /// Distance between consecutive receptors.
    pub spacing: Length,

    /// Crosswind offset shared by all receptors.
    pub crosswind_offset: Length,

    /// Height above ground shared by all receptors.
    pub receptor_height: Length,
}

impl Default for SamplingGrid {
    fn default() -> Self {
        Self {
            points: DEFAULT_POINTS,
            start: Length::new::<meter>(DEFAULT_START),
            spacing: Length::new::<meter>(DEFAULT_SPACING),
            crosswind_offset: Length::new::<meter>(DEFAULT_CROSSWIND_OFFSET),
            receptor_height: Length::new::<meter>(DEFAULT_RECEPTOR_HEIGHT),
        }
    }
}

impl SamplingGrid {
    /// Checks that the grid describes at least one receptor strictly downwind.
    ///
    /// # Errors
    ///
    /// Returns [`DispersionError::InvalidParameter`] if `points` is zero,
    /// `start` or `spacing` is not strictly positive, or the receptor height
    /// is negative.
    pub fn validate(&self) -> Result<(), DispersionError> {
        StrictlyPositive::new(self.points).map_err(DispersionError::invalid("grid points"))?;
        StrictlyPositive::new(self.start).map_err(DispersionError::invalid("grid start"))?;
        StrictlyPositive::new(self.spacing).map_err(DispersionError::invalid("grid spacing"))?;
        NonNegative::new(self.receptor_height)
            .map_err(DispersionError::invalid("receptor height"))?;
        Ok(())
    }

    /// Receptors in increasing downwind order.
    pub fn receptors(&self) -> impl Iterator<Item = Receptor> + '_ {
        (0..self.points).map(move |i| Receptor {
            x: self.start + self.spacing * i as f64,
            y: self.crosswind_offset,
            z: self.receptor_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn default_layout() {
        let grid = SamplingGrid::default();
        let distances: Vec<f64> = grid.receptors().map(|r| r.x.get::<meter>()).collect();
        let expected: Vec<f64> = (1..=20).map(|i| f64::from(i) * 100.0).collect();

        assert_eq!(distances, expected);
        assert!(grid.receptors().all(|r| r.y.get::<meter>() == 0.0));
        assert!(grid.receptors().all(|r| r.z.get::<meter>() == 1.5));
    }

    #[test]
    fn default_is_valid() {
        assert_eq!(SamplingGrid::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_grid() {
        let grid = SamplingGrid {
            points: 0,
            ..SamplingGrid::default()
        };
        assert_eq!(
            grid.validate(),
            Err(DispersionError::InvalidParameter {
                parameter: "grid points",
                source: ConstraintError::Zero,
            })
        );
    }

    #[test]
    fn rejects_receptor_at_source() {
        let grid = SamplingGrid {
            start: Length::new::<meter>(0.0),
            ..SamplingGrid::default()
        };
        assert!(grid.validate().is_err());
    }
}
