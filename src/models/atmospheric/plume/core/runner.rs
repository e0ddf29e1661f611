use tracing::debug;
use uom::si::{f64::Time, length::meter};

use super::{ConcentrationSample, DispersionError, SamplingGrid, SimulationRequest, concentration};

/// Evaluates a plume along a downwind sampling grid.
///
/// The runner holds only its grid layout, so a single instance can be shared
/// across threads and reused for any number of requests.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationRunner {
    grid: SamplingGrid,
}

impl SimulationRunner {
    /// Creates a runner with the standard 20-point grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner with a custom sampling grid.
    ///
    /// # Errors
    ///
    /// Returns [`DispersionError::InvalidParameter`] if the grid is invalid.
    pub fn with_grid(grid: SamplingGrid) -> Result<Self, DispersionError> {
        grid.validate()?;
        Ok(Self { grid })
    }

    /// Computes the concentration profile for `request`.
    ///
    /// Samples are ordered by increasing downwind distance.
    ///
    /// # Errors
    ///
    /// Returns the first [`DispersionError`] raised by the plume equation.
    /// No samples are returned when any point fails.
    pub fn run(
        &self,
        request: &SimulationRequest,
    ) -> Result<Vec<ConcentrationSample>, DispersionError> {
        let u = request.wind_velocity();

        let samples = self
            .grid
            .receptors()
            .map(|receptor| {
                let value = concentration(
                    request.release_amount(),
                    u,
                    request.release_height(),
                    receptor,
                    request.stability_class(),
                )?;
                let time: Time = receptor.x / u;
                Ok(ConcentrationSample {
                    distance: receptor.x,
                    concentration: value,
                    time,
                })
            })
            .collect::<Result<Vec<_>, DispersionError>>()?;

        debug!(
            class = %request.stability_class(),
            points = samples.len(),
            last_distance_m = samples.last().map(|s| s.distance.get::<meter>()),
            "plume profile computed"
        );

        Ok(samples)
    }
}
