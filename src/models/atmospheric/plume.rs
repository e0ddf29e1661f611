//! Gaussian plume dispersion model.
//!
//! [`GaussianPlume`] is the [`twine_core::Model`] adapter. It delegates to
//! the internal `core` module, whose public types are re-exported here.
//!
//! # Example
//!
//! ```
//! use plume_models::models::atmospheric::plume::{GaussianPlume, SimulationRequest, StabilityClass};
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, MassRate, Velocity},
//!     length::meter,
//!     mass_rate::kilogram_per_second,
//!     velocity::meter_per_second,
//! };
//!
//! let request = SimulationRequest::new(
//!     MassRate::new::<kilogram_per_second>(1.0),
//!     Velocity::new::<meter_per_second>(5.0),
//!     Length::new::<meter>(3.0),
//!     StabilityClass::D,
//! )
//! .unwrap();
//!
//! let samples = GaussianPlume::default().call(&request).unwrap();
//! assert_eq!(samples.len(), 20);
//! assert_eq!(samples[19].distance.get::<meter>(), 2000.0);
//! ```

mod core;

pub use self::core::{
    ConcentrationSample, DEFAULT_CROSSWIND_OFFSET, DEFAULT_POINTS, DEFAULT_RECEPTOR_HEIGHT,
    DEFAULT_SPACING, DEFAULT_START, DispersionCoefficients, DispersionError, Receptor,
    RequestPayload, SamplingGrid, SimulationRequest, SimulationRunner, StabilityClass,
    concentration,
};

use twine_core::Model;

/// Gaussian plume model evaluated on a downwind sampling grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GaussianPlume {
    runner: SimulationRunner,
}

impl GaussianPlume {
    /// Creates a model that samples on `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`DispersionError::InvalidParameter`] if the grid is invalid.
    pub fn with_grid(grid: SamplingGrid) -> Result<Self, DispersionError> {
        Ok(Self {
            runner: SimulationRunner::with_grid(grid)?,
        })
    }
}

impl Model for GaussianPlume {
    type Input = SimulationRequest;
    type Output = Vec<ConcentrationSample>;
    type Error = DispersionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.runner.run(input)
    }
}
