//! Steady-state Gaussian plume from a continuous point source.
//!
//! The plume is evaluated on a fixed downwind grid of receptors. Spread rates
//! come from Pasquill–Gifford power-law fits selected by [`StabilityClass`],
//! and the ground is treated as a perfect reflector through an image source.
//!
//! Everything here is pure: no state survives between calls and nothing
//! depends on persistence.

mod equation;
mod error;
mod grid;
mod request;
mod runner;
mod sample;
mod stability;

pub use equation::{Receptor, concentration};
pub use error::DispersionError;
pub use grid::{
    DEFAULT_CROSSWIND_OFFSET, DEFAULT_POINTS, DEFAULT_RECEPTOR_HEIGHT, DEFAULT_SPACING,
    DEFAULT_START, SamplingGrid,
};
pub use request::{RequestPayload, SimulationRequest};
pub use runner::SimulationRunner;
pub use sample::ConcentrationSample;
pub use stability::{DispersionCoefficients, StabilityClass};
