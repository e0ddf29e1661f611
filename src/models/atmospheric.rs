//! Atmospheric dispersion models.
//!
//! Models in this module predict how a released pollutant spreads through the
//! lower atmosphere.

pub mod plume;
