//! Inbound operations for transport shells.
//!
//! [`SimulationService`] is what an HTTP handler or CLI calls: `simulate`
//! validates a wire payload, runs the plume model, and archives the result;
//! `list_recent` reads the archive back. Failures come back as a
//! [`SimulationError`] whose [`ErrorPayload`] separates bad input from
//! storage outages.

mod config;
mod error;

pub use config::{DEFAULT_LIST_LIMIT, ServiceConfig};
pub use error::{ErrorKind, ErrorPayload, SimulationError};

use tracing::{info, warn};
use twine_core::Model;

use crate::{
    archive::{SimulationRecord, SimulationStore},
    models::atmospheric::plume::{GaussianPlume, RequestPayload, SimulationRequest},
};

/// Runs plume simulations and archives them in `S`.
pub struct SimulationService<S> {
    model: GaussianPlume,
    store: S,
    default_limit: usize,
}

impl<S: SimulationStore> SimulationService<S> {
    /// Creates a service with the default configuration.
    pub fn new(store: S) -> Self {
        Self {
            model: GaussianPlume::default(),
            store,
            default_limit: config::DEFAULT_LIST_LIMIT,
        }
    }

    /// Creates a service from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Dispersion`] if the configured grid is invalid.
    pub fn with_config(store: S, config: ServiceConfig) -> Result<Self, SimulationError> {
        Ok(Self {
            model: GaussianPlume::with_grid(config.grid)?,
            store,
            default_limit: config.default_limit,
        })
    }

    /// The backing archive.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates `payload`, runs the model, and archives the result.
    ///
    /// Nothing is archived if validation or the model fails, and no samples
    /// are returned if archiving fails.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Dispersion`] for invalid input and
    /// [`SimulationError::Storage`] if the archive rejects the record.
    pub fn simulate(&self, payload: RequestPayload) -> Result<SimulationRecord, SimulationError> {
        let request = SimulationRequest::try_from(payload)?;
        let samples = self.model.call(&request)?;

        let record = self
            .store
            .append(request, samples)
            .inspect_err(|error| warn!(%error, "failed to archive plume run"))?;

        info!(
            id = %record.id(),
            class = %request.stability_class(),
            "plume run archived"
        );
        Ok(record)
    }

    /// Returns the most recent runs, newest first.
    ///
    /// `None` uses the configured default limit; zero or negative limits
    /// return an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Storage`] if the archive cannot be read.
    pub fn list_recent(&self, limit: Option<i64>) -> Result<Vec<SimulationRecord>, SimulationError> {
        let limit = match limit {
            None => self.default_limit,
            Some(limit) => usize::try_from(limit).unwrap_or(0),
        };

        self.store
            .list_recent(limit)
            .inspect_err(|error| warn!(%error, "failed to read plume archive"))
            .map_err(SimulationError::from)
    }
}
