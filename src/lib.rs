//! # Plume Models
//!
//! Gaussian plume dispersion modelling for [Twine](https://github.com/isentropic-dev/twine),
//! with an archive for computed runs.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`archive`]: The [`archive::SimulationStore`] contract and its adapters.
//! - [`service`]: The `simulate` / `list_recent` operations called by
//!   transport shells.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use plume_models::{
//!     archive::MemoryStore,
//!     models::atmospheric::plume::RequestPayload,
//!     service::SimulationService,
//! };
//!
//! let service = SimulationService::new(MemoryStore::new());
//! let record = service
//!     .simulate(RequestPayload {
//!         release_amount: 1.0,
//!         wind_velocity: 5.0,
//!         release_height: 3.0,
//!         stability_class: "D".to_string(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(record.results().len(), 20);
//! assert_eq!(service.list_recent(None).unwrap()[0], record);
//! ```
//!
//! The model core never logs through a subscriber of its own; install one
//! (e.g., `tracing-subscriber`) in the binary that embeds this crate.

pub mod archive;
pub mod models;
pub mod service;
pub mod support;
