use crate::models::atmospheric::plume::SamplingGrid;

/// Number of records returned by `list_recent` when no limit is given.
pub const DEFAULT_LIST_LIMIT: usize = 10;

/// Configuration for a [`SimulationService`](super::SimulationService).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceConfig {
    /// Record count returned when the caller gives no limit.
    pub default_limit: usize,

    /// Downwind sampling layout for every run.
    pub grid: SamplingGrid,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIST_LIMIT,
            grid: SamplingGrid::default(),
        }
    }
}
