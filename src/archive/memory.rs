use std::sync::Mutex;

use tracing::debug;

use crate::models::atmospheric::plume::{ConcentrationSample, SimulationRequest};

use super::{
    Clock, RecordId, SimulationRecord, SimulationStore, StoreError, SystemClock, newest_first,
};

/// In-process archive backed by a vector.
///
/// Records live as long as the store; nothing is written to disk.
pub struct MemoryStore {
    records: Mutex<Vec<SimulationRecord>>,
    clock: Box<dyn Clock>,
}

impl MemoryStore {
    /// Creates an empty store stamped by the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty store stamped by `clock`.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            clock: Box::new(clock),
        }
    }

    /// Number of archived records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.records.lock().map_err(|_| StoreError::poisoned())?.len())
    }

    /// Returns `true` if nothing has been archived.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationStore for MemoryStore {
    fn append(
        &self,
        request: SimulationRequest,
        samples: Vec<ConcentrationSample>,
    ) -> Result<SimulationRecord, StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::poisoned())?;

        let id = RecordId::new(records.len() as u64 + 1);
        let record = SimulationRecord::new(id, self.clock.now(), request, samples);
        records.push(record.clone());

        debug!(%id, "archived plume run in memory");
        Ok(record)
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<SimulationRecord>, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::poisoned())?;
        Ok(newest_first(records.iter(), limit))
    }
}
