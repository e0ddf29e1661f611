//! Append-only archive of plume runs.
//!
//! The model core never touches storage. A caller computes samples with the
//! runner, then hands the request and samples to a [`SimulationStore`], which
//! assigns an identifier and timestamp and returns the persisted
//! [`SimulationRecord`].
//!
//! Two adapters are provided:
//!
//! - [`MemoryStore`]: process-local, for tests and embedding.
//! - [`JsonLinesStore`]: one JSON record per line in an append-only file.
//!
//! Both take a [`Clock`] so timestamps can be pinned in tests.

mod clock;
mod error;
mod json_lines;
mod memory;
mod record;

#[cfg(test)]
mod test_support;

pub use clock::{Clock, SystemClock};
pub use error::StoreError;
pub use json_lines::JsonLinesStore;
pub use memory::MemoryStore;
pub use record::{RecordId, SimulationRecord};

use std::cmp::Reverse;

use crate::models::atmospheric::plume::{ConcentrationSample, SimulationRequest};

/// Durable, append-only log of plume runs.
///
/// Implementations must make `append` atomic from the caller's perspective
/// and must let a later `list_recent` observe an appended record.
pub trait SimulationStore: Send + Sync {
    /// Persists one run and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the record could not be persisted. Nothing
    /// is stored in that case.
    fn append(
        &self,
        request: SimulationRequest,
        samples: Vec<ConcentrationSample>,
    ) -> Result<SimulationRecord, StoreError>;

    /// Returns up to `limit` records, newest first.
    ///
    /// Records are ordered by descending timestamp; records with the same
    /// timestamp are ordered by descending insertion order.
    /// A `limit` of zero returns an empty vector.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the archive cannot be read.
    fn list_recent(&self, limit: usize) -> Result<Vec<SimulationRecord>, StoreError>;
}

/// Selects the `limit` newest records from `records`, given in insertion order.
fn newest_first<'a, I>(records: I, limit: usize) -> Vec<SimulationRecord>
where
    I: IntoIterator<Item = &'a SimulationRecord>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut ordered: Vec<(usize, &SimulationRecord)> = records.into_iter().enumerate().collect();
    ordered.sort_by_key(|&(position, record)| (Reverse(record.datetime()), Reverse(position)));
    ordered
        .into_iter()
        .take(limit)
        .map(|(_, record)| record.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;

    fn record(id: u64, seconds: i64) -> SimulationRecord {
        SimulationRecord::new(
            RecordId::new(id),
            Timestamp::from_second(seconds).unwrap(),
            SimulationRequest::default(),
            Vec::new(),
        )
    }

    fn ids(records: &[SimulationRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id().get()).collect()
    }

    #[test]
    fn orders_by_timestamp_then_insertion() {
        let records = [record(1, 10), record(2, 30), record(3, 20), record(4, 30)];
        assert_eq!(ids(&newest_first(&records, 10)), [4, 2, 3, 1]);
    }

    #[test]
    fn truncates_to_limit() {
        let records = [record(1, 1), record(2, 2), record(3, 3)];
        assert_eq!(ids(&newest_first(&records, 2)), [3, 2]);
        assert!(newest_first(&records, 0).is_empty());
    }
}
