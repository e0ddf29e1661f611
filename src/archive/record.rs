use std::fmt::{self, Write as _};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uom::si::{length::meter, mass_density::kilogram_per_cubic_meter, time::second};

use crate::models::atmospheric::plume::{ConcentrationSample, SimulationRequest};

/// Store-assigned identifier of an archived run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One archived plume run: the request, when it was stored, and its samples.
///
/// Samples keep the order the runner produced (increasing distance).
/// Serialized with the request fields flattened alongside `id`, `datetime`,
/// and `results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    id: RecordId,
    #[serde(flatten)]
    request: SimulationRequest,
    datetime: Timestamp,
    results: Vec<ConcentrationSample>,
}

impl SimulationRecord {
    /// Assembles a record. Intended for [`SimulationStore`](super::SimulationStore)
    /// implementations, which own identifier and timestamp assignment.
    #[must_use]
    pub fn new(
        id: RecordId,
        datetime: Timestamp,
        request: SimulationRequest,
        results: Vec<ConcentrationSample>,
    ) -> Self {
        Self {
            id,
            request,
            datetime,
            results,
        }
    }

    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn datetime(&self) -> Timestamp {
        self.datetime
    }

    #[must_use]
    pub fn request(&self) -> &SimulationRequest {
        &self.request
    }

    /// Samples in increasing downwind order.
    #[must_use]
    pub fn results(&self) -> &[ConcentrationSample] {
        &self.results
    }

    /// Renders the samples as a fixed-width text table.
    ///
    /// Distance and time use one decimal; concentration uses scientific
    /// notation with three decimals.
    #[must_use]
    pub fn table(&self) -> String {
        let mut out = format!(
            "{:>12}  {:>22}  {:>10}\n",
            "Distance (m)", "Concentration (kg/m³)", "Time (s)"
        );
        for sample in &self.results {
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "{:>12.1}  {:>22.3e}  {:>10.1}",
                sample.distance.get::<meter>(),
                sample.concentration.get::<kilogram_per_cubic_meter>(),
                sample.time.get::<second>(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::atmospheric::plume::SimulationRunner;

    fn record() -> SimulationRecord {
        let request = SimulationRequest::default();
        let samples = SimulationRunner::new().run(&request).unwrap();
        SimulationRecord::new(
            RecordId::new(7),
            "2024-05-01T12:00:00Z".parse().unwrap(),
            request,
            samples,
        )
    }

    #[test]
    fn wire_layout() {
        let json = serde_json::to_value(record()).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["releaseAmount"], 1.0);
        assert_eq!(json["windVelocity"], 5.0);
        assert_eq!(json["releaseHeight"], 3.0);
        assert_eq!(json["stabilityClass"], "D");
        assert_eq!(json["datetime"], "2024-05-01T12:00:00Z");

        let results = json["results"].as_array().unwrap();
        assert_eq!(results.len(), 20);
        assert_eq!(results[0]["distance"], 100.0);
        assert_eq!(results[0]["time"], 20.0);
        assert!(results[0]["concentration"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn json_round_trip_is_exact() {
        let original = record();
        let json = serde_json::to_string(&original).unwrap();
        let restored: SimulationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn table_has_one_row_per_sample() {
        let table = record().table();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 21);
        assert!(lines[0].contains("Concentration"));
        assert!(lines[1].trim_start().starts_with("100.0"));
        assert!(lines[20].trim_end().ends_with("400.0"));
    }
}
