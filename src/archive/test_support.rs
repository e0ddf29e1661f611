use std::sync::atomic::{AtomicI64, Ordering};

use jiff::Timestamp;

use crate::models::atmospheric::plume::{RequestPayload, SimulationRequest};

use super::Clock;

/// Clock that starts at a fixed instant and advances one second per call.
pub(super) fn ticking_clock() -> impl Clock {
    let seconds = AtomicI64::new(1_700_000_000);
    move || Timestamp::from_second(seconds.fetch_add(1, Ordering::Relaxed)).unwrap()
}

pub(super) fn request(release_amount: f64, stability_class: &str) -> SimulationRequest {
    SimulationRequest::try_from(RequestPayload {
        release_amount,
        wind_velocity: 4.0,
        release_height: 2.0,
        stability_class: stability_class.to_string(),
    })
    .unwrap()
}
