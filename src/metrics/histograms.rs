//! Histogram metrics

use super::names;
use std::time::Duration;

/// Record how long an acquire took, in milliseconds
pub fn acquire_duration(outcome: &'static str, elapsed: Duration) {
    metrics::histogram!(names::ACQUIRE_DURATION_MS, "outcome" => outcome)
        .record(elapsed.as_secs_f64() * 1000.0);
}
