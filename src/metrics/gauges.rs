//! Gauge metrics

use super::names;

/// A handle was opened
pub fn handle_opened() {
    metrics::gauge!(names::OPEN_HANDLES).increment(1.0);
}

/// A handle was released or dropped
pub fn handle_closed() {
    metrics::gauge!(names::OPEN_HANDLES).decrement(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::testing::{capture, find};
    use metrics_util::debugging::DebugValue;

    #[test]
    fn test_open_handles_tracks_balance() {
        let ((), recorded) = capture(|| {
            handle_opened();
            handle_opened();
            handle_closed();
        });

        let gauge = find(&recorded, names::OPEN_HANDLES, None).unwrap();
        match &gauge.value {
            DebugValue::Gauge(value) => assert_eq!(value.0, 1.0),
            other => panic!("expected gauge, got {:?}", other),
        }
    }
}
