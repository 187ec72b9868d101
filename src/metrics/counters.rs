//! Counter metrics

use super::names;

/// Acquire started (after validation)
pub fn acquire_attempted() {
    metrics::counter!(names::ACQUIRE_ATTEMPTS_TOTAL).increment(1);
}

/// Acquire returned an open handle
pub fn acquire_succeeded() {
    metrics::counter!(names::ACQUIRE_TOTAL, "outcome" => "ok").increment(1);
}

/// Acquire failed after reaching for the server
pub fn acquire_failed(category: &'static str) {
    metrics::counter!(names::ACQUIRE_TOTAL, "outcome" => "error").increment(1);
    metrics::counter!(names::ACQUIRE_ERRORS_TOTAL, "category" => category).increment(1);
}

/// Handle released
pub fn released() {
    metrics::counter!(names::RELEASE_TOTAL).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::testing::{capture, find};
    use metrics_util::debugging::DebugValue;

    #[test]
    fn test_counter_names_and_labels() {
        let ((), recorded) = capture(|| {
            acquire_attempted();
            acquire_attempted();
            acquire_succeeded();
            acquire_failed("network");
            released();
        });

        let attempts = find(&recorded, names::ACQUIRE_ATTEMPTS_TOTAL, None).unwrap();
        assert!(matches!(attempts.value, DebugValue::Counter(2)));
        assert!(attempts.labels.is_empty());

        let ok = find(&recorded, names::ACQUIRE_TOTAL, Some(("outcome", "ok"))).unwrap();
        assert!(matches!(ok.value, DebugValue::Counter(1)));
        let err = find(&recorded, names::ACQUIRE_TOTAL, Some(("outcome", "error"))).unwrap();
        assert!(matches!(err.value, DebugValue::Counter(1)));

        let by_category = find(
            &recorded,
            names::ACQUIRE_ERRORS_TOTAL,
            Some(("category", "network")),
        )
        .unwrap();
        assert!(matches!(by_category.value, DebugValue::Counter(1)));

        let released = find(&recorded, names::RELEASE_TOTAL, None).unwrap();
        assert!(matches!(released.value, DebugValue::Counter(1)));
    }

    #[test]
    fn test_acquire_total_sums_to_finished_attempts() {
        let ((), recorded) = capture(|| {
            acquire_attempted();
            acquire_succeeded();
            acquire_attempted();
            acquire_failed("server");
        });

        let total: u64 = recorded
            .iter()
            .filter(|r| r.name == names::ACQUIRE_TOTAL)
            .map(|r| match r.value {
                DebugValue::Counter(n) => n,
                _ => 0,
            })
            .sum();
        assert_eq!(total, 2);
    }
}
