//! Metrics emitted through the `metrics` facade
//!
//! Nothing is recorded unless the embedding application installs a recorder.
//!
//! * `mysql_probe_acquire_attempts_total`
//! * `mysql_probe_acquire_total{outcome}`
//! * `mysql_probe_acquire_errors_total{category}`
//! * `mysql_probe_release_total`
//! * `mysql_probe_open_handles`
//! * `mysql_probe_acquire_duration_ms{outcome}`

pub mod counters;
pub mod gauges;
pub mod histograms;

/// Metric names
pub mod names {
    /// Acquire attempts that passed validation
    pub const ACQUIRE_ATTEMPTS_TOTAL: &str = "mysql_probe_acquire_attempts_total";
    /// Finished acquire attempts, by outcome (`ok` or `error`)
    pub const ACQUIRE_TOTAL: &str = "mysql_probe_acquire_total";
    /// Failed acquisitions, by error category
    pub const ACQUIRE_ERRORS_TOTAL: &str = "mysql_probe_acquire_errors_total";
    /// Handles released explicitly
    pub const RELEASE_TOTAL: &str = "mysql_probe_release_total";
    /// Handles currently open
    pub const OPEN_HANDLES: &str = "mysql_probe_open_handles";
    /// Time spent in acquire
    pub const ACQUIRE_DURATION_MS: &str = "mysql_probe_acquire_duration_ms";
}
