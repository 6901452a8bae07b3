//! Metric recording helpers.
//!
//! # Metrics
//! - `facade_calls_total` (counter): settled calls by outcome and status
//! - `facade_call_duration_seconds` (histogram): dispatch-to-settle latency
//! - `facade_inflight_calls` (gauge): current loading-gauge count

use std::time::Duration;

pub const CALLS_TOTAL: &str = "facade_calls_total";
pub const CALL_DURATION_SECONDS: &str = "facade_call_duration_seconds";
pub const INFLIGHT_CALLS: &str = "facade_inflight_calls";

/// Record one settled call.
pub fn record_call(outcome: &'static str, status: u16, elapsed: Duration) {
    ::metrics::counter!(CALLS_TOTAL, "outcome" => outcome, "status" => status.to_string())
        .increment(1);
    ::metrics::histogram!(CALL_DURATION_SECONDS, "outcome" => outcome)
        .record(elapsed.as_secs_f64());
}

/// Mirror the loading-gauge count.
pub fn record_inflight(count: usize) {
    ::metrics::gauge!(INFLIGHT_CALLS).set(count as f64);
}
