//! Pipeline metrics recording points
//!
//! Counters and histograms over the `metrics` facade. No exporter is
//! installed here; a host process may install one.

use std::time::Duration;

use metrics::{counter, histogram};

/// Record lines ingested from one source
pub fn record_lines_ingested(source: &str, count: u64) {
    counter!(
        "linetee_lines_ingested_total",
        "source" => source.to_string()
    )
    .increment(count);
}

/// Record lines written to one sink
pub fn record_lines_written(sink: &str, count: u64) {
    counter!(
        "linetee_lines_written_total",
        "sink" => sink.to_string()
    )
    .increment(count);
}

/// Record adjacent duplicates dropped by the transform stage
pub fn record_duplicates_dropped(count: u64) {
    if count > 0 {
        counter!("linetee_duplicates_dropped_total").increment(count);
    }
}

/// Record one phase's wall-clock duration
pub fn record_phase_duration(phase: &str, duration: Duration) {
    histogram!(
        "linetee_phase_duration_ms",
        "phase" => phase.to_string()
    )
    .record(duration.as_secs_f64() * 1000.0);
}
