//! Phase timing report helpers

use std::time::Duration;

/// Wall-clock durations measured by the pipeline driver
///
/// A phase that did not run (transform without `sort`, write skipped on
/// empty input) stays `None` and is omitted from the summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseTimings {
    /// Ingest phase: all sources opened, read, and closed
    pub ingest: Option<Duration>,
    /// Transform phase: sort plus optional dedup
    pub transform: Option<Duration>,
    /// Write phase: sink acquisition through flush/close
    pub write: Option<Duration>,
    /// End-to-end, pipeline start to summary emission
    pub total: Duration,
}

/// Format a duration with an adaptive unit
///
/// Nanoseconds below 1 us, microseconds below 1 ms, milliseconds below
/// 1 s, seconds otherwise; the displayed magnitude stays readable.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{nanos} ns")
    } else if nanos < 1_000_000 {
        format!("{:.2} us", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:.2} s", d.as_secs_f64())
    }
}
