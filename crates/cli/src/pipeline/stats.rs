//! Pipeline statistics and the run summary.

use observability::{format_duration, PhaseTimings, StatusStream};

/// Statistics from a pipeline run
#[derive(Debug, Clone, Default)]
pub struct PipelineStats {
    /// Total lines read across all sources
    pub lines_ingested: u64,

    /// Total lines written to every sink
    pub lines_written: u64,

    /// Adjacent duplicates dropped by the transform stage
    pub duplicates_dropped: u64,

    /// Number of configured sources
    pub sources: usize,

    /// Number of configured sinks
    pub sinks: usize,

    /// Per-phase wall-clock measurements
    pub timings: PhaseTimings,
}

impl PipelineStats {
    /// Write throughput in lines per second
    pub fn lines_per_sec(&self) -> f64 {
        let secs = self.timings.total.as_secs_f64();
        if secs > 0.0 {
            self.lines_written as f64 / secs
        } else {
            0.0
        }
    }

    /// Render the summary block on the status stream
    ///
    /// Stdout may be a data sink; the summary never goes there.
    pub fn print_summary(&self, status: &StatusStream) {
        status.line("All done.");
        status.line(&format!("{} lines written.", self.lines_written));

        if let Some(d) = self.timings.ingest {
            status.line(&format!("   ingest:    {}", format_duration(d)));
        }
        if let Some(d) = self.timings.transform {
            status.line(&format!("   transform: {}", format_duration(d)));
        }
        if let Some(d) = self.timings.write {
            status.line(&format!("   write:     {}", format_duration(d)));
        }
        status.line(&format!("   total:     {}", format_duration(self.timings.total)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_lines_per_sec() {
        let stats = PipelineStats {
            lines_written: 500,
            timings: PhaseTimings {
                total: Duration::from_secs(2),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!((stats.lines_per_sec() - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_lines_per_sec_zero_duration() {
        let stats = PipelineStats::default();
        assert_eq!(stats.lines_per_sec(), 0.0);
    }
}
