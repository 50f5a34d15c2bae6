//! Pipeline orchestrator - coordinates all stages.
//!
//! The driver is strictly sequential: ingest fills the store, transform
//! mutates it in place, the fan-out writer drains it. Only the progress
//! ticker runs alongside, and it is joined before the pipeline returns on
//! every path, error paths included.

use std::time::Instant;

use config_loader::{Notice, NoticeLevel};
use contracts::{LineStore, TeeError, TeePlan};
use dispatcher::FanoutWriter;
use observability::metrics::{record_duplicates_dropped, record_phase_duration};
use observability::{ProgressContext, ProgressTicker, StatusStream};
use tracing::{debug, info};

use super::PipelineStats;

/// Pipeline configuration
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// The resolved, validated run plan
    pub plan: TeePlan,

    /// Notices produced while resolving the plan
    pub notices: Vec<Notice>,
}

/// Main pipeline driver
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline to completion
    pub async fn run(self) -> Result<PipelineStats, TeeError> {
        let started = Instant::now();
        let plan = &self.config.plan;
        let status = StatusStream::new(plan.flags.quiet);

        for notice in &self.config.notices {
            match notice.level {
                NoticeLevel::Warning => status.warning(&notice.message),
                NoticeLevel::Notice => status.notice(&notice.message),
            }
        }

        info!(
            sources = plan.inputs.len(),
            sinks = plan.outputs.len(),
            sort = plan.flags.sort,
            unique = plan.flags.unique,
            "pipeline starting"
        );

        // The ticker must be joined before we return, whatever the stages did.
        let ticker = ProgressTicker::start();
        let result = run_stages(plan, &ticker, status).await;
        ticker.stop().await;

        let mut stats = result?;
        stats.timings.total = started.elapsed();

        if !plan.flags.quiet {
            stats.print_summary(&status);
        }

        info!(
            lines_ingested = stats.lines_ingested,
            lines_written = stats.lines_written,
            sources = stats.sources,
            sinks = stats.sinks,
            duration_secs = stats.timings.total.as_secs_f64(),
            lines_per_sec = format!("{:.0}", stats.lines_per_sec()),
            "pipeline complete"
        );

        Ok(stats)
    }
}

/// Ingest -> transform -> fan-out write, with per-phase timing
async fn run_stages(
    plan: &TeePlan,
    ticker: &ProgressTicker,
    status: StatusStream,
) -> Result<PipelineStats, TeeError> {
    let flags = plan.flags;
    let progress = ProgressContext::new(
        ticker,
        status,
        flags.progress,
        flags.cleanup,
        plan.redux_stride(),
    );

    let mut stats = PipelineStats {
        sources: plan.inputs.len(),
        sinks: plan.outputs.len(),
        ..Default::default()
    };
    let mut store = LineStore::new();

    // Ingest
    if flags.progress {
        status.line("Reading from input files...");
    }
    let phase = Instant::now();
    stats.lines_ingested = ingestion::read_sources(&plan.inputs, &mut store, &progress).await?;
    let ingest_elapsed = phase.elapsed();
    stats.timings.ingest = Some(ingest_elapsed);
    record_phase_duration("ingest", ingest_elapsed);
    debug!(lines = stats.lines_ingested, "ingest phase done");

    if store.is_empty() {
        // Sinks are never opened: nothing gets created or truncated.
        if flags.progress {
            status.warning("input feed is empty (no text lines read); skipping the output files.");
        }
        return Ok(stats);
    }

    if flags.progress {
        status.newline();
    }

    // Transform
    if flags.sort {
        let phase = Instant::now();
        transform::sort_lines(&mut store);
        if flags.progress {
            status.line("Sorted.");
        }

        if flags.unique {
            let outcome = transform::dedup_adjacent(&mut store);
            stats.duplicates_dropped = outcome.dropped;
            record_duplicates_dropped(outcome.dropped);
            if flags.progress {
                status.line(&format!(
                    "Deduplicated; dropped {} / {} lines.",
                    outcome.dropped, outcome.remaining
                ));
            }
        }

        let transform_elapsed = phase.elapsed();
        stats.timings.transform = Some(transform_elapsed);
        record_phase_duration("transform", transform_elapsed);
    }

    // Fan-out write; the timer covers sink acquisition through close so
    // flush/close cost lands in the measured write duration.
    let phase = Instant::now();
    let mut writer = FanoutWriter::open(&plan.outputs, flags.append)?;
    if flags.progress {
        status.line("Writing to output files...");
    }
    stats.lines_written = writer.write_all(&store, &progress).await?;
    writer.close().await?;
    let write_elapsed = phase.elapsed();
    stats.timings.write = Some(write_elapsed);
    record_phase_duration("write", write_elapsed);

    if flags.progress {
        status.newline();
    }

    Ok(stats)
}
