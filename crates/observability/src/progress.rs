//! Per-phase progress policy
//!
//! Bundles the ticker, the status stream, and the redux stride so the
//! stages evaluate one rule after each processed line. Quiet mode bypasses
//! the throttle entirely; the redux value is then never consulted.

use crate::redux::should_emit;
use crate::status::StatusStream;
use crate::ticker::ProgressTicker;

/// Shared by the ingest and write stages for throttled status output
pub struct ProgressContext<'a> {
    ticker: &'a ProgressTicker,
    status: StatusStream,
    progress: bool,
    cleanup: bool,
    redux: u64,
}

impl<'a> ProgressContext<'a> {
    pub fn new(
        ticker: &'a ProgressTicker,
        status: StatusStream,
        progress: bool,
        cleanup: bool,
        redux: u64,
    ) -> Self {
        Self {
            ticker,
            status,
            progress,
            cleanup,
            redux,
        }
    }

    /// Evaluate after the `count`-th ingested line (1-based)
    ///
    /// Renders at most one mark, and only when progress display is on.
    pub fn on_ingested(&self, count: u64) {
        if self.status.is_quiet() || !self.progress {
            return;
        }
        if should_emit(count, self.redux) && self.ticker.consume_tick() {
            self.status.mark();
        }
    }

    /// Evaluate after the `count`-th written line (1-based)
    ///
    /// With progress display on this renders a mark like ingest; without
    /// it the throttle-selected line itself is echoed (sanitized copy when
    /// cleanup is on — sink bytes are untouched).
    pub fn on_written(&self, count: u64, line: &[u8]) {
        if self.status.is_quiet() {
            return;
        }
        if !should_emit(count, self.redux) {
            return;
        }
        if self.progress {
            if self.ticker.consume_tick() {
                self.status.mark();
            }
        } else {
            self.status.echo_line(line, self.cleanup);
        }
    }
}
