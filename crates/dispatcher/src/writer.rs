//! FanoutWriter - main loop for fan-out to sinks

use contracts::{LineSink, LineStore, StreamId, TeeError};
use observability::metrics::record_lines_written;
use observability::ProgressContext;
use tracing::{debug, info, instrument};

use crate::sinks::{FileSink, SinkKind, StdoutSink};

/// The writer that fans the line store out to every sink
pub struct FanoutWriter {
    sinks: Vec<SinkKind>,
}

impl FanoutWriter {
    /// Acquire every configured sink up front
    ///
    /// All-or-nothing: if any file sink fails to open, no line has been
    /// written anywhere and the error aborts the pipeline. A stdio
    /// sentinel selects stdout and needs no opening; listing it more than
    /// once still produces a single stdout sink.
    #[instrument(name = "fanout_open", skip(outputs), fields(sinks = outputs.len()))]
    pub fn open(outputs: &[StreamId], append: bool) -> Result<Self, TeeError> {
        let mut sinks = Vec::with_capacity(outputs.len());
        let mut stdout_taken = false;

        for output in outputs {
            if output.is_stdio() {
                if !stdout_taken {
                    stdout_taken = true;
                    sinks.push(SinkKind::Stdout(StdoutSink::new()));
                }
            } else {
                sinks.push(SinkKind::File(FileSink::open(output, append)?));
            }
        }

        debug!(sinks = sinks.len(), "all sinks acquired");
        Ok(Self { sinks })
    }

    /// Number of acquired sinks
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Write every line to every sink, in store order
    ///
    /// The throttle policy is evaluated against the running write count
    /// after each line; status output is a mark or an echoed line per the
    /// progress context.
    #[instrument(name = "fanout_write_all", skip(self, store, progress), fields(lines = store.len()))]
    pub async fn write_all(
        &mut self,
        store: &LineStore,
        progress: &ProgressContext<'_>,
    ) -> Result<u64, TeeError> {
        let mut written: u64 = 0;

        for line in store.iter() {
            for sink in &mut self.sinks {
                sink.write_line(line).await?;
            }
            written += 1;
            progress.on_written(written, line);
        }

        for sink in &self.sinks {
            record_lines_written(sink.name(), written);
        }

        info!(lines = written, sinks = self.sinks.len(), "fan-out complete");
        Ok(written)
    }

    /// Flush and close every sink
    ///
    /// The caller's write-phase timer must cover this call: flush/close
    /// cost belongs to the measured write duration.
    #[instrument(name = "fanout_close", skip(self))]
    pub async fn close(mut self) -> Result<(), TeeError> {
        for sink in &mut self.sinks {
            sink.flush().await?;
            sink.close().await?;
        }
        debug!("all sinks closed");
        Ok(())
    }
}
