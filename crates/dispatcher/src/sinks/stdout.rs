//! StdoutSink - writes lines to the process's standard output
//!
//! Selected by a stdio sentinel in the output list; needs no opening and
//! cannot fail to acquire.

use std::io::{BufWriter, Stdout, Write};

use contracts::{LineSink, TeeError};
use tracing::{debug, instrument};

/// Sink backed by the process's stdout
pub struct StdoutSink {
    writer: BufWriter<Stdout>,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self {
            writer: BufWriter::new(std::io::stdout()),
        }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn write_line(&mut self, line: &[u8]) -> Result<(), TeeError> {
        self.writer
            .write_all(line)
            .and_then(|()| self.writer.write_all(b"\n"))
            .map_err(|e| TeeError::sink_write("stdout", e.to_string()))
    }

    async fn flush(&mut self) -> Result<(), TeeError> {
        self.writer
            .flush()
            .map_err(|e| TeeError::sink_write("stdout", e.to_string()))
    }

    #[instrument(name = "stdout_sink_close", skip(self))]
    async fn close(&mut self) -> Result<(), TeeError> {
        self.writer
            .flush()
            .map_err(|e| TeeError::sink_write("stdout", e.to_string()))?;
        debug!("StdoutSink closed");
        Ok(())
    }
}
