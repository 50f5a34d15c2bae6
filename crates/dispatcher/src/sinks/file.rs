//! FileSink - writes lines to a named file

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use contracts::{LineSink, StreamId, TeeError};
use tracing::{debug, instrument};

/// Sink backed by a file, truncated or appended per configuration
pub struct FileSink {
    name: String,
    writer: BufWriter<std::fs::File>,
}

impl FileSink {
    /// Open (create/truncate or create/append) the named file
    ///
    /// # Errors
    /// `TeeError::SinkOpen`; the caller must treat it as fatal before any
    /// line is written to any sink.
    pub fn open(id: &StreamId, append: bool) -> Result<Self, TeeError> {
        let mut options = OpenOptions::new();
        options.write(true).create(true);
        if append {
            options.append(true);
        } else {
            options.truncate(true);
        }

        let file = options
            .open(id.as_str())
            .map_err(|e| TeeError::sink_open(id.as_str(), e))?;
        debug!(path = %id, append, "opened output file");

        Ok(Self {
            name: id.to_string(),
            writer: BufWriter::new(file),
        })
    }
}

impl LineSink for FileSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn write_line(&mut self, line: &[u8]) -> Result<(), TeeError> {
        self.writer
            .write_all(line)
            .and_then(|()| self.writer.write_all(b"\n"))
            .map_err(|e| TeeError::sink_write(&self.name, e.to_string()))
    }

    async fn flush(&mut self) -> Result<(), TeeError> {
        self.writer
            .flush()
            .map_err(|e| TeeError::sink_write(&self.name, e.to_string()))
    }

    #[instrument(name = "file_sink_close", skip(self), fields(sink = %self.name))]
    async fn close(&mut self) -> Result<(), TeeError> {
        self.writer
            .flush()
            .map_err(|e| TeeError::sink_write(&self.name, e.to_string()))?;
        debug!(sink = %self.name, "FileSink closed");
        Ok(())
    }
}
