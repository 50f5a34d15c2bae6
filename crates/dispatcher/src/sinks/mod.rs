//! Sink implementations

mod file;
mod stdout;

pub use file::FileSink;
pub use stdout::StdoutSink;

use contracts::{LineSink, TeeError};

/// Closed set of sink implementations
///
/// The write loop is sequential, so sinks are dispatched by enum rather
/// than through per-sink worker queues.
pub enum SinkKind {
    File(FileSink),
    Stdout(StdoutSink),
}

impl LineSink for SinkKind {
    fn name(&self) -> &str {
        match self {
            Self::File(s) => s.name(),
            Self::Stdout(s) => s.name(),
        }
    }

    async fn write_line(&mut self, line: &[u8]) -> Result<(), TeeError> {
        match self {
            Self::File(s) => s.write_line(line).await,
            Self::Stdout(s) => s.write_line(line).await,
        }
    }

    async fn flush(&mut self) -> Result<(), TeeError> {
        match self {
            Self::File(s) => s.flush().await,
            Self::Stdout(s) => s.flush().await,
        }
    }

    async fn close(&mut self) -> Result<(), TeeError> {
        match self {
            Self::File(s) => s.close().await,
            Self::Stdout(s) => s.close().await,
        }
    }
}
