//! LineSink trait - Fan-out Write Stage output interface
//!
//! Defines the abstract interface for Sinks.

use crate::TeeError;

/// Line output trait
///
/// All sink implementations must implement this trait.
#[trait_variant::make(LineSink: Send)]
pub trait LocalLineSink {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Write one line, terminated by a newline
    ///
    /// # Errors
    /// Returns write error (should include context)
    async fn write_line(&mut self, line: &[u8]) -> Result<(), TeeError>;

    /// Flush buffer (if any)
    async fn flush(&mut self) -> Result<(), TeeError>;

    /// Close sink
    async fn close(&mut self) -> Result<(), TeeError>;
}
