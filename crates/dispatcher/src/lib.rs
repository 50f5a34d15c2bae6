//! # Dispatcher
//!
//! Fan-out Write Stage: acquires every configured sink up front
//! (all-or-nothing), then drains the line store to all of them in a
//! single sequential loop with throttled status output. Sinks are
//! flushed and closed explicitly so the caller can time the full scoped
//! lifetime, acquisition through close.

mod sinks;
mod writer;

pub use sinks::{FileSink, SinkKind, StdoutSink};
pub use writer::FanoutWriter;
