//! # Observability
//!
//! Status-side concerns of the pipeline: tracing initialization, the
//! progress ticker, the redux throttle policy, the interactive status
//! stream, duration reporting, and metrics recording points.
//!
//! Everything here writes to stderr; stdout belongs to the data sinks.

pub mod metrics;
pub mod progress;
pub mod redux;
pub mod report;
pub mod status;
pub mod ticker;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use crate::progress::ProgressContext;
pub use crate::redux::should_emit;
pub use crate::report::{format_duration, PhaseTimings};
pub use crate::status::{sanitize_for_echo, StatusStream};
pub use crate::ticker::{ProgressTicker, TICK_INTERVAL};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log output format
    pub format: LogFormat,
    /// Suppress everything below error level
    pub quiet: bool,
    /// Verbosity bumps: 0 = warn, 1 = info, 2 = debug, 3+ = trace
    pub verbose: u8,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Compact,
            quiet: false,
            verbose: 0,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

/// Initialize tracing
///
/// The fmt layer writes to stderr so that stdout stays byte-clean for
/// sink data. `RUST_LOG` overrides the level derived from quiet/verbose.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = if config.quiet {
        EnvFilter::new("error")
    } else {
        let default_level = match config.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    match config.format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer().pretty().with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer().compact().with_writer(std::io::stderr);

            tracing_subscriber::registry()
                .with(filter)
                .with(fmt_layer)
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
    }

    Ok(())
}
