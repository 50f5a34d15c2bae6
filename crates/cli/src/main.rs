//! # linetee CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - argument parsing and run-plan construction
//! - pipeline orchestration and lifecycle management
//! - fatal-error reporting with exit code 1

mod cli;
mod pipeline;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cli::Cli;
use pipeline::{Pipeline, PipelineConfig};

#[tokio::main]
async fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Run failed");
        // Fatal errors stay visible even in quiet mode.
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    observability::init_logging(&cli.logging())?;

    info!(version = env!("CARGO_PKG_VERSION"), "linetee starting");

    let plan = cli.build_plan().context("Failed to build run plan")?;
    let (plan, notices) = config_loader::resolve(plan);

    let pipeline = Pipeline::new(PipelineConfig { plan, notices });
    pipeline.run().await.context("Pipeline execution failed")?;

    info!("linetee finished");
    Ok(())
}
