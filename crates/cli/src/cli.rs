//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use config_loader::ConfigLoader;
use contracts::{StreamId, TeeError, TeePlan};
use observability::LoggingConfig;

/// linetee - buffered line tee with optional sort/dedup
#[derive(Parser, Debug)]
#[command(
    name = "linetee",
    author,
    version,
    about = "Buffered line tee: merge, clean, and fan out line-oriented text",
    long_about = "Reads all lines from the given sources, optionally sorts and \n\
                  deduplicates them, then writes the resulting line set to every \n\
                  given sink while echoing throttled progress to stderr.\n\n\
                  '.', '-', /dev/stdin and /dev/stdout select the process streams."
)]
pub struct Cli {
    /// Input file location; repeat for multiple sources ('-' reads stdin)
    #[arg(short = 'i', long = "infile", value_name = "PATH")]
    pub infile: Vec<String>,

    /// Output file location; repeat for multiple sinks ('-' writes stdout)
    #[arg(short = 'o', long = "outfile", value_name = "PATH")]
    pub outfile: Vec<String>,

    /// Render progress marks on the status stream
    #[arg(short = 'p', long)]
    pub progress: bool,

    /// Append to output files instead of truncating
    #[arg(short = 'a', long)]
    pub append: bool,

    /// Suppress all status output (fatal errors stay visible)
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Drop duplicate lines; implies --sort
    #[arg(short = 'u', long)]
    pub unique: bool,

    /// Sort the buffered line set byte-wise ascending
    #[arg(short = 's', long)]
    pub sort: bool,

    /// Sanitize lines echoed to the status stream (sink bytes untouched)
    #[arg(short = 'c', long)]
    pub cleanup: bool,

    /// Reduced status noise: one mark/echo per N processed lines
    #[arg(short = 'r', long, value_name = "N", env = "LINETEE_REDUX")]
    pub redux: Option<u64>,

    /// Run profile (TOML or JSON); command-line options override it
    #[arg(long, value_name = "PATH", env = "LINETEE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, env = "LINETEE_VERBOSE")]
    pub verbose: u8,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        env = "LINETEE_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

impl Cli {
    /// Logging configuration derived from the global flags
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            format: self.log_format.into(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }

    /// Build the (not yet resolved) run plan: profile file first, then
    /// command-line overrides on top
    ///
    /// Non-empty -i/-o lists replace the profile's; boolean flags OR in;
    /// a command-line --redux wins over the profile value.
    pub fn build_plan(&self) -> Result<TeePlan, TeeError> {
        let mut plan = match &self.config {
            Some(path) => ConfigLoader::load_from_path(path)?,
            None => TeePlan::default(),
        };

        if !self.infile.is_empty() {
            plan.inputs = self.infile.iter().map(StreamId::new).collect();
        }
        if !self.outfile.is_empty() {
            plan.outputs = self.outfile.iter().map(StreamId::new).collect();
        }

        plan.flags.progress |= self.progress;
        plan.flags.append |= self.append;
        plan.flags.quiet |= self.quiet;
        plan.flags.unique |= self.unique;
        plan.flags.sort |= self.sort;
        plan.flags.cleanup |= self.cleanup;

        if self.redux.is_some() {
            plan.redux = self.redux;
        }

        config_loader::validate(&plan)?;
        Ok(plan)
    }
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_into_plan() {
        let cli = Cli::parse_from([
            "linetee", "-i", "a.txt", "-i", "-", "-o", "out.txt", "-s", "-u", "-c", "-r", "100",
        ]);
        let plan = cli.build_plan().unwrap();

        assert_eq!(plan.inputs.len(), 2);
        assert!(plan.inputs[1].is_stdio());
        assert_eq!(plan.outputs.len(), 1);
        assert!(plan.flags.sort);
        assert!(plan.flags.unique);
        assert!(plan.flags.cleanup);
        assert_eq!(plan.redux, Some(100));
    }

    #[test]
    fn test_no_args_yields_empty_plan() {
        let cli = Cli::parse_from(["linetee"]);
        let plan = cli.build_plan().unwrap();
        assert!(plan.inputs.is_empty());
        assert!(plan.outputs.is_empty());
        assert_eq!(plan.redux, None);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["linetee", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_profile_overridden_by_cli() {
        use std::io::Write;
        let mut profile = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            profile,
            "inputs = [\"from-profile.txt\"]\noutputs = [\"profile-out.txt\"]\nredux = 5\n\n[flags]\nsort = true\n"
        )
        .unwrap();
        profile.flush().unwrap();

        let cli = Cli::parse_from([
            "linetee",
            "--config",
            profile.path().to_str().unwrap(),
            "-i",
            "cli.txt",
            "-r",
            "9",
        ]);
        let plan = cli.build_plan().unwrap();

        assert_eq!(plan.inputs.len(), 1);
        assert_eq!(plan.inputs[0].as_str(), "cli.txt");
        // Outputs come from the profile, untouched by the CLI.
        assert_eq!(plan.outputs[0].as_str(), "profile-out.txt");
        assert!(plan.flags.sort);
        assert_eq!(plan.redux, Some(9));
    }
}
