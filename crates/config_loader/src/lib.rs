//! # Config Loader
//!
//! Configuration loading, defaulting, and validation.
//!
//! Responsibilities:
//! - Parse TOML/JSON run profiles
//! - Apply the defaulting rules (empty sink/source lists, `unique` implies `sort`)
//! - Validate plan legality
//! - Produce a read-only `TeePlan` plus the notices the CLI should surface
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//! use std::path::Path;
//!
//! let plan = ConfigLoader::load_from_path(Path::new("linetee.toml")).unwrap();
//! println!("inputs: {}", plan.inputs.len());
//! ```

mod parser;
mod resolver;
mod validator;

pub use contracts::TeePlan;
pub use parser::ConfigFormat;
pub use resolver::{resolve, Notice, NoticeLevel};
pub use validator::validate;

use contracts::TeeError;
use std::path::Path;

/// Configuration loader
///
/// Provides static methods to load a run profile from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a profile from a file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<TeePlan, TeeError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load a profile from a string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<TeePlan, TeeError> {
        Self::parse_and_validate(content, format)
    }

    /// Serialize a TeePlan to a TOML string
    pub fn to_toml(plan: &TeePlan) -> Result<String, TeeError> {
        toml::to_string_pretty(plan)
            .map_err(|e| TeeError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize a TeePlan to a JSON string
    pub fn to_json(plan: &TeePlan) -> Result<String, TeeError> {
        serde_json::to_string_pretty(plan)
            .map_err(|e| TeeError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, TeeError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| TeeError::config_parse("cannot determine file format from extension"))?;

        ConfigFormat::from_extension(ext)
            .ok_or_else(|| TeeError::config_parse(format!("unsupported config format: .{ext}")))
    }

    /// Read profile file content
    fn read_file(path: &Path) -> Result<String, TeeError> {
        Ok(std::fs::read_to_string(path)?)
    }

    /// Parse and validate profile content
    fn parse_and_validate(content: &str, format: ConfigFormat) -> Result<TeePlan, TeeError> {
        let plan = parser::parse(content, format)?;
        validator::validate(&plan)?;
        Ok(plan)
    }
}
