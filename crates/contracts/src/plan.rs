//! TeePlan - Config Loader output
//!
//! Describes a complete run: input sources, output sinks, behavior flags,
//! and the redux throttle stride.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConfigVersion {
    #[default]
    V1,
}

/// Identifier for an input source or output sink.
///
/// Either a real file path or one of the stdio sentinels `.`, `-`,
/// `/dev/stdin`, `/dev/stdout`, which select the process streams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamId(String);

impl StreamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Sentinel for the process's standard input/output
    pub fn stdio() -> Self {
        Self("-".to_string())
    }

    /// Whether this identifier names the process's stdin/stdout
    pub fn is_stdio(&self) -> bool {
        matches!(self.0.as_str(), "." | "-" | "/dev/stdin" | "/dev/stdout")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StreamId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Behavior flags
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TeeFlags {
    /// Render progress marks on the status stream
    #[serde(default)]
    pub progress: bool,

    /// Append to file sinks instead of truncating
    #[serde(default)]
    pub append: bool,

    /// Suppress all status output (fatal errors stay visible)
    #[serde(default)]
    pub quiet: bool,

    /// Drop adjacent duplicates after sorting (implies `sort`)
    #[serde(default)]
    pub unique: bool,

    /// Sort the buffered line set byte-wise ascending
    #[serde(default)]
    pub sort: bool,

    /// Sanitize lines echoed to the status stream
    #[serde(default)]
    pub cleanup: bool,
}

/// Complete run plan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeePlan {
    /// Configuration version
    #[serde(default)]
    pub version: ConfigVersion,

    /// Ordered input sources
    #[serde(default)]
    pub inputs: Vec<StreamId>,

    /// Ordered output sinks
    #[serde(default)]
    pub outputs: Vec<StreamId>,

    /// Behavior flags
    #[serde(default)]
    pub flags: TeeFlags,

    /// Status throttle stride: emit roughly one status line/mark per
    /// `redux` processed lines. 0 and 1 both mean "every line".
    #[serde(default)]
    pub redux: Option<u64>,
}

impl TeePlan {
    /// Effective redux stride; absent means "every line"
    pub fn redux_stride(&self) -> u64 {
        self.redux.unwrap_or(0)
    }
}
