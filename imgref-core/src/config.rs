//! Configuration for a check run

use std::{fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Verification strategy to apply to each reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckMode {
    /// Plain existence (wrong-case hits pass on case-insensitive filesystems)
    Existence,
    /// Existence plus byte-for-byte case match of every path segment
    ExactCase,
}

impl Default for CheckMode {
    fn default() -> Self {
        CheckMode::Existence
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMode::Existence => write!(f, "existence"),
            CheckMode::ExactCase => write!(f, "exact-case"),
        }
    }
}

/// Settings for a single check run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Source data file to scan for image references
    pub source:  PathBuf,
    /// Asset root directory references resolve against
    pub root:    PathBuf,
    /// Verification strategy
    pub mode:    CheckMode,
    /// Whether to print per-reference progress
    pub verbose: bool,
}

impl CheckConfig {
    /// Create a configuration with the default (plain existence) mode
    pub fn new(source: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            source:  source.into(),
            root:    root.into(),
            mode:    CheckMode::default(),
            verbose: false,
        }
    }

    /// Select the verification strategy
    pub fn with_mode(mut self, mode: CheckMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable per-reference progress output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
