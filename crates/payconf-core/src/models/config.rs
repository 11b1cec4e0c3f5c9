//! Configuration structures for message parsing and output.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Main configuration for payconf.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayconfConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Digits every destination account starts with.
    pub account_prefix: String,

    /// Minimum total account length, prefix included.
    pub account_min_length: usize,

    /// Maximum total account length, prefix included.
    pub account_max_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            account_prefix: "41001".to_string(),
            account_min_length: 13,
            account_max_length: 16,
        }
    }
}

/// Output configuration used by the command line tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty_json: bool,

    /// Strip one trailing line break from messages read from files or stdin.
    pub strip_trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty_json: true,
            strip_trailing_newline: true,
        }
    }
}

impl PayconfConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
