//! CLI command implementations.

pub mod batch;
pub mod config;
pub mod parse;

use std::path::{Path, PathBuf};

use payconf_core::PayconfConfig;
use tracing::debug;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("payconf")
        .join("config.json")
}

/// Config file to use: the explicit path if given, otherwise the default one.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load configuration. An explicit path must exist; the default path falls
/// back to built-in defaults when absent.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<PayconfConfig> {
    if let Some(path) = explicit {
        return Ok(PayconfConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(PayconfConfig::from_file(&path)?)
    } else {
        Ok(PayconfConfig::default())
    }
}

/// Drop a single trailing line break left by editors and `echo`.
pub fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}
