//! # Configuration loader
//!
//! Reads the TOML file and maps it into [`AppConfig`]. Accepts whatever is
//! in the file; defaults and overrides are applied by the caller.

use std::path::{Path, PathBuf};

use anyhow::Context;
use stg_core::AppConfig;

const APP_DIR: &str = "osc-staging";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config as TOML: {}", config_path.display()))?;
    Ok(AppConfig::from_toml(&toml_value))
}

/// `<config_dir>/osc-staging/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
