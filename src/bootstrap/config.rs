//! Turn the config file and command line into the settings a run needs.
//!
//! The file loader accepts whatever is in the file; defaults and overrides
//! are applied here.

use std::path::PathBuf;

use anyhow::Context;
use stg_core::{ApiConfig, AppConfig, ProjectName, StagingConfig};
use stg_infra::{default_config_path, load_config};
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.opensuse.org";
pub const DEFAULT_PROJECT: &str = "Factory";
pub const PASSWORD_ENV: &str = "OSC_STAGING_PASSWORD";

/// Settings for one run, after defaults and overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub api: ApiConfig,
    pub staging: StagingConfig,
}

/// Command line and environment inputs that override the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub project: Option<String>,
    pub password: Option<String>,
}

impl Overrides {
    /// Command line values plus the password from `OSC_STAGING_PASSWORD`.
    pub fn from_cli(config_path: Option<PathBuf>, project: Option<String>) -> Self {
        Self {
            config_path,
            project,
            password: std::env::var(PASSWORD_ENV).ok().filter(|p| !p.is_empty()),
        }
    }
}

/// Load the config file and apply `overrides`.
///
/// An explicit `--config` must exist. The default location is optional;
/// without it every setting takes its default.
pub fn resolve_runtime_config(overrides: Overrides) -> anyhow::Result<RuntimeConfig> {
    let file_config = match &overrides.config_path {
        Some(path) => load_config(path)?,
        None => load_default_config()?,
    };
    Ok(apply_overrides(file_config, overrides))
}

fn load_default_config() -> anyhow::Result<AppConfig> {
    match default_config_path() {
        Some(path) if path.exists() => load_config(&path)
            .with_context(|| format!("Failed to load default config: {}", path.display())),
        Some(path) => {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(AppConfig::default())
        }
        None => Ok(AppConfig::default()),
    }
}

fn apply_overrides(mut config: AppConfig, overrides: Overrides) -> RuntimeConfig {
    if config.api.url.is_empty() {
        config.api.url = DEFAULT_API_URL.to_string();
    }
    if let Some(password) = overrides.password {
        config.api.password = Some(password);
    }

    // A configured staging prefix belongs to the configured project only.
    let staging = match overrides.project {
        Some(name) => StagingConfig::new(StagingConfig::expand_project_name(&name)),
        None if !config.project.is_empty() => {
            let project = file_project_name(&config.project);
            config.staging_config(project)
        }
        None => StagingConfig::new(StagingConfig::expand_project_name(DEFAULT_PROJECT)),
    };

    RuntimeConfig {
        api: config.api,
        staging,
    }
}

/// Full names (`SUSE:SLE-15:GA`) are taken as written; a bare name such as
/// `Factory` is expanded like the command line value.
fn file_project_name(name: &str) -> ProjectName {
    if name.contains(':') {
        ProjectName::from(name)
    } else {
        StagingConfig::expand_project_name(name)
    }
}
