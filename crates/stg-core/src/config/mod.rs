//! # Configuration DTOs
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! Missing keys map to empty values here; the loader in `stg-infra` decides
//! what to do about them.

mod staging_config;

pub use staging_config::StagingConfig;

use crate::ids::ProjectName;

/// Build service API access (pure data, no logic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// API base URL, e.g. `https://api.opensuse.org`
    pub url: String,

    /// HTTP basic auth user (may be empty for anonymous access)
    pub username: String,

    /// HTTP basic auth password
    pub password: Option<String>,

    /// Transport timeout in seconds (0 means "not set")
    pub timeout_secs: u64,
}

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ApiConfig,

    /// Master project; empty when the file does not set one
    pub project: String,

    /// Explicit staging namespace prefix, if configured
    pub staging_prefix: Option<String>,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method does not validate; empty strings are valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .map(str::to_string)
        };

        Self {
            api: ApiConfig {
                url: str_at("api", "url").unwrap_or_default(),
                username: str_at("api", "username").unwrap_or_default(),
                password: str_at("api", "password"),
                timeout_secs: toml_value
                    .get("api")
                    .and_then(|a| a.get("timeout_secs"))
                    .and_then(|v| v.as_integer())
                    .unwrap_or(0)
                    .max(0) as u64,
            },
            project: str_at("staging", "project").unwrap_or_default(),
            staging_prefix: str_at("staging", "staging_prefix"),
        }
    }

    /// Staging scope for `project`, honoring a configured prefix.
    pub fn staging_config(&self, project: ProjectName) -> StagingConfig {
        let config = StagingConfig::new(project);
        match &self.staging_prefix {
            Some(prefix) => config.with_staging_prefix(prefix.clone()),
            None => config,
        }
    }
}
