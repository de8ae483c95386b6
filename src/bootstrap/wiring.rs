//! Dependency wiring: build service adapters into the resolve use case.

use std::sync::Arc;

use anyhow::Context;
use stg_app::ResolveRequests;
use stg_infra::{ObsClient, ObsRequestGateway, ObsStagingDirectory};

use super::config::RuntimeConfig;

/// Build the resolve use case backed by the build service API.
pub fn wire_resolve_requests(config: &RuntimeConfig) -> anyhow::Result<ResolveRequests> {
    let client = Arc::new(
        ObsClient::new(&config.api)
            .with_context(|| format!("Failed to create API client for {}", config.api.url))?,
    );

    let gateway = Arc::new(ObsRequestGateway::new(client.clone()));
    let directory = Arc::new(ObsStagingDirectory::new(client, config.staging.clone()));

    Ok(ResolveRequests::new(gateway, directory, config.staging.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stg_core::{ApiConfig, StagingConfig};

    fn runtime(url: &str) -> RuntimeConfig {
        RuntimeConfig {
            api: ApiConfig {
                url: url.to_string(),
                ..ApiConfig::default()
            },
            staging: StagingConfig::new("openSUSE:Factory"),
        }
    }

    #[test]
    fn test_wiring_keeps_the_staging_scope() {
        let use_case = wire_resolve_requests(&runtime("https://api.opensuse.org")).unwrap();
        assert_eq!(use_case.config().project, "openSUSE:Factory");
    }

    #[test]
    fn test_invalid_api_url_fails_wiring() {
        let err = wire_resolve_requests(&runtime("::nope::"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to create API client"));
    }
}
