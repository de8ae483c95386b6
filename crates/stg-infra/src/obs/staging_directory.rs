use std::sync::Arc;

use async_trait::async_trait;
use stg_core::ports::{GatewayError, StagingDirectoryPort};
use stg_core::{RequestDocument, RequestId, StagingArea, StagingConfig};
use tracing::debug;

use super::client::ObsClient;
use super::wire;

/// Staging areas and their staged requests, read through the search API.
///
/// A request counts as staged in an area while the area holds an open
/// review on it.
pub struct ObsStagingDirectory {
    client: Arc<ObsClient>,
    config: StagingConfig,
}

impl ObsStagingDirectory {
    pub fn new(client: Arc<ObsClient>, config: StagingConfig) -> Self {
        Self { client, config }
    }

    async fn staged_requests(&self, area: &StagingArea) -> Result<Vec<RequestDocument>, GatewayError> {
        let predicate = staged_request_predicate(area);
        let body = self
            .client
            .get_xml(&["search", "request"], &[("match", &predicate)])
            .await?;
        let requests = wire::parse_request_collection(&body)?;
        debug!(%area, count = requests.len(), "Fetched staged requests");
        Ok(requests)
    }
}

fn staging_areas_predicate(prefix: &str) -> String {
    format!("starts-with(@name,'{}')", prefix)
}

fn staged_request_predicate(area: &StagingArea) -> String {
    format!(
        "state/@name='review' and review[@by_project='{}' and @state='new']",
        area
    )
}

#[async_trait]
impl StagingDirectoryPort for ObsStagingDirectory {
    async fn list_staging_areas(&self) -> Result<Vec<StagingArea>, GatewayError> {
        let predicate = staging_areas_predicate(&self.config.staging_prefix);
        let body = self
            .client
            .get_xml(&["search", "project", "id"], &[("match", &predicate)])
            .await?;
        wire::parse_project_names(&body)
    }

    async fn has_package_for_request(
        &self,
        area: &StagingArea,
        id: RequestId,
    ) -> Result<bool, GatewayError> {
        let staged = self.staged_requests(area).await?;
        Ok(staged
            .iter()
            .any(|request| request.id == id && request.target_package().is_some()))
    }

    async fn request_for_package(
        &self,
        area: &StagingArea,
        package: &str,
    ) -> Result<Option<RequestId>, GatewayError> {
        let wanted = package.to_lowercase();
        let staged = self.staged_requests(area).await?;
        Ok(staged
            .iter()
            .find(|request| {
                request
                    .target_package()
                    .is_some_and(|name| name.to_lowercase() == wanted)
            })
            .map(|request| request.id))
    }
}
