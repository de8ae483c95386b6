use std::sync::Arc;

use async_trait::async_trait;
use stg_core::ports::{GatewayError, RequestGatewayPort};
use stg_core::{ProjectName, RequestDocument, RequestId, RequestState};
use tracing::debug;

use super::client::ObsClient;
use super::wire;

/// Request lookups against `{api}/request`.
pub struct ObsRequestGateway {
    client: Arc<ObsClient>,
}

impl ObsRequestGateway {
    pub fn new(client: Arc<ObsClient>) -> Self {
        Self { client }
    }
}

fn join_states(states: &[RequestState]) -> String {
    states
        .iter()
        .map(RequestState::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

#[async_trait]
impl RequestGatewayPort for ObsRequestGateway {
    async fn fetch_request_by_id(&self, id: RequestId) -> Result<RequestDocument, GatewayError> {
        let id_segment = id.to_string();
        let body = self.client.get_xml(&["request", &id_segment], &[]).await?;
        wire::parse_request(&body)
    }

    async fn fetch_requests_by_package(
        &self,
        project: &ProjectName,
        package: &str,
        states: &[RequestState],
    ) -> Result<Vec<RequestDocument>, GatewayError> {
        let states = join_states(states);
        let body = self
            .client
            .get_xml(
                &["request"],
                &[
                    ("view", "collection"),
                    ("project", project.as_str()),
                    ("package", package),
                    ("states", &states),
                ],
            )
            .await?;

        let requests = wire::parse_request_collection(&body)?;
        debug!(%project, package, count = requests.len(), "Fetched requests by package");
        Ok(requests)
    }

    async fn fetch_requests_by_project(
        &self,
        project: &ProjectName,
        states: &[RequestState],
    ) -> Result<Vec<RequestDocument>, GatewayError> {
        let states = join_states(states);
        let body = self
            .client
            .get_xml(
                &["request"],
                &[
                    ("view", "collection"),
                    ("project", project.as_str()),
                    ("states", &states),
                ],
            )
            .await?;

        let requests = wire::parse_request_collection(&body)?;
        debug!(%project, count = requests.len(), "Fetched requests by project");
        Ok(requests)
    }
}
