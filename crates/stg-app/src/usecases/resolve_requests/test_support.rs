//! Port mocks and request builders shared by the strategy tests.

use async_trait::async_trait;
use mockall::mock;
use stg_core::ports::{GatewayError, RequestGatewayPort, StagingDirectoryPort};
use stg_core::{
    ActionSource, ActionTarget, ProjectName, RequestAction, RequestDocument, RequestId,
    RequestState, StagingArea,
};

pub const FACTORY: &str = "openSUSE:Factory";

mock! {
    pub Gateway {}

    #[async_trait]
    impl RequestGatewayPort for Gateway {
        async fn fetch_request_by_id(&self, id: RequestId) -> Result<RequestDocument, GatewayError>;
        async fn fetch_requests_by_package(
            &self,
            project: &ProjectName,
            package: &str,
            states: &[RequestState],
        ) -> Result<Vec<RequestDocument>, GatewayError>;
        async fn fetch_requests_by_project(
            &self,
            project: &ProjectName,
            states: &[RequestState],
        ) -> Result<Vec<RequestDocument>, GatewayError>;
    }
}

mock! {
    pub Directory {}

    #[async_trait]
    impl StagingDirectoryPort for Directory {
        async fn list_staging_areas(&self) -> Result<Vec<StagingArea>, GatewayError>;
        async fn has_package_for_request(
            &self,
            area: &StagingArea,
            id: RequestId,
        ) -> Result<bool, GatewayError>;
        async fn request_for_package(
            &self,
            area: &StagingArea,
            package: &str,
        ) -> Result<Option<RequestId>, GatewayError>;
    }
}

/// Single-action submit request.
pub fn request(
    id: u64,
    state: RequestState,
    target_project: &str,
    package: &str,
    source_project: Option<&str>,
) -> RequestDocument {
    RequestDocument {
        id: RequestId::new(id),
        state,
        actions: vec![RequestAction {
            kind: "submit".to_string(),
            target: ActionTarget {
                project: ProjectName::from(target_project),
                package: Some(package.to_string()),
            },
            source: source_project.map(|project| ActionSource {
                project: ProjectName::from(project),
                package: Some(package.to_string()),
            }),
        }],
    }
}
