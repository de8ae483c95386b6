//! Request gateway port - read-only queries against the build service

use async_trait::async_trait;

use crate::ids::{ProjectName, RequestId};
use crate::ports::errors::GatewayError;
use crate::request::{RequestDocument, RequestState};

#[async_trait]
pub trait RequestGatewayPort: Send + Sync {
    /// Fetch one request by number.
    ///
    /// Error semantics:
    /// - NotFound : the service reports no such request
    /// - others   : the lookup itself failed
    async fn fetch_request_by_id(&self, id: RequestId) -> Result<RequestDocument, GatewayError>;

    /// Requests targeting `project` for `package` in any of `states`.
    ///
    /// The service filters server side and returns requests in increasing id
    /// order. Package matching on the service is loose; callers re-check.
    async fn fetch_requests_by_package(
        &self,
        project: &ProjectName,
        package: &str,
        states: &[RequestState],
    ) -> Result<Vec<RequestDocument>, GatewayError>;

    /// All requests targeting `project` in any of `states`.
    async fn fetch_requests_by_project(
        &self,
        project: &ProjectName,
        states: &[RequestState],
    ) -> Result<Vec<RequestDocument>, GatewayError>;
}

#[cfg(test)]
mockall::mock! {
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
