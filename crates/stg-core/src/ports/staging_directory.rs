//! Staging directory port - which requests sit in which staging area

use async_trait::async_trait;

use crate::ids::{RequestId, StagingArea};
use crate::ports::errors::GatewayError;

#[async_trait]
pub trait StagingDirectoryPort: Send + Sync {
    /// All staging areas of the master project.
    async fn list_staging_areas(&self) -> Result<Vec<StagingArea>, GatewayError>;

    /// Whether `area` holds a package staged through request `id`.
    async fn has_package_for_request(
        &self,
        area: &StagingArea,
        id: RequestId,
    ) -> Result<bool, GatewayError>;

    /// Request through which `package` is staged in `area`, if any.
    async fn request_for_package(
        &self,
        area: &StagingArea,
        package: &str,
    ) -> Result<Option<RequestId>, GatewayError>;
}
