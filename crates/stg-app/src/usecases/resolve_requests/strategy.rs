use stg_core::ports::{RequestGatewayPort, StagingDirectoryPort};
use stg_core::{ResolvedRequest, StagingConfig};

use super::error::ResolveError;
use super::{by_package_name, by_source_project, direct_id, staging_scoped};

/// Everything a strategy may consult while resolving one token.
#[derive(Clone, Copy)]
pub struct StrategyContext<'a> {
    pub gateway: &'a dyn RequestGatewayPort,
    pub directory: &'a dyn StagingDirectoryPort,
    pub config: &'a StagingConfig,
}

/// The closed set of ways a token can be turned into requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Token is a request number.
    DirectId,
    /// Token is a package name with exactly one open (or last declined) request.
    ByPackageName,
    /// Token is the source project of one or more open requests.
    BySourceProject,
    /// Token is a request number or package staged in some staging area.
    StagingScoped,
}

impl ResolutionStrategy {
    /// Try to resolve `token`.
    ///
    /// An empty vector is a miss; the caller may try the next strategy.
    pub async fn attempt(
        self,
        ctx: StrategyContext<'_>,
        token: &str,
    ) -> Result<Vec<ResolvedRequest>, ResolveError> {
        match self {
            ResolutionStrategy::DirectId => direct_id::attempt(ctx, token).await,
            ResolutionStrategy::ByPackageName => by_package_name::attempt(ctx, token).await,
            ResolutionStrategy::BySourceProject => by_source_project::attempt(ctx, token).await,
            ResolutionStrategy::StagingScoped => staging_scoped::attempt(ctx, token).await,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ResolutionStrategy::DirectId => "direct_id",
            ResolutionStrategy::ByPackageName => "by_package_name",
            ResolutionStrategy::BySourceProject => "by_source_project",
            ResolutionStrategy::StagingScoped => "staging_scoped",
        }
    }
}
