//! Resolve user tokens (SR#, package name, source project) into change requests.

mod by_package_name;
mod by_source_project;
mod direct_id;
mod error;
mod session;
mod staging_scoped;
mod strategy;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use stg_core::ports::{RequestGatewayPort, StagingDirectoryPort};
use stg_core::{ResolvedRequests, StagingConfig};
use tracing::{info_span, Instrument};

pub use error::ResolveError;
pub use session::ResolutionSession;
pub use strategy::{ResolutionStrategy, StrategyContext};

/// Package name first, then request number, then source project.
pub const GENERAL_PIPELINE: &[ResolutionStrategy] = &[
    ResolutionStrategy::ByPackageName,
    ResolutionStrategy::DirectId,
    ResolutionStrategy::BySourceProject,
];

/// Only what is already staged counts.
pub const STAGING_PIPELINE: &[ResolutionStrategy] = &[ResolutionStrategy::StagingScoped];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Requests targeting the master project or its staging areas.
    General,
    /// Requests already placed in a staging area.
    StagingScoped,
}

impl ResolutionMode {
    pub fn pipeline(self) -> &'static [ResolutionStrategy] {
        match self {
            ResolutionMode::General => GENERAL_PIPELINE,
            ResolutionMode::StagingScoped => STAGING_PIPELINE,
        }
    }
}

/// Resolve a list of tokens into one id-keyed mapping of requests.
pub struct ResolveRequests {
    gateway: Arc<dyn RequestGatewayPort>,
    directory: Arc<dyn StagingDirectoryPort>,
    config: StagingConfig,
}

impl ResolveRequests {
    pub fn new(
        gateway: Arc<dyn RequestGatewayPort>,
        directory: Arc<dyn StagingDirectoryPort>,
        config: StagingConfig,
    ) -> Self {
        Self {
            gateway,
            directory,
            config,
        }
    }

    pub fn config(&self) -> &StagingConfig {
        &self.config
    }

    /// General mode: requests by package, number or source project.
    pub async fn resolve<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<ResolvedRequests, ResolveError> {
        self.execute(tokens, ResolutionMode::General).await
    }

    /// Staging-scoped mode: requests already placed in a staging area.
    pub async fn resolve_scoped<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Result<ResolvedRequests, ResolveError> {
        self.execute(tokens, ResolutionMode::StagingScoped).await
    }

    /// Resolve every token with `mode`; the first fatal error aborts the call.
    pub async fn execute<S: AsRef<str>>(
        &self,
        tokens: &[S],
        mode: ResolutionMode,
    ) -> Result<ResolvedRequests, ResolveError> {
        let span = info_span!(
            "usecase.resolve_requests.execute",
            mode = ?mode,
            project = %self.config.project,
            tokens = tokens.len()
        );

        async {
            let ctx = StrategyContext {
                gateway: self.gateway.as_ref(),
                directory: self.directory.as_ref(),
                config: &self.config,
            };
            let mut session = ResolutionSession::new(ctx, mode.pipeline());
            for token in tokens {
                session.resolve_token(token.as_ref()).await?;
            }
            Ok(session.finish())
        }
        .instrument(span)
        .await
    }
}
