//! Resolve a request number by fetching it directly.

use stg_core::ports::GatewayError;
use stg_core::{parse_request_id, ProjectName, ResolvedRequest, StagingConfig};
use tracing::{debug, warn};

use super::error::ResolveError;
use super::strategy::StrategyContext;

pub(super) async fn attempt(
    ctx: StrategyContext<'_>,
    token: &str,
) -> Result<Vec<ResolvedRequest>, ResolveError> {
    let Some(id) = parse_request_id(token) else {
        return Ok(Vec::new());
    };

    let document = match ctx.gateway.fetch_request_by_id(id).await {
        Ok(document) => document,
        Err(err) if err.is_not_found() => {
            debug!(token, "request does not exist");
            return Ok(Vec::new());
        }
        Err(err) => return Err(ResolveError::gateway(token, err)),
    };

    if document.id.to_string() != token {
        warn!(token, reported = %document.id, "service reported a different request id");
        return Ok(Vec::new());
    }

    let project = document.target_project().cloned().ok_or_else(|| {
        ResolveError::gateway(
            token,
            GatewayError::Malformed(format!("request {} has no action", document.id)),
        )
    })?;

    if !in_scope(ctx.config, &project) {
        return Err(ResolveError::ScopeViolation {
            id,
            expected: ctx.config.project.clone(),
            actual: project,
        });
    }

    Ok(vec![ResolvedRequest::in_project(id, project)])
}

/// The master project itself or one of its staging sub-projects.
fn in_scope(config: &StagingConfig, project: &ProjectName) -> bool {
    *project == config.project || project.as_str().starts_with(&config.staging_prefix)
}
