//! Resolve a source (devel) project to every open request it submitted.

use stg_core::{RequestState, ResolvedRequest};
use tracing::debug;

use super::error::ResolveError;
use super::strategy::StrategyContext;

const OPEN_STATES: [RequestState; 2] = [RequestState::New, RequestState::Review];

pub(super) async fn attempt(
    ctx: StrategyContext<'_>,
    token: &str,
) -> Result<Vec<ResolvedRequest>, ResolveError> {
    let documents = ctx
        .gateway
        .fetch_requests_by_project(&ctx.config.project, &OPEN_STATES)
        .await
        .map_err(|err| ResolveError::gateway(token, err))?;

    let hits: Vec<ResolvedRequest> = documents
        .into_iter()
        .filter(|document| document.has_source_project(token))
        .map(|document| {
            ResolvedRequest::in_project(document.id, ctx.config.project.clone())
                .with_state(document.state)
        })
        .collect();

    debug!(source_project = token, matches = hits.len(), "scanned open requests");
    Ok(hits)
}
