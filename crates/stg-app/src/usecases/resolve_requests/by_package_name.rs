//! Resolve a package name to its single pending request.
//!
//! The feed lists requests in increasing id order. A declined request only
//! stands until a newer request for the same package shows up; two requests
//! where the older one is still live are ambiguous.

use stg_core::{RequestState, ResolvedRequest};
use tracing::{debug, warn};

use super::error::ResolveError;
use super::strategy::StrategyContext;

const PACKAGE_STATES: [RequestState; 3] =
    [RequestState::New, RequestState::Review, RequestState::Declined];

pub(super) async fn attempt(
    ctx: StrategyContext<'_>,
    token: &str,
) -> Result<Vec<ResolvedRequest>, ResolveError> {
    let documents = ctx
        .gateway
        .fetch_requests_by_package(&ctx.config.project, token, &PACKAGE_STATES)
        .await
        .map_err(|err| ResolveError::gateway(token, err))?;

    let wanted = token.to_lowercase();
    let mut candidate: Option<ResolvedRequest> = None;

    for document in documents {
        // The service matches package names loosely; only exact (caseless) hits count.
        let Some(package) = document.target_package() else {
            continue;
        };
        if package.to_lowercase() != wanted {
            continue;
        }

        if let Some(previous) = &candidate {
            if document.id <= previous.id {
                return Err(ResolveError::OrderingViolation {
                    package: token.to_string(),
                    previous: previous.id,
                    next: document.id,
                });
            }

            if previous.state.as_ref().is_some_and(RequestState::is_live) {
                return Err(ResolveError::Ambiguous {
                    package: token.to_string(),
                    first: previous.id,
                    second: document.id,
                });
            }
            warn!(
                package = token,
                declined = %previous.id,
                newer = %document.id,
                "dropping declined request superseded by a newer one"
            );
        }

        candidate = Some(
            ResolvedRequest::in_project(document.id, ctx.config.project.clone())
                .with_state(document.state),
        );
    }

    if candidate.is_none() {
        debug!(package = token, "no request targets this package");
    }

    Ok(candidate.into_iter().collect())
}
