//! Resolve a token against what is already staged.
//!
//! Each staging area is asked first by request number (numeric tokens only),
//! then by package name. A token may be staged in several areas; that is left
//! for the caller to judge.

use stg_core::{parse_request_id, ResolvedRequest};
use tracing::debug;

use super::error::ResolveError;
use super::strategy::StrategyContext;

pub(super) async fn attempt(
    ctx: StrategyContext<'_>,
    token: &str,
) -> Result<Vec<ResolvedRequest>, ResolveError> {
    let gateway_err = |err| ResolveError::gateway(token, err);

    let areas = ctx.directory.list_staging_areas().await.map_err(gateway_err)?;
    let numeric = parse_request_id(token);
    let mut hits = Vec::new();

    for area in areas {
        if let Some(id) = numeric {
            if ctx
                .directory
                .has_package_for_request(&area, id)
                .await
                .map_err(gateway_err)?
            {
                debug!(token, staging = %area, "request is staged");
                hits.push(ResolvedRequest::in_staging(id, area));
                continue;
            }
        }

        if let Some(id) = ctx
            .directory
            .request_for_package(&area, token)
            .await
            .map_err(gateway_err)?
        {
            debug!(token, staging = %area, request = %id, "package is staged");
            hits.push(ResolvedRequest::in_staging(id, area));
        }
    }

    if hits.is_empty() {
        return Err(ResolveError::unresolved(token));
    }
    Ok(hits)
}
