use stg_core::ResolvedRequests;
use tracing::{debug, info};

use super::error::ResolveError;
use super::strategy::{ResolutionStrategy, StrategyContext};

/// One call's worth of token matching.
///
/// Owns the result mapping exclusively; a new session is built for every
/// resolution call.
pub struct ResolutionSession<'a> {
    ctx: StrategyContext<'a>,
    pipeline: &'static [ResolutionStrategy],
    found: ResolvedRequests,
}

impl<'a> ResolutionSession<'a> {
    pub fn new(ctx: StrategyContext<'a>, pipeline: &'static [ResolutionStrategy]) -> Self {
        Self {
            ctx,
            pipeline,
            found: ResolvedRequests::new(),
        }
    }

    /// Run `token` through the pipeline until one strategy hits.
    pub async fn resolve_token(&mut self, token: &str) -> Result<(), ResolveError> {
        for strategy in self.pipeline {
            let hits = strategy.attempt(self.ctx, token).await?;
            if hits.is_empty() {
                debug!(token, strategy = strategy.name(), "miss");
                continue;
            }

            info!(
                token,
                strategy = strategy.name(),
                requests = hits.len(),
                "resolved"
            );
            for hit in hits {
                self.found.record(hit);
            }
            return Ok(());
        }

        Err(ResolveError::unresolved(token))
    }

    pub fn finish(self) -> ResolvedRequests {
        self.found
    }
}
