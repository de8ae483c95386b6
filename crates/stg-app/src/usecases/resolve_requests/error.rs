use stg_core::ports::GatewayError;
use stg_core::{ProjectName, RequestId};

/// Fatal resolution failure. Every variant names the offending input.
///
/// A strategy that merely finds nothing does not produce an error; it
/// returns no hits and the session moves on to the next strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The request exists but targets a project outside the staging scope.
    #[error("Request {id} is not for {expected}, but for {actual}")]
    ScopeViolation {
        id: RequestId,
        expected: ProjectName,
        actual: ProjectName,
    },

    /// More than one live request for a package that must resolve to one.
    #[error("There are multiple requests for package \"{package}\": {first} and {second}")]
    Ambiguous {
        package: String,
        first: RequestId,
        second: RequestId,
    },

    /// The service returned package requests out of id order.
    #[error(
        "Request IDs for package \"{package}\" do not increase monotonically: {next} after {previous}"
    )]
    OrderingViolation {
        package: String,
        previous: RequestId,
        next: RequestId,
    },

    /// No strategy of the active pipeline matched.
    #[error("No SR# found for: {token}")]
    Unresolved { token: String },

    /// The build service could not be queried for this token.
    #[error("Failed to look up \"{token}\": {source}")]
    Gateway {
        token: String,
        #[source]
        source: GatewayError,
    },
}

impl ResolveError {
    pub(crate) fn gateway(token: &str, source: GatewayError) -> Self {
        ResolveError::Gateway {
            token: token.to_string(),
            source,
        }
    }

    pub(crate) fn unresolved(token: &str) -> Self {
        ResolveError::Unresolved {
            token: token.to_string(),
        }
    }
}
