use thiserror::Error;

/// Failure talking to the build service.
///
/// `NotFound` is the only authoritative "does not exist" answer; every other
/// variant means the service could not be asked or answered badly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("request timed out")]
    Timeout,

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("transport error: {0}")]
    Transport(String),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound(_))
    }
}
