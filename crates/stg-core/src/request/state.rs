use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Lifecycle state of a change request as reported by the build service.
///
/// Only `Declined` carries meaning for resolution; every other state counts
/// as live. States the service invents later are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestState {
    New,
    Review,
    Declined,
    Accepted,
    Revoked,
    Superseded,
    Other(String),
}

impl RequestState {
    pub fn as_str(&self) -> &str {
        match self {
            RequestState::New => "new",
            RequestState::Review => "review",
            RequestState::Declined => "declined",
            RequestState::Accepted => "accepted",
            RequestState::Revoked => "revoked",
            RequestState::Superseded => "superseded",
            RequestState::Other(name) => name,
        }
    }

    /// A live request is any request that has not been declined.
    pub fn is_live(&self) -> bool {
        !matches!(self, RequestState::Declined)
    }
}

impl From<&str> for RequestState {
    fn from(name: &str) -> Self {
        match name {
            "new" => RequestState::New,
            "review" => RequestState::Review,
            "declined" => RequestState::Declined,
            "accepted" => RequestState::Accepted,
            "revoked" => RequestState::Revoked,
            "superseded" => RequestState::Superseded,
            other => RequestState::Other(other.to_string()),
        }
    }
}

impl From<String> for RequestState {
    fn from(name: String) -> Self {
        RequestState::from(name.as_str())
    }
}

impl From<RequestState> for String {
    fn from(state: RequestState) -> Self {
        state.as_str().to_string()
    }
}

impl Display for RequestState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_states_parse() {
        assert_eq!(RequestState::from("new"), RequestState::New);
        assert_eq!(RequestState::from("review"), RequestState::Review);
        assert_eq!(RequestState::from("declined"), RequestState::Declined);
    }

    #[test]
    fn test_unknown_state_is_kept_verbatim() {
        let state = RequestState::from("deleted");
        assert_eq!(state, RequestState::Other("deleted".to_string()));
        assert_eq!(state.as_str(), "deleted");
        assert!(state.is_live());
    }

    #[test]
    fn test_only_declined_is_not_live() {
        assert!(!RequestState::Declined.is_live());
        assert!(RequestState::New.is_live());
        assert!(RequestState::Review.is_live());
    }

    #[test]
    fn test_state_serializes_as_name() {
        let json = serde_json::to_string(&RequestState::Declined).unwrap();
        assert_eq!(json, "\"declined\"");
    }
}
