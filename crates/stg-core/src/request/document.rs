//! Request documents as returned by the build service.
//!
//! These are decoded facts; the infrastructure layer maps wire formats into
//! them and the resolution strategies only read them.

use crate::ids::{ProjectName, RequestId};
use crate::request::RequestState;

/// `target` element of a request action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTarget {
    pub project: ProjectName,
    pub package: Option<String>,
}

/// `source` element of a request action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSource {
    pub project: ProjectName,
    pub package: Option<String>,
}

/// One action of a change request (`submit`, `delete`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestAction {
    pub kind: String,
    pub target: ActionTarget,
    pub source: Option<ActionSource>,
}

/// A change request with at least one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDocument {
    pub id: RequestId,
    pub state: RequestState,
    pub actions: Vec<RequestAction>,
}

impl RequestDocument {
    /// The first action decides the target of the whole request.
    pub fn primary_action(&self) -> Option<&RequestAction> {
        self.actions.first()
    }

    pub fn target_project(&self) -> Option<&ProjectName> {
        self.primary_action().map(|action| &action.target.project)
    }

    pub fn target_package(&self) -> Option<&str> {
        self.primary_action()
            .and_then(|action| action.target.package.as_deref())
    }

    /// Whether any action of this request is sourced from `project`.
    pub fn has_source_project(&self, project: &str) -> bool {
        self.actions.iter().any(|action| {
            action
                .source
                .as_ref()
                .is_some_and(|source| source.project == project)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(source: Option<&str>, target: &str, package: &str) -> RequestAction {
        RequestAction {
            kind: "submit".to_string(),
            target: ActionTarget {
                project: ProjectName::from(target),
                package: Some(package.to_string()),
            },
            source: source.map(|project| ActionSource {
                project: ProjectName::from(project),
                package: Some(package.to_string()),
            }),
        }
    }

    #[test]
    fn test_primary_action_drives_target() {
        let doc = RequestDocument {
            id: RequestId::new(1),
            state: RequestState::New,
            actions: vec![
                submit(None, "openSUSE:Factory", "vim"),
                submit(None, "openSUSE:Other", "emacs"),
            ],
        };

        assert_eq!(doc.target_project().unwrap(), "openSUSE:Factory");
        assert_eq!(doc.target_package(), Some("vim"));
    }

    #[test]
    fn test_source_project_checks_every_action() {
        let doc = RequestDocument {
            id: RequestId::new(2),
            state: RequestState::Review,
            actions: vec![
                submit(None, "openSUSE:Factory", "a"),
                submit(Some("devel:foo"), "openSUSE:Factory", "b"),
            ],
        };

        assert!(doc.has_source_project("devel:foo"));
        assert!(!doc.has_source_project("devel"));
    }

    #[test]
    fn test_document_without_actions_has_no_target() {
        let doc = RequestDocument {
            id: RequestId::new(3),
            state: RequestState::New,
            actions: vec![],
        };

        assert!(doc.target_project().is_none());
        assert!(doc.target_package().is_none());
    }
}
