use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

use crate::ids::{ProjectName, RequestId, StagingArea};
use crate::request::RequestState;

/// One change request discovered while resolving user input.
///
/// General resolution fills `project` (and `state` when the lookup reports
/// it); staging-scoped resolution fills only `staging`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRequest {
    #[serde(skip)]
    pub id: RequestId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<RequestState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staging: Option<StagingArea>,
}

impl ResolvedRequest {
    pub fn in_project(id: RequestId, project: ProjectName) -> Self {
        Self {
            id,
            project: Some(project),
            state: None,
            staging: None,
        }
    }

    pub fn in_staging(id: RequestId, staging: StagingArea) -> Self {
        Self {
            id,
            project: None,
            state: None,
            staging: Some(staging),
        }
    }

    pub fn with_state(mut self, state: RequestState) -> Self {
        self.state = Some(state);
        self
    }

    /// Overlay the fields `other` sets; fields it leaves empty are kept.
    pub fn merge(&mut self, other: ResolvedRequest) {
        if other.project.is_some() {
            self.project = other.project;
        }
        if other.state.is_some() {
            self.state = other.state;
        }
        if other.staging.is_some() {
            self.staging = other.staging;
        }
    }
}

/// Result mapping of a resolution session, keyed and ordered by request id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedRequests(BTreeMap<RequestId, ResolvedRequest>);

impl ResolvedRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a request, merging into an existing entry with the same id.
    pub fn record(&mut self, request: ResolvedRequest) {
        match self.0.entry(request.id) {
            btree_map::Entry::Occupied(mut existing) => existing.get_mut().merge(request),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(request);
            }
        }
    }

    pub fn get(&self, id: RequestId) -> Option<&ResolvedRequest> {
        self.0.get(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = RequestId> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedRequest> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ResolvedRequests {
    type Item = (RequestId, ResolvedRequest);
    type IntoIter = btree_map::IntoIter<RequestId, ResolvedRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
