//! XML wire structs for the build service API and their mapping into
//! domain request documents.

use serde::Deserialize;
use stg_core::ports::GatewayError;
use stg_core::{
    ActionSource, ActionTarget, ProjectName, RequestAction, RequestDocument, RequestId,
    RequestState, StagingArea,
};

/// `<collection>` as returned by `request?view=collection` and `search/*`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CollectionXml {
    #[serde(default)]
    pub request: Vec<RequestXml>,
    #[serde(default)]
    pub project: Vec<ProjectRefXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RequestXml {
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(default)]
    pub action: Vec<ActionXml>,
    pub state: Option<StateXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActionXml {
    #[serde(rename = "@type")]
    pub kind: Option<String>,
    pub target: Option<EndpointXml>,
    pub source: Option<EndpointXml>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EndpointXml {
    #[serde(rename = "@project")]
    pub project: Option<String>,
    #[serde(rename = "@package")]
    pub package: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StateXml {
    #[serde(rename = "@name")]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectRefXml {
    #[serde(rename = "@name")]
    pub name: String,
}

pub(crate) fn parse_request(body: &str) -> Result<RequestDocument, GatewayError> {
    let request: RequestXml = decode(body)?;
    request.into_document()
}

pub(crate) fn parse_request_collection(body: &str) -> Result<Vec<RequestDocument>, GatewayError> {
    let collection: CollectionXml = decode(body)?;
    collection
        .request
        .into_iter()
        .map(RequestXml::into_document)
        .collect()
}

/// Project names of a `search/project/id` collection, sorted.
pub(crate) fn parse_project_names(body: &str) -> Result<Vec<StagingArea>, GatewayError> {
    let collection: CollectionXml = decode(body)?;
    let mut areas: Vec<StagingArea> = collection
        .project
        .into_iter()
        .map(|project| StagingArea::new(project.name))
        .collect();
    areas.sort();
    Ok(areas)
}

fn decode<T: for<'de> Deserialize<'de>>(body: &str) -> Result<T, GatewayError> {
    quick_xml::de::from_str(body).map_err(|e| GatewayError::Malformed(e.to_string()))
}

impl RequestXml {
    fn into_document(self) -> Result<RequestDocument, GatewayError> {
        let raw_id = self
            .id
            .ok_or_else(|| GatewayError::Malformed("request without id".to_string()))?;
        let id: RequestId = raw_id
            .parse()
            .map_err(|_| GatewayError::Malformed(format!("non-numeric request id \"{}\"", raw_id)))?;

        let state = self
            .state
            .map(|state| RequestState::from(state.name))
            .ok_or_else(|| GatewayError::Malformed(format!("request {} without state", id)))?;

        if self.action.is_empty() {
            return Err(GatewayError::Malformed(format!(
                "request {} without actions",
                id
            )));
        }
        let actions = self
            .action
            .into_iter()
            .map(|action| action.into_action(id))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RequestDocument { id, state, actions })
    }
}

impl ActionXml {
    fn into_action(self, id: RequestId) -> Result<RequestAction, GatewayError> {
        let target = self
            .target
            .and_then(|target| {
                let project = target.project?;
                Some(ActionTarget {
                    project: ProjectName::new(project),
                    package: target.package,
                })
            })
            .ok_or_else(|| {
                GatewayError::Malformed(format!("request {} has an action without target", id))
            })?;

        let source = self.source.and_then(|source| {
            source.project.map(|project| ActionSource {
                project: ProjectName::new(project),
                package: source.package,
            })
        });

        Ok(RequestAction {
            kind: self.kind.unwrap_or_default(),
            target,
            source,
        })
    }
}
