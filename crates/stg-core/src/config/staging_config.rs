//! Staging scope configuration

use serde::{Deserialize, Serialize};

use crate::ids::ProjectName;

const OPENSUSE_NAMESPACE: &str = "openSUSE:";

/// Scope every resolution session runs under.
///
/// Passed explicitly into the resolver; nothing reads it from global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagingConfig {
    /// Master integration project, e.g. `openSUSE:Factory`
    pub project: ProjectName,

    /// Prefix shared by all staging sub-projects, e.g. `openSUSE:Factory:Staging:`
    pub staging_prefix: String,
}

impl StagingConfig {
    /// Scope for `project` with the conventional `<project>:Staging:` namespace.
    pub fn new(project: impl Into<ProjectName>) -> Self {
        let project = project.into();
        let staging_prefix = format!("{}:Staging:", project);
        Self {
            project,
            staging_prefix,
        }
    }

    pub fn with_staging_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.staging_prefix = prefix.into();
        self
    }

    /// Expand a project name the way the command line accepts it: the
    /// `openSUSE:` namespace is prepended unless the name already has it.
    ///
    /// `Factory` becomes `openSUSE:Factory`, `Factory:PowerPC` becomes
    /// `openSUSE:Factory:PowerPC`.
    pub fn expand_project_name(name: &str) -> ProjectName {
        if name.starts_with(OPENSUSE_NAMESPACE) {
            ProjectName::from(name)
        } else {
            ProjectName::new(format!("{}{}", OPENSUSE_NAMESPACE, name))
        }
    }
}
