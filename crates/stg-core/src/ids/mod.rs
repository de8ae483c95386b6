//! ID type wrappers for type safety.

mod name_macro;
pub mod request_id;

use name_macro::impl_name;
use serde::{Deserialize, Serialize};

pub use request_id::RequestId;

/// Build service project name, e.g. `openSUSE:Factory`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

/// Staging sub-project name, e.g. `openSUSE:Factory:Staging:A`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StagingArea(String);

impl_name!(ProjectName, StagingArea);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_compares_with_str() {
        let project = ProjectName::new("openSUSE:Factory");
        assert_eq!(project, "openSUSE:Factory");
        assert_eq!(project.as_str(), "openSUSE:Factory");
    }
}
