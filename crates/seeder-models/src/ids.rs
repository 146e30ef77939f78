//! Type-safe wrappers for identifiers handed out by the tracker.
//!
//! Every remote entity gets its own newtype so a label ID can never be passed
//! where an issue ID is expected. The tracker owns ID generation; the seeder
//! only ever wraps strings it received back from a call.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtypes with common functionality.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an identifier returned by the tracker.
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Returns the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ComponentTemplateId);
define_id!(InterfaceTemplateId);
define_id!(RelationTemplateId);
define_id!(IssueTemplateId);
define_id!(IssueTypeId);
define_id!(IssueStateId);
define_id!(IssuePriorityId);
define_id!(IssueRelationTypeId);
define_id!(AssignmentTypeId);
define_id!(
    /// A component (or any other trackable the listing query returns).
    ComponentId
);
define_id!(ComponentVersionId);
define_id!(InterfaceSpecificationId);
define_id!(InterfaceSpecificationVersionId);
define_id!(RelationId);
define_id!(ProjectId);
define_id!(UserId);
define_id!(IssueId);
define_id!(LabelId);
define_id!(
    /// The event the tracker records when a label is added to an issue.
    LabelEventId
);
define_id!(AssignmentId);
define_id!(CommentId);
define_id!(IssueRelationId);

/// Correlation ID for a single seeding run.
///
/// Unlike the remote IDs this one is minted locally and only shows up in logs
/// and the run summary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    /// Creates a new random run ID.
    pub fn new() -> Self {
        Self(format!("run-{}", Uuid::new_v4()))
    }

    /// Returns the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_id_prefix() {
        let id = RunId::new();
        assert!(id.as_str().starts_with("run-"));
        assert_ne!(id, RunId::new());
    }

    #[test]
    fn test_id_from_string() {
        let id = IssueId::from_string("b2c1a1f0-issue");
        assert_eq!(id.as_str(), "b2c1a1f0-issue");
        assert_eq!(format!("{}", id), "b2c1a1f0-issue");
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = ComponentVersionId::from("cv-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"cv-1\"");

        let parsed: ComponentVersionId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_ids_are_unique_types() {
        // Same wire format, distinct types: `let l: LabelId = issue;` does not compile.
        let issue = IssueId::from("x");
        let label = LabelId::from("x");
        assert_eq!(
            serde_json::to_string(&issue).unwrap(),
            serde_json::to_string(&label).unwrap()
        );
    }
}
