//! The resolved issue template the generator draws from.

use serde::{Deserialize, Serialize};

use crate::ids::{
    AssignmentTypeId, IssuePriorityId, IssueRelationTypeId, IssueStateId, IssueTemplateId,
    IssueTypeId,
};

/// An issue template as created on the tracker, with the IDs of every
/// option it generated.
///
/// The option lists keep the order in which they were submitted, so index 0
/// of `issue_states` is the first state of the catalog definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueTemplate {
    /// Template ID.
    pub id: IssueTemplateId,
    /// Issue types (Bug, Feature Request, ...).
    pub issue_types: Vec<IssueTypeId>,
    /// Issue states (Open, Closed, ...).
    pub issue_states: Vec<IssueStateId>,
    /// Issue priorities.
    pub issue_priorities: Vec<IssuePriorityId>,
    /// Issue-to-issue relation types.
    pub relation_types: Vec<IssueRelationTypeId>,
    /// Assignment types (Reviewer, Assignee, ...).
    pub assignment_types: Vec<AssignmentTypeId>,
}
