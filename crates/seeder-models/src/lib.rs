//! Core data models for the tracker seeder.
//!
//! This crate provides the identifiers handed out by the tracker, the
//! resolved issue template, and the static catalog of demo entities.

pub mod catalog;
pub mod icons;
pub mod ids;
pub mod issue_template;

// Re-export main types
pub use ids::{
    AssignmentId, AssignmentTypeId, CommentId, ComponentId, ComponentTemplateId,
    ComponentVersionId, InterfaceSpecificationId, InterfaceSpecificationVersionId,
    InterfaceTemplateId, IssueId, IssuePriorityId, IssueRelationId, IssueRelationTypeId,
    IssueStateId, IssueTemplateId, IssueTypeId, LabelEventId, LabelId, ProjectId,
    RelationId, RelationTemplateId, RunId, UserId,
};
pub use issue_template::IssueTemplate;
