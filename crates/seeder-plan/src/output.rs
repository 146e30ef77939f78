//! Typed outputs of executed steps.

use std::collections::HashMap;

use seeder_client::{CreatedComponent, CreatedInterfaceSpecification};
use seeder_models::{
    ComponentTemplateId, ComponentVersionId, InterfaceSpecificationVersionId, InterfaceTemplateId,
    IssueTemplate, ProjectId, RelationId, RelationTemplateId,
};

use crate::error::{PlanError, Result};
use crate::step::StepKey;

/// What a successful step produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutput {
    ComponentTemplate(ComponentTemplateId),
    InterfaceTemplate(InterfaceTemplateId),
    RelationTemplate(RelationTemplateId),
    IssueTemplate(IssueTemplate),
    Component(CreatedComponent),
    InterfaceSpecification(CreatedInterfaceSpecification),
    /// Interface versions linked to the component version.
    InterfacesAttached(Vec<InterfaceSpecificationVersionId>),
    Relation(RelationId),
    Project(ProjectId),
    ProjectMember(ComponentVersionId),
}

impl StepOutput {
    /// Kind name, matching [`StepKind::name`](crate::StepKind::name).
    pub fn kind(&self) -> &'static str {
        match self {
            StepOutput::ComponentTemplate(_) => "component-template",
            StepOutput::InterfaceTemplate(_) => "interface-template",
            StepOutput::RelationTemplate(_) => "relation-template",
            StepOutput::IssueTemplate(_) => "issue-template",
            StepOutput::Component(_) => "component",
            StepOutput::InterfaceSpecification(_) => "interface-specification",
            StepOutput::InterfacesAttached(_) => "attach-interfaces",
            StepOutput::Relation(_) => "relation",
            StepOutput::Project(_) => "project",
            StepOutput::ProjectMember(_) => "add-to-project",
        }
    }
}

/// Generates a typed accessor that reads one output variant by step key.
macro_rules! output_accessor {
    ($(#[$meta:meta])* $fn_name:ident, $variant:ident, $ty:ty, $kind:literal) => {
        $(#[$meta])*
        pub fn $fn_name(&self, key: &StepKey) -> Result<&$ty> {
            match self.get(key)? {
                StepOutput::$variant(value) => Ok(value),
                other => Err(PlanError::OutputKind {
                    step: key.clone(),
                    expected: $kind,
                    found: other.kind(),
                }),
            }
        }
    };
}

/// Outputs of every step that succeeded, by key.
#[derive(Debug, Default, Clone)]
pub struct Outputs {
    values: HashMap<StepKey, StepOutput>,
}

impl Outputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: StepKey, output: StepOutput) {
        self.values.insert(key, output);
    }

    pub fn contains(&self, key: &StepKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the raw output of a step.
    pub fn get(&self, key: &StepKey) -> Result<&StepOutput> {
        self.values
            .get(key)
            .ok_or_else(|| PlanError::MissingOutput(key.clone()))
    }

    output_accessor!(component_template, ComponentTemplate, ComponentTemplateId, "component-template");
    output_accessor!(interface_template, InterfaceTemplate, InterfaceTemplateId, "interface-template");
    output_accessor!(relation_template, RelationTemplate, RelationTemplateId, "relation-template");
    output_accessor!(
        /// The resolved issue template, with the IDs of all its options.
        issue_template,
        IssueTemplate,
        IssueTemplate,
        "issue-template"
    );
    output_accessor!(component, Component, CreatedComponent, "component");
    output_accessor!(
        interface_specification,
        InterfaceSpecification,
        CreatedInterfaceSpecification,
        "interface-specification"
    );
    output_accessor!(project, Project, ProjectId, "project");

    /// All created components, in no particular order.
    pub fn components(&self) -> impl Iterator<Item = &CreatedComponent> {
        self.values.values().filter_map(|output| match output {
            StepOutput::Component(c) => Some(c),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_lookup() {
        let mut outputs = Outputs::new();
        let key = StepKey::from("microservice-template");
        outputs.insert(key.clone(), StepOutput::ComponentTemplate("ct-1".into()));

        assert_eq!(outputs.component_template(&key).unwrap().as_str(), "ct-1");
        assert_eq!(
            outputs.project(&key).unwrap_err(),
            PlanError::OutputKind {
                step: key.clone(),
                expected: "project",
                found: "component-template",
            }
        );
    }

    #[test]
    fn test_missing_output() {
        let outputs = Outputs::new();
        let key = StepKey::from("test-project");
        assert_eq!(
            outputs.project(&key).unwrap_err(),
            PlanError::MissingOutput(key)
        );
    }

    #[test]
    fn test_components_iterator() {
        let mut outputs = Outputs::new();
        outputs.insert(
            "express".into(),
            StepOutput::Component(CreatedComponent {
                id: "c-1".into(),
                version: "cv-1".into(),
            }),
        );
        outputs.insert("test-project".into(), StepOutput::Project("p-1".into()));
        assert_eq!(outputs.components().count(), 1);
        assert_eq!(outputs.len(), 2);
    }
}
