//! Steps of a build plan.
//!
//! A step creates one entity (or links entities) on the tracker. Inputs are
//! named by the key of the step that produces them, which is what makes the
//! plan a graph rather than a script.

use std::fmt;

use serde::{Deserialize, Serialize};

use seeder_models::catalog::{
    ComponentDef, ComponentTemplateDef, InterfaceSpecDef, InterfaceTemplateDef,
    IssueTemplateDef, ProjectDef, RelationTemplateDef,
};

/// Unique name of a step within a plan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepKey(String);

impl StepKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends the `#n` suffix used for the `n`-th copy of a project graph.
    /// The first copy (`n == 0`) keeps the bare key.
    pub fn suffixed(key: &str, n: usize) -> Self {
        if n == 0 {
            Self::new(key)
        } else {
            Self(format!("{}#{}", key, n))
        }
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StepKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StepKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// What a step does, and the keys of the steps it consumes.
#[derive(Debug, Clone)]
pub enum StepKind {
    ComponentTemplate {
        def: &'static ComponentTemplateDef,
    },
    InterfaceTemplate {
        def: &'static InterfaceTemplateDef,
        component_templates: Vec<StepKey>,
    },
    RelationTemplate {
        def: &'static RelationTemplateDef,
        from: StepKey,
        to: StepKey,
    },
    IssueTemplate {
        def: &'static IssueTemplateDef,
    },
    Component {
        def: &'static ComponentDef,
        template: StepKey,
    },
    InterfaceSpecification {
        def: &'static InterfaceSpecDef,
        component: StepKey,
        template: StepKey,
    },
    /// Links every version of an interface specification to the version of
    /// a component.
    AttachInterfaces {
        specification: StepKey,
        component: StepKey,
    },
    Relation {
        start: StepKey,
        end: StepKey,
        template: StepKey,
    },
    Project {
        def: &'static ProjectDef,
    },
    /// Adds a component's version to a project.
    AddToProject {
        project: StepKey,
        component: StepKey,
    },
}

impl StepKind {
    /// Keys of the steps whose outputs this step consumes.
    pub fn dependencies(&self) -> Vec<&StepKey> {
        match self {
            StepKind::ComponentTemplate { .. }
            | StepKind::IssueTemplate { .. }
            | StepKind::Project { .. } => Vec::new(),
            StepKind::InterfaceTemplate {
                component_templates,
                ..
            } => component_templates.iter().collect(),
            StepKind::RelationTemplate { from, to, .. } => vec![from, to],
            StepKind::Component { template, .. } => vec![template],
            StepKind::InterfaceSpecification {
                component,
                template,
                ..
            } => vec![component, template],
            StepKind::AttachInterfaces {
                specification,
                component,
            } => vec![specification, component],
            StepKind::Relation {
                start,
                end,
                template,
            } => vec![start, end, template],
            StepKind::AddToProject { project, component } => vec![project, component],
        }
    }

    /// Short kind name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            StepKind::ComponentTemplate { .. } => "component-template",
            StepKind::InterfaceTemplate { .. } => "interface-template",
            StepKind::RelationTemplate { .. } => "relation-template",
            StepKind::IssueTemplate { .. } => "issue-template",
            StepKind::Component { .. } => "component",
            StepKind::InterfaceSpecification { .. } => "interface-specification",
            StepKind::AttachInterfaces { .. } => "attach-interfaces",
            StepKind::Relation { .. } => "relation",
            StepKind::Project { .. } => "project",
            StepKind::AddToProject { .. } => "add-to-project",
        }
    }
}

/// A keyed step.
#[derive(Debug, Clone)]
pub struct Step {
    pub key: StepKey,
    pub kind: StepKind,
}

impl Step {
    pub fn new(key: impl Into<StepKey>, kind: StepKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    pub fn dependencies(&self) -> Vec<&StepKey> {
        self.kind.dependencies()
    }
}
