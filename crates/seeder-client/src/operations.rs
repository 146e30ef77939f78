//! GraphQL documents of every remote operation the seeder issues.
//!
//! The schema belongs to the tracker; these documents are the fixed contract
//! the seeder relies on. Each variant maps to exactly one document.

use std::fmt;

/// A remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateComponentTemplate,
    CreateInterfaceSpecificationTemplate,
    CreateRelationTemplate,
    CreateIssueTemplate,
    CreateComponent,
    CreateInterfaceSpecification,
    AddInterface,
    CreateRelation,
    CreateProject,
    AddComponentVersionToProject,
    ListComponents,
    CreateLabel,
    CreateIssue,
    AddLabelToIssue,
    CreateAssignment,
    CreateIssueComment,
    CreateIssueRelation,
}

impl Operation {
    /// Every operation, in the order a full run first uses them.
    pub const ALL: [Operation; 17] = [
        Operation::CreateComponentTemplate,
        Operation::CreateInterfaceSpecificationTemplate,
        Operation::CreateRelationTemplate,
        Operation::CreateIssueTemplate,
        Operation::CreateComponent,
        Operation::CreateInterfaceSpecification,
        Operation::AddInterface,
        Operation::CreateRelation,
        Operation::CreateProject,
        Operation::AddComponentVersionToProject,
        Operation::ListComponents,
        Operation::CreateLabel,
        Operation::CreateIssue,
        Operation::AddLabelToIssue,
        Operation::CreateAssignment,
        Operation::CreateIssueComment,
        Operation::CreateIssueRelation,
    ];

    /// GraphQL operation name, sent as `operationName`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateComponentTemplate => "CreateComponentTemplate",
            Self::CreateInterfaceSpecificationTemplate => "CreateInterfaceSpecificationTemplate",
            Self::CreateRelationTemplate => "CreateRelationTemplate",
            Self::CreateIssueTemplate => "CreateIssueTemplate",
            Self::CreateComponent => "CreateComponent",
            Self::CreateInterfaceSpecification => "CreateInterfaceSpecification",
            Self::AddInterface => "AddInterface",
            Self::CreateRelation => "CreateRelation",
            Self::CreateProject => "CreateProject",
            Self::AddComponentVersionToProject => "AddComponentVersionToProject",
            Self::ListComponents => "GetComponents",
            Self::CreateLabel => "CreateLabel",
            Self::CreateIssue => "CreateIssue",
            Self::AddLabelToIssue => "AddLabelToIssue",
            Self::CreateAssignment => "CreateAssignment",
            Self::CreateIssueComment => "CreateIssueComment",
            Self::CreateIssueRelation => "CreateIssueRelation",
        }
    }

    /// GraphQL document.
    pub fn document(&self) -> &'static str {
        match self {
            Self::CreateComponentTemplate => CREATE_COMPONENT_TEMPLATE,
            Self::CreateInterfaceSpecificationTemplate => CREATE_INTERFACE_SPECIFICATION_TEMPLATE,
            Self::CreateRelationTemplate => CREATE_RELATION_TEMPLATE,
            Self::CreateIssueTemplate => CREATE_ISSUE_TEMPLATE,
            Self::CreateComponent => CREATE_COMPONENT,
            Self::CreateInterfaceSpecification => CREATE_INTERFACE_SPECIFICATION,
            Self::AddInterface => ADD_INTERFACE,
            Self::CreateRelation => CREATE_RELATION,
            Self::CreateProject => CREATE_PROJECT,
            Self::AddComponentVersionToProject => ADD_COMPONENT_VERSION_TO_PROJECT,
            Self::ListComponents => LIST_COMPONENTS,
            Self::CreateLabel => CREATE_LABEL,
            Self::CreateIssue => CREATE_ISSUE,
            Self::AddLabelToIssue => ADD_LABEL_TO_ISSUE,
            Self::CreateAssignment => CREATE_ASSIGNMENT,
            Self::CreateIssueComment => CREATE_ISSUE_COMMENT,
            Self::CreateIssueRelation => CREATE_ISSUE_RELATION,
        }
    }

    /// Returns true for operations that only read.
    pub fn is_query(&self) -> bool {
        matches!(self, Self::ListComponents)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const CREATE_COMPONENT_TEMPLATE: &str = r#"
mutation CreateComponentTemplate(
  $name: String!
  $description: String!
  $versionTemplateName: String!
  $versionTemplateDescription: String!
  $shapeType: ShapeType!
) {
  createComponentTemplate(
    input: {
      name: $name
      description: $description
      componentVersionTemplate: {
        name: $versionTemplateName
        description: $versionTemplateDescription
      }
      shapeType: $shapeType
      stroke: {}
    }
  ) {
    componentTemplate {
      id
    }
  }
}
"#;

const CREATE_INTERFACE_SPECIFICATION_TEMPLATE: &str = r#"
mutation CreateInterfaceSpecificationTemplate(
  $name: String!
  $description: String!
  $componentTemplates: [ID!]!
) {
  createInterfaceSpecificationTemplate(
    input: {
      name: $name
      description: $description
      canBeVisibleOnComponents: $componentTemplates
      canBeInvisibleOnComponents: $componentTemplates
      interfaceTemplate: { name: $name, description: $description }
      interfacePartTemplate: { name: $name, description: $description }
      interfaceSpecificationVersionTemplate: { name: $name, description: $description }
      interfaceDefinitionTemplate: { name: $name, description: $description }
      shapeType: CIRCLE
      stroke: {}
    }
  ) {
    interfaceSpecificationTemplate {
      id
    }
  }
}
"#;

const CREATE_RELATION_TEMPLATE: &str = r#"
mutation CreateRelationTemplate(
  $name: String!
  $description: String!
  $fromId: [ID!]!
  $toId: [ID!]!
) {
  createRelationTemplate(
    input: {
      relationConditions: [
        { from: $fromId, to: $toId, interfaceSpecificationDerivationConditions: [] }
      ]
      description: $description
      name: $name
      markerType: ARROW
    }
  ) {
    relationTemplate {
      id
    }
  }
}
"#;

const CREATE_ISSUE_TEMPLATE: &str = r#"
mutation CreateIssueTemplate(
  $name: String!
  $description: String!
  $issueTypes: [IssueTypeInput!]!
  $issueStates: [IssueStateInput!]!
  $issuePriorities: [IssuePriorityInput!]!
  $relationTypes: [IssueRelationTypeInput!]!
  $assignmentTypes: [AssignmentTypeInput!]!
) {
  createIssueTemplate(
    input: {
      name: $name
      description: $description
      issueTypes: $issueTypes
      issueStates: $issueStates
      issuePriorities: $issuePriorities
      relationTypes: $relationTypes
      assignmentTypes: $assignmentTypes
    }
  ) {
    issueTemplate {
      id
      issueTypes { nodes { id } }
      issueStates { nodes { id } }
      issuePriorities { nodes { id } }
      relationTypes { nodes { id } }
      assignmentTypes { nodes { id } }
    }
  }
}
"#;

const CREATE_COMPONENT: &str = r#"
mutation CreateComponent(
  $name: String!
  $description: String!
  $template: ID!
  $version: String!
  $versionName: String!
  $versionDescription: String!
) {
  createComponent(
    input: {
      name: $name
      description: $description
      template: $template
      versions: [
        {
          version: $version
          name: $versionName
          description: $versionDescription
          templatedFields: []
        }
      ]
      templatedFields: []
    }
  ) {
    component {
      id
      versions { nodes { id } }
    }
  }
}
"#;

const CREATE_INTERFACE_SPECIFICATION: &str = r#"
mutation CreateInterfaceSpecification(
  $component: ID!
  $template: ID!
  $name: String!
  $description: String!
  $versions: [InterfaceSpecificationVersionInput!]!
) {
  createInterfaceSpecification(
    input: {
      component: $component
      template: $template
      name: $name
      description: $description
      versions: $versions
      templatedFields: []
    }
  ) {
    interfaceSpecification {
      id
      versions { nodes { id } }
    }
  }
}
"#;

const ADD_INTERFACE: &str = r#"
mutation AddInterface($componentVersion: ID!, $interfaceSpecificationVersion: ID!) {
  addInterfaceSpecificationVersionToComponentVersion(
    input: {
      componentVersion: $componentVersion
      interfaceSpecificationVersion: $interfaceSpecificationVersion
      visible: true
      invisible: false
    }
  ) {
    componentVersion {
      id
    }
  }
}
"#;

const CREATE_RELATION: &str = r#"
mutation CreateRelation($start: ID!, $end: ID!, $template: ID!) {
  createRelation(
    input: { start: $start, end: $end, template: $template, templatedFields: [] }
  ) {
    relation {
      id
    }
  }
}
"#;

const CREATE_PROJECT: &str = r#"
mutation CreateProject($name: String!, $description: String!, $repositoryURL: URL!) {
  createProject(
    input: { name: $name, description: $description, repositoryURL: $repositoryURL }
  ) {
    project {
      id
    }
  }
}
"#;

const ADD_COMPONENT_VERSION_TO_PROJECT: &str = r#"
mutation AddComponentVersionToProject($project: ID!, $componentVersion: ID!) {
  addComponentVersionToProject(
    input: { project: $project, componentVersion: $componentVersion }
  ) {
    project {
      id
    }
  }
}
"#;

const LIST_COMPONENTS: &str = r#"
query GetComponents {
  components {
    nodes {
      id
    }
  }
}
"#;

const CREATE_LABEL: &str = r#"
mutation CreateLabel(
  $trackables: [ID!]!
  $color: String!
  $name: String!
  $description: String!
) {
  createLabel(
    input: { trackables: $trackables, color: $color, name: $name, description: $description }
  ) {
    label {
      id
    }
  }
}
"#;

const CREATE_ISSUE: &str = r#"
mutation CreateIssue(
  $state: ID!
  $template: ID!
  $title: String!
  $body: String!
  $type: ID!
  $trackable: ID!
) {
  createIssue(
    input: {
      state: $state
      template: $template
      title: $title
      body: $body
      type: $type
      templatedFields: []
      trackables: [$trackable]
    }
  ) {
    issue {
      id
    }
  }
}
"#;

const ADD_LABEL_TO_ISSUE: &str = r#"
mutation AddLabelToIssue($issue: ID!, $label: ID!) {
  addLabelToIssue(input: { issue: $issue, label: $label }) {
    addedLabelEvent {
      id
    }
  }
}
"#;

const CREATE_ASSIGNMENT: &str = r#"
mutation CreateAssignment($user: ID!, $issue: ID!, $assignmentType: ID) {
  createAssignment(input: { assignmentType: $assignmentType, user: $user, issue: $issue }) {
    assignment {
      id
    }
  }
}
"#;

const CREATE_ISSUE_COMMENT: &str = r#"
mutation CreateIssueComment($body: String!, $issue: ID!, $answers: ID) {
  createIssueComment(input: { body: $body, issue: $issue, answers: $answers }) {
    issueComment {
      id
    }
  }
}
"#;

const CREATE_ISSUE_RELATION: &str = r#"
mutation CreateIssueRelation($issue: ID!, $relatedIssue: ID!, $issueRelationType: ID) {
  createIssueRelation(
    input: { issue: $issue, relatedIssue: $relatedIssue, issueRelationType: $issueRelationType }
  ) {
    issueRelation {
      id
    }
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_declares_its_operation_name() {
        for op in Operation::ALL {
            let doc = op.document();
            let keyword = if op.is_query() { "query" } else { "mutation" };
            assert!(
                doc.contains(&format!("{} {}", keyword, op.name())),
                "{} document does not declare its name",
                op
            );
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = Operation::ALL.iter().map(|op| op.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Operation::ALL.len());
    }

    #[test]
    fn test_only_listing_is_a_query() {
        let queries: Vec<_> = Operation::ALL.iter().filter(|op| op.is_query()).collect();
        assert_eq!(queries, vec![&Operation::ListComponents]);
    }
}
