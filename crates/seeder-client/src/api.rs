//! Typed wrappers around every remote operation.
//!
//! Each method issues exactly one call, decodes the ID(s) it needs from the
//! response, logs them, and returns them typed. Failures are always returned
//! to the caller; no method swallows an error.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use seeder_models::catalog::{
    ComponentDef, ComponentTemplateDef, InterfaceSpecDef, InterfaceTemplateDef,
    IssueTemplateDef, LabelDef, ProjectDef, RelationTemplateDef,
};
use seeder_models::{
    AssignmentId, AssignmentTypeId, CommentId, ComponentId, ComponentTemplateId,
    ComponentVersionId, InterfaceSpecificationId, InterfaceSpecificationVersionId,
    InterfaceTemplateId, IssueId, IssueRelationId, IssueRelationTypeId, IssueStateId,
    IssueTemplate, IssueTemplateId, IssueTypeId, LabelEventId, LabelId, ProjectId, RelationId,
    RelationTemplateId, UserId,
};

use crate::error::{ClientError, Result};
use crate::operations::Operation;
use crate::transport::GraphClient;

/// A component as created: its ID and the ID of its single version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedComponent {
    pub id: ComponentId,
    pub version: ComponentVersionId,
}

/// An interface specification and the versions it was created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedInterfaceSpecification {
    pub id: InterfaceSpecificationId,
    pub versions: Vec<InterfaceSpecificationVersionId>,
}

/// Input of [`SeedApi::create_issue`].
#[derive(Debug, Clone)]
pub struct NewIssue<'a> {
    pub title: String,
    pub body: &'a str,
    pub template: &'a IssueTemplateId,
    pub state: &'a IssueStateId,
    pub issue_type: &'a IssueTypeId,
    pub trackable: &'a ComponentId,
}

#[derive(Debug, Deserialize)]
struct Node {
    id: String,
}

#[derive(Debug, Deserialize)]
struct Connection {
    nodes: Vec<Node>,
}

/// Reads the string ID at `pointer` (JSON pointer syntax).
fn id_at<T: From<String>>(operation: Operation, data: &Value, pointer: &str) -> Result<T> {
    data.pointer(pointer)
        .and_then(Value::as_str)
        .map(|id| T::from(id.to_string()))
        .ok_or_else(|| ClientError::invalid_response(operation.name(), format!("missing {}", pointer)))
}

/// Reads the `nodes { id }` connection at `pointer`.
fn ids_at<T: From<String>>(operation: Operation, data: &Value, pointer: &str) -> Result<Vec<T>> {
    let connection = data.pointer(pointer).ok_or_else(|| {
        ClientError::invalid_response(operation.name(), format!("missing {}", pointer))
    })?;
    let connection: Connection = serde_json::from_value(connection.clone())?;
    Ok(connection.nodes.into_iter().map(|n| T::from(n.id)).collect())
}

/// Typed access to the tracker.
pub struct SeedApi<C> {
    client: C,
}

impl<C: GraphClient> SeedApi<C> {
    /// Wraps a transport.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns the underlying transport.
    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn create_component_template(
        &self,
        def: &ComponentTemplateDef,
    ) -> Result<ComponentTemplateId> {
        let op = Operation::CreateComponentTemplate;
        let data = self
            .client
            .call(
                op,
                json!({
                    "name": def.name,
                    "description": def.description,
                    "versionTemplateName": def.version_name,
                    "versionTemplateDescription": def.version_description,
                    "shapeType": def.shape,
                }),
            )
            .await?;
        let id: ComponentTemplateId =
            id_at(op, &data, "/createComponentTemplate/componentTemplate/id")?;
        info!(id = %id, name = def.name, "Created component template");
        Ok(id)
    }

    pub async fn create_interface_template(
        &self,
        def: &InterfaceTemplateDef,
        component_templates: &[ComponentTemplateId],
    ) -> Result<InterfaceTemplateId> {
        let op = Operation::CreateInterfaceSpecificationTemplate;
        let data = self
            .client
            .call(
                op,
                json!({
                    "name": def.name,
                    "description": def.description,
                    "componentTemplates": component_templates,
                }),
            )
            .await?;
        let id: InterfaceTemplateId = id_at(
            op,
            &data,
            "/createInterfaceSpecificationTemplate/interfaceSpecificationTemplate/id",
        )?;
        info!(id = %id, name = def.name, "Created interface specification template");
        Ok(id)
    }

    pub async fn create_relation_template(
        &self,
        def: &RelationTemplateDef,
        from: &ComponentTemplateId,
        to: &ComponentTemplateId,
    ) -> Result<RelationTemplateId> {
        let op = Operation::CreateRelationTemplate;
        let data = self
            .client
            .call(
                op,
                json!({
                    "name": def.name,
                    "description": def.description,
                    "fromId": [from],
                    "toId": [to],
                }),
            )
            .await?;
        let id: RelationTemplateId =
            id_at(op, &data, "/createRelationTemplate/relationTemplate/id")?;
        info!(id = %id, name = def.name, "Created relation template");
        Ok(id)
    }

    /// Creates an issue template and returns it with the IDs of all options
    /// the tracker generated for it.
    pub async fn create_issue_template(&self, def: &IssueTemplateDef) -> Result<IssueTemplate> {
        let op = Operation::CreateIssueTemplate;
        let data = self
            .client
            .call(
                op,
                json!({
                    "name": def.name,
                    "description": def.description,
                    "issueTypes": def.issue_types,
                    "issueStates": def.issue_states,
                    "issuePriorities": def.issue_priorities,
                    "relationTypes": def.relation_types,
                    "assignmentTypes": def.assignment_types,
                }),
            )
            .await?;
        let base = "/createIssueTemplate/issueTemplate";
        let template = IssueTemplate {
            id: id_at(op, &data, &format!("{}/id", base))?,
            issue_types: ids_at(op, &data, &format!("{}/issueTypes", base))?,
            issue_states: ids_at(op, &data, &format!("{}/issueStates", base))?,
            issue_priorities: ids_at(op, &data, &format!("{}/issuePriorities", base))?,
            relation_types: ids_at(op, &data, &format!("{}/relationTypes", base))?,
            assignment_types: ids_at(op, &data, &format!("{}/assignmentTypes", base))?,
        };
        info!(
            id = %template.id,
            name = def.name,
            types = template.issue_types.len(),
            states = template.issue_states.len(),
            "Created issue template"
        );
        Ok(template)
    }

    pub async fn create_component(
        &self,
        def: &ComponentDef,
        template: &ComponentTemplateId,
    ) -> Result<CreatedComponent> {
        let op = Operation::CreateComponent;
        let data = self
            .client
            .call(
                op,
                json!({
                    "name": def.name,
                    "description": def.description,
                    "template": template,
                    "version": def.version.version,
                    "versionName": def.version.name,
                    "versionDescription": def.version.description,
                }),
            )
            .await?;
        let id = id_at(op, &data, "/createComponent/component/id")?;
        let version = ids_at::<ComponentVersionId>(op, &data, "/createComponent/component/versions")?
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::invalid_response(op.name(), "component has no versions"))?;
        info!(id = %id, version = %version, name = def.name, "Created component");
        Ok(CreatedComponent { id, version })
    }

    /// Creates an interface specification with one version per entry of
    /// `def.versions`, each carrying every part of `def.parts`.
    pub async fn create_interface_specification(
        &self,
        def: &InterfaceSpecDef,
        component: &ComponentId,
        template: &InterfaceTemplateId,
    ) -> Result<CreatedInterfaceSpecification> {
        let op = Operation::CreateInterfaceSpecification;
        let versions: Vec<Value> = def
            .versions
            .iter()
            .map(|version| {
                json!({
                    "version": version,
                    "name": format!("{}-{}", def.name, version),
                    "description": "",
                    "templatedFields": [],
                    "parts": def.parts.iter().map(|part| json!({
                        "name": part,
                        "description": "",
                        "templatedFields": [],
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();
        let data = self
            .client
            .call(
                op,
                json!({
                    "component": component,
                    "template": template,
                    "name": def.name,
                    "description": def.description,
                    "versions": versions,
                }),
            )
            .await?;
        let spec = CreatedInterfaceSpecification {
            id: id_at(op, &data, "/createInterfaceSpecification/interfaceSpecification/id")?,
            versions: ids_at(
                op,
                &data,
                "/createInterfaceSpecification/interfaceSpecification/versions",
            )?,
        };
        info!(
            id = %spec.id,
            component = %component,
            versions = spec.versions.len(),
            "Created interface specification"
        );
        Ok(spec)
    }

    /// Makes an interface specification version visible on a component version.
    pub async fn add_interface(
        &self,
        component_version: &ComponentVersionId,
        interface: &InterfaceSpecificationVersionId,
    ) -> Result<ComponentVersionId> {
        let op = Operation::AddInterface;
        let data = self
            .client
            .call(
                op,
                json!({
                    "componentVersion": component_version,
                    "interfaceSpecificationVersion": interface,
                }),
            )
            .await?;
        let id: ComponentVersionId = id_at(
            op,
            &data,
            "/addInterfaceSpecificationVersionToComponentVersion/componentVersion/id",
        )?;
        debug!(component_version = %id, interface = %interface, "Added interface to component version");
        Ok(id)
    }

    pub async fn create_relation(
        &self,
        start: &ComponentVersionId,
        end: &ComponentVersionId,
        template: &RelationTemplateId,
    ) -> Result<RelationId> {
        let op = Operation::CreateRelation;
        let data = self
            .client
            .call(op, json!({ "start": start, "end": end, "template": template }))
            .await?;
        let id: RelationId = id_at(op, &data, "/createRelation/relation/id")?;
        info!(id = %id, start = %start, end = %end, "Created relation");
        Ok(id)
    }

    pub async fn create_project(&self, def: &ProjectDef) -> Result<ProjectId> {
        let op = Operation::CreateProject;
        let data = self
            .client
            .call(
                op,
                json!({
                    "name": def.name,
                    "description": def.description,
                    "repositoryURL": def.repository_url,
                }),
            )
            .await?;
        let id: ProjectId = id_at(op, &data, "/createProject/project/id")?;
        info!(id = %id, name = def.name, "Created project");
        Ok(id)
    }

    pub async fn add_component_version_to_project(
        &self,
        project: &ProjectId,
        component_version: &ComponentVersionId,
    ) -> Result<ProjectId> {
        let op = Operation::AddComponentVersionToProject;
        let data = self
            .client
            .call(
                op,
                json!({ "project": project, "componentVersion": component_version }),
            )
            .await?;
        let id: ProjectId = id_at(op, &data, "/addComponentVersionToProject/project/id")?;
        info!(project = %id, component_version = %component_version, "Added component version to project");
        Ok(id)
    }

    /// Lists the IDs of every component known to the tracker.
    pub async fn list_components(&self) -> Result<Vec<ComponentId>> {
        let op = Operation::ListComponents;
        let data = self.client.call(op, json!({})).await?;
        let ids: Vec<ComponentId> = ids_at(op, &data, "/components")?;
        info!(count = ids.len(), "Listed components");
        Ok(ids)
    }

    pub async fn create_label(&self, def: &LabelDef, trackables: &[ComponentId]) -> Result<LabelId> {
        let op = Operation::CreateLabel;
        let data = self
            .client
            .call(
                op,
                json!({
                    "name": def.name,
                    "description": def.description,
                    "color": def.color,
                    "trackables": trackables,
                }),
            )
            .await?;
        let id: LabelId = id_at(op, &data, "/createLabel/label/id")?;
        info!(id = %id, name = def.name, "Created label");
        Ok(id)
    }

    pub async fn create_issue(&self, issue: &NewIssue<'_>) -> Result<IssueId> {
        let op = Operation::CreateIssue;
        let data = self
            .client
            .call(
                op,
                json!({
                    "title": issue.title,
                    "body": issue.body,
                    "template": issue.template,
                    "state": issue.state,
                    "type": issue.issue_type,
                    "trackable": issue.trackable,
                }),
            )
            .await?;
        let id: IssueId = id_at(op, &data, "/createIssue/issue/id")?;
        info!(id = %id, title = %issue.title, trackable = %issue.trackable, "Created issue");
        Ok(id)
    }

    pub async fn add_label_to_issue(&self, issue: &IssueId, label: &LabelId) -> Result<LabelEventId> {
        let op = Operation::AddLabelToIssue;
        let data = self
            .client
            .call(op, json!({ "issue": issue, "label": label }))
            .await?;
        let id: LabelEventId = id_at(op, &data, "/addLabelToIssue/addedLabelEvent/id")?;
        debug!(issue = %issue, label = %label, "Added label to issue");
        Ok(id)
    }

    pub async fn create_assignment(
        &self,
        user: &UserId,
        issue: &IssueId,
        assignment_type: Option<&AssignmentTypeId>,
    ) -> Result<AssignmentId> {
        let op = Operation::CreateAssignment;
        let data = self
            .client
            .call(
                op,
                json!({ "user": user, "issue": issue, "assignmentType": assignment_type }),
            )
            .await?;
        let id: AssignmentId = id_at(op, &data, "/createAssignment/assignment/id")?;
        debug!(id = %id, issue = %issue, user = %user, "Created assignment");
        Ok(id)
    }

    /// Creates a comment, optionally answering an earlier comment.
    pub async fn create_issue_comment(
        &self,
        issue: &IssueId,
        body: &str,
        answers: Option<&CommentId>,
    ) -> Result<CommentId> {
        let op = Operation::CreateIssueComment;
        let data = self
            .client
            .call(op, json!({ "issue": issue, "body": body, "answers": answers }))
            .await?;
        let id: CommentId = id_at(op, &data, "/createIssueComment/issueComment/id")?;
        debug!(id = %id, issue = %issue, answers = ?answers, "Created issue comment");
        Ok(id)
    }

    pub async fn create_issue_relation(
        &self,
        issue: &IssueId,
        related_issue: &IssueId,
        relation_type: Option<&IssueRelationTypeId>,
    ) -> Result<IssueRelationId> {
        let op = Operation::CreateIssueRelation;
        let data = self
            .client
            .call(
                op,
                json!({
                    "issue": issue,
                    "relatedIssue": related_issue,
                    "issueRelationType": relation_type,
                }),
            )
            .await?;
        let id: IssueRelationId = id_at(op, &data, "/createIssueRelation/issueRelation/id")?;
        debug!(id = %id, issue = %issue, related_issue = %related_issue, "Created issue relation");
        Ok(id)
    }
}
