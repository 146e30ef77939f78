//! An in-process stand-in for the tracker.
//!
//! `DryRunClient` answers every operation with a well-formed response and
//! fabricated IDs, records what it was asked, and can be told to fail chosen
//! calls. It backs `--dry-run` and the tests of the crates above this one.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use seeder_models::UserId;

use crate::error::{ClientError, Result};
use crate::operations::Operation;
use crate::transport::GraphClient;
use crate::users::UserProvisioner;

/// One call the dry-run client received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: Operation,
    pub variables: Value,
}

#[derive(Default)]
struct State {
    next_id: u64,
    calls: Vec<RecordedCall>,
    users: Vec<String>,
    components: Vec<String>,
    per_operation: HashMap<Operation, usize>,
}

/// Fabricates tracker responses without any network access.
#[derive(Default)]
pub struct DryRunClient {
    state: Mutex<State>,
    failing_operations: HashSet<Operation>,
    failing_calls: HashMap<Operation, HashSet<usize>>,
    failing_users: HashSet<String>,
}

impl DryRunClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call of `operation` fail.
    pub fn with_failing_operation(mut self, operation: Operation) -> Self {
        self.failing_operations.insert(operation);
        self
    }

    /// Makes the `n`-th call (1-based) of `operation` fail.
    pub fn with_failing_call(mut self, operation: Operation, n: usize) -> Self {
        self.failing_calls.entry(operation).or_default().insert(n);
        self
    }

    /// Makes account creation fail for `username`.
    pub fn with_failing_user(mut self, username: impl Into<String>) -> Self {
        self.failing_users.insert(username.into());
        self
    }

    /// Every GraphQL call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Calls of one operation, in order.
    pub fn calls_of(&self, operation: Operation) -> Vec<Value> {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.operation == operation)
            .map(|c| c.variables.clone())
            .collect()
    }

    /// Number of calls of one operation, failed ones included.
    pub fn count(&self, operation: Operation) -> usize {
        self.lock().per_operation.get(&operation).copied().unwrap_or(0)
    }

    /// Usernames that got an account.
    pub fn users(&self) -> Vec<String> {
        self.lock().users.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn should_fail(&self, operation: Operation, n: usize) -> bool {
        self.failing_operations.contains(&operation)
            || self
                .failing_calls
                .get(&operation)
                .is_some_and(|calls| calls.contains(&n))
    }
}

impl State {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("dry-{}-{}", prefix, self.next_id)
    }

    fn nodes(&mut self, prefix: &str, count: usize) -> Value {
        let nodes: Vec<Value> = (0..count).map(|_| json!({ "id": self.id(prefix) })).collect();
        json!({ "nodes": nodes })
    }

    fn respond(&mut self, operation: Operation, variables: &Value) -> Value {
        let len = |key: &str| variables[key].as_array().map_or(0, Vec::len);
        match operation {
            Operation::CreateComponentTemplate => json!({
                "createComponentTemplate": { "componentTemplate": { "id": self.id("component-template") } }
            }),
            Operation::CreateInterfaceSpecificationTemplate => json!({
                "createInterfaceSpecificationTemplate": {
                    "interfaceSpecificationTemplate": { "id": self.id("interface-template") }
                }
            }),
            Operation::CreateRelationTemplate => json!({
                "createRelationTemplate": { "relationTemplate": { "id": self.id("relation-template") } }
            }),
            Operation::CreateIssueTemplate => json!({
                "createIssueTemplate": {
                    "issueTemplate": {
                        "id": self.id("issue-template"),
                        "issueTypes": self.nodes("issue-type", len("issueTypes")),
                        "issueStates": self.nodes("issue-state", len("issueStates")),
                        "issuePriorities": self.nodes("issue-priority", len("issuePriorities")),
                        "relationTypes": self.nodes("relation-type", len("relationTypes")),
                        "assignmentTypes": self.nodes("assignment-type", len("assignmentTypes")),
                    }
                }
            }),
            Operation::CreateComponent => {
                let id = self.id("component");
                self.components.push(id.clone());
                json!({
                    "createComponent": {
                        "component": { "id": id, "versions": self.nodes("component-version", 1) }
                    }
                })
            }
            Operation::CreateInterfaceSpecification => json!({
                "createInterfaceSpecification": {
                    "interfaceSpecification": {
                        "id": self.id("interface"),
                        "versions": self.nodes("interface-version", len("versions")),
                    }
                }
            }),
            Operation::AddInterface => json!({
                "addInterfaceSpecificationVersionToComponentVersion": {
                    "componentVersion": { "id": variables["componentVersion"] }
                }
            }),
            Operation::CreateRelation => json!({
                "createRelation": { "relation": { "id": self.id("relation") } }
            }),
            Operation::CreateProject => json!({
                "createProject": { "project": { "id": self.id("project") } }
            }),
            Operation::AddComponentVersionToProject => json!({
                "addComponentVersionToProject": { "project": { "id": variables["project"] } }
            }),
            Operation::ListComponents => {
                let nodes: Vec<Value> = self.components.iter().map(|id| json!({ "id": id })).collect();
                json!({ "components": { "nodes": nodes } })
            }
            Operation::CreateLabel => json!({
                "createLabel": { "label": { "id": self.id("label") } }
            }),
            Operation::CreateIssue => json!({
                "createIssue": { "issue": { "id": self.id("issue") } }
            }),
            Operation::AddLabelToIssue => json!({
                "addLabelToIssue": { "addedLabelEvent": { "id": self.id("label-event") } }
            }),
            Operation::CreateAssignment => json!({
                "createAssignment": { "assignment": { "id": self.id("assignment") } }
            }),
            Operation::CreateIssueComment => json!({
                "createIssueComment": { "issueComment": { "id": self.id("comment") } }
            }),
            Operation::CreateIssueRelation => json!({
                "createIssueRelation": { "issueRelation": { "id": self.id("issue-relation") } }
            }),
        }
    }
}

#[async_trait]
impl GraphClient for DryRunClient {
    async fn call(&self, operation: Operation, variables: Value) -> Result<Value> {
        let mut state = self.lock();
        let n = {
            let count = state.per_operation.entry(operation).or_insert(0);
            *count += 1;
            *count
        };
        state.calls.push(RecordedCall {
            operation,
            variables: variables.clone(),
        });

        if self.should_fail(operation, n) {
            debug!(operation = %operation, call = n, "Injecting dry-run failure");
            return Err(ClientError::Simulated(operation.name().to_string()));
        }
        Ok(state.respond(operation, &variables))
    }
}

#[async_trait]
impl UserProvisioner for DryRunClient {
    async fn create_user(&self, username: &str) -> Result<UserId> {
        if self.failing_users.contains(username) {
            return Err(ClientError::Simulated(format!("createUser({})", username)));
        }
        let mut state = self.lock();
        let id = state.id("user");
        state.users.push(username.to_string());
        Ok(UserId::from(id))
    }
}
