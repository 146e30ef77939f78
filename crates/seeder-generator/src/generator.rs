//! IssueGenerator - randomized issues with labels, assignments and threaded
//! comments, followed by random issue relations.
//!
//! The generator owns its RNG, so a seeded `StdRng` reproduces the same
//! sequence of draws. Only the issue creation itself can fail an issue: a
//! failed label, assignment or comment is recorded as a [`GenerationFailure`]
//! and generation carries on.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use seeder_client::{GraphClient, NewIssue, SeedApi};
use seeder_models::catalog::{ISSUE_BODY, LOREM_IPSUM};
use seeder_models::{
    AssignmentId, AssignmentTypeId, CommentId, ComponentId, IssueId, IssueRelationId,
    IssueRelationTypeId, IssueTemplate, LabelId, UserId,
};

use crate::config::GeneratorConfig;
use crate::draw::{chance, draw_issue, pick, pick_answer_target};
use crate::error::Result;

/// A comment and the earlier comment of the same issue it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedComment {
    pub id: CommentId,
    pub answers: Option<CommentId>,
}

/// An assignment of a user to an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedAssignment {
    pub id: AssignmentId,
    pub user: UserId,
    pub assignment_type: Option<AssignmentTypeId>,
}

/// An issue and everything attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedIssue {
    pub id: IssueId,
    pub component: ComponentId,
    pub labels: Vec<LabelId>,
    pub assignments: Vec<GeneratedAssignment>,
    /// Comments in creation order.
    pub comments: Vec<GeneratedComment>,
}

impl GeneratedIssue {
    /// Number of comments that answer another comment.
    pub fn replies(&self) -> usize {
        self.comments.iter().filter(|c| c.answers.is_some()).count()
    }
}

/// A relation between two generated issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRelationRecord {
    pub id: IssueRelationId,
    pub issue: IssueId,
    pub related: IssueId,
    pub relation_type: Option<IssueRelationTypeId>,
}

/// A call that failed during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationFailure {
    /// What was being created (`issue`, `label`, `assignment`, ...).
    pub action: &'static str,
    /// The entity it was created for (component or issue ID).
    pub subject: String,
    pub reason: String,
}

/// Generates issue data through a [`SeedApi`].
pub struct IssueGenerator<'a, C, R> {
    api: &'a SeedApi<C>,
    rng: R,
    config: GeneratorConfig,
    template: &'a IssueTemplate,
    labels: &'a [LabelId],
    users: &'a [UserId],
    failures: Vec<GenerationFailure>,
}

impl<'a, C: GraphClient, R: Rng> IssueGenerator<'a, C, R> {
    pub fn new(
        api: &'a SeedApi<C>,
        rng: R,
        template: &'a IssueTemplate,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            api,
            rng,
            config,
            template,
            labels: &[],
            users: &[],
            failures: Vec::new(),
        }
    }

    /// Labels each issue may receive.
    pub fn with_labels(mut self, labels: &'a [LabelId]) -> Self {
        self.labels = labels;
        self
    }

    /// Users each issue may be assigned to.
    pub fn with_users(mut self, users: &'a [UserId]) -> Self {
        self.users = users;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Failures recorded so far.
    pub fn failures(&self) -> &[GenerationFailure] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<GenerationFailure> {
        self.failures
    }

    fn record_failure(&mut self, action: &'static str, subject: impl ToString, reason: impl ToString) {
        let failure = GenerationFailure {
            action,
            subject: subject.to_string(),
            reason: reason.to_string(),
        };
        warn!(action, subject = %failure.subject, reason = %failure.reason, "Generation step failed");
        self.failures.push(failure);
    }

    /// Creates one issue on `component`, then its labels, assignments and
    /// comments. Returns an error only if the issue itself was not created.
    pub async fn generate_issue(&mut self, component: &ComponentId) -> Result<GeneratedIssue> {
        let draw = draw_issue(&mut self.rng, self.template, &self.config)?;
        let id = self
            .api
            .create_issue(&NewIssue {
                title: draw.title,
                body: ISSUE_BODY,
                template: &self.template.id,
                state: &draw.state,
                issue_type: &draw.issue_type,
                trackable: component,
            })
            .await?;

        let mut issue = GeneratedIssue {
            id,
            component: component.clone(),
            labels: Vec::new(),
            assignments: Vec::new(),
            comments: Vec::new(),
        };

        for label in self.labels {
            if !chance(&mut self.rng, self.config.label_probability) {
                continue;
            }
            match self.api.add_label_to_issue(&issue.id, label).await {
                Ok(_) => issue.labels.push(label.clone()),
                Err(e) => self.record_failure("label", &issue.id, e),
            }
        }

        for user in self.users {
            if !chance(&mut self.rng, self.config.assignment_probability) {
                continue;
            }
            let assignment_type = pick(&mut self.rng, &self.template.assignment_types).cloned();
            match self
                .api
                .create_assignment(user, &issue.id, assignment_type.as_ref())
                .await
            {
                Ok(id) => issue.assignments.push(GeneratedAssignment {
                    id,
                    user: user.clone(),
                    assignment_type,
                }),
                Err(e) => self.record_failure("assignment", &issue.id, e),
            }
        }

        let comment_count = self.rng.gen_range(0..=self.config.max_comments);
        for _ in 0..comment_count {
            let answers = pick_answer_target(
                &mut self.rng,
                issue.comments.len(),
                self.config.answer_probability,
            )
            .map(|i| issue.comments[i].id.clone());
            match self
                .api
                .create_issue_comment(&issue.id, LOREM_IPSUM, answers.as_ref())
                .await
            {
                Ok(id) => issue.comments.push(GeneratedComment { id, answers }),
                Err(e) => self.record_failure("comment", &issue.id, e),
            }
        }

        debug!(
            issue = %issue.id,
            labels = issue.labels.len(),
            assignments = issue.assignments.len(),
            comments = issue.comments.len(),
            "Generated issue"
        );
        Ok(issue)
    }

    /// Generates `issue_count` issues for every component, in component
    /// order. Issues that could not be created are recorded as failures and
    /// left out of the result.
    pub async fn generate_for_components(&mut self, components: &[ComponentId]) -> Vec<GeneratedIssue> {
        let mut issues = Vec::new();
        for component in components {
            for _ in 0..self.config.issue_count {
                match self.generate_issue(component).await {
                    Ok(issue) => issues.push(issue),
                    Err(e) => self.record_failure("issue", component, e),
                }
            }
        }
        info!(
            components = components.len(),
            issues = issues.len(),
            "Generated issues"
        );
        issues
    }

    /// Creates `pool.len()` relations between issues drawn uniformly from the
    /// pool, with replacement; an issue may be related to itself.
    pub async fn generate_relations(&mut self, pool: &[IssueId]) -> Vec<IssueRelationRecord> {
        let mut relations = Vec::with_capacity(pool.len());
        for _ in 0..pool.len() {
            let (Some(issue), Some(related)) = (pick(&mut self.rng, pool), pick(&mut self.rng, pool))
            else {
                break;
            };
            let relation_type = pick(&mut self.rng, &self.template.relation_types).cloned();
            match self
                .api
                .create_issue_relation(issue, related, relation_type.as_ref())
                .await
            {
                Ok(id) => relations.push(IssueRelationRecord {
                    id,
                    issue: issue.clone(),
                    related: related.clone(),
                    relation_type,
                }),
                Err(e) => self.record_failure("issue-relation", issue, e),
            }
        }
        info!(pool = pool.len(), relations = relations.len(), "Generated issue relations");
        relations
    }
}
