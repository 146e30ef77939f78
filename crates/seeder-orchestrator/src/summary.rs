//! Run summary.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use seeder_generator::{GeneratedIssue, GenerationFailure};
use seeder_models::RunId;
use seeder_plan::{PlanReport, StepRecord};

/// A user account that could not be created.
#[derive(Debug, Clone, Serialize)]
pub struct UserFailure {
    pub username: String,
    pub reason: String,
}

/// Build plan outcome counts, plus every step that did not succeed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlanSummary {
    pub steps: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
    pub problems: Vec<StepRecord>,
}

impl From<&PlanReport> for PlanSummary {
    fn from(report: &PlanReport) -> Self {
        Self {
            steps: report.records.len(),
            succeeded: report.succeeded(),
            failed: report.failed(),
            skipped: report.skipped(),
            problems: report.problems().cloned().collect(),
        }
    }
}

/// Totals of the generated issue data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueTotals {
    pub issues: usize,
    pub label_attachments: usize,
    pub assignments: usize,
    pub comments: usize,
    /// Comments answering an earlier comment.
    pub replies: usize,
}

impl IssueTotals {
    pub fn from_issues(issues: &[GeneratedIssue]) -> Self {
        issues.iter().fold(Self::default(), |mut totals, issue| {
            totals.issues += 1;
            totals.label_attachments += issue.labels.len();
            totals.assignments += issue.assignments.len();
            totals.comments += issue.comments.len();
            totals.replies += issue.replies();
            totals
        })
    }
}

/// What a run created and what went wrong along the way.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: RunId,
    /// Seed of the random source, for reproducing the run.
    pub seed: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub users_provisioned: usize,
    pub user_failures: Vec<UserFailure>,
    pub plan: PlanSummary,
    pub components: usize,
    pub labels: usize,
    #[serde(flatten)]
    pub totals: IssueTotals,
    pub issue_relations: usize,
    /// Failed label, issue, assignment, comment and relation calls.
    pub failures: Vec<GenerationFailure>,
}

impl RunSummary {
    /// Number of recorded failures of any kind; skipped steps count too.
    pub fn failure_count(&self) -> usize {
        self.user_failures.len() + self.plan.failed + self.plan.skipped + self.failures.len()
    }

    /// True if every call of the run succeeded.
    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }

    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Run {} (seed {})", self.run_id, self.seed)?;
        writeln!(
            f,
            "  users:           {} created, {} failed",
            self.users_provisioned,
            self.user_failures.len()
        )?;
        writeln!(
            f,
            "  build steps:     {} succeeded, {} failed, {} skipped",
            self.plan.succeeded, self.plan.failed, self.plan.skipped
        )?;
        writeln!(f, "  components:      {}", self.components)?;
        writeln!(f, "  labels:          {}", self.labels)?;
        writeln!(f, "  issues:          {}", self.totals.issues)?;
        writeln!(f, "  labels attached: {}", self.totals.label_attachments)?;
        writeln!(f, "  assignments:     {}", self.totals.assignments)?;
        writeln!(
            f,
            "  comments:        {} ({} replies)",
            self.totals.comments, self.totals.replies
        )?;
        writeln!(f, "  issue relations: {}", self.issue_relations)?;
        write!(f, "  duration:        {}ms", self.duration().num_milliseconds())?;

        for user in &self.user_failures {
            write!(f, "\n  ! user {}: {}", user.username, user.reason)?;
        }
        for step in &self.plan.problems {
            write!(f, "\n  ! step {}: {:?}", step.key, step.outcome)?;
        }
        for failure in &self.failures {
            write!(
                f,
                "\n  ! {} for {}: {}",
                failure.action, failure.subject, failure.reason
            )?;
        }
        Ok(())
    }
}
