//! Seeder - runs a full seeding pass against one tracker.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use seeder_client::{provision_users, GraphClient, SeedApi, UserProvisioner};
use seeder_generator::{GenerationFailure, IssueGenerator};
use seeder_models::catalog::{LABELS, USERNAMES};
use seeder_models::{ComponentId, IssueId, LabelId, RunId};
use seeder_plan::{demo::default_issue_template_key, demo_plan, PlanExecutor, StepOutcome};

use crate::config::SeedConfig;
use crate::error::{Result, SeedError};
use crate::summary::{IssueTotals, PlanSummary, RunSummary, UserFailure};

/// Seeds a tracker with the demo data set.
///
/// Phases run strictly in order: users, build plan, component listing,
/// labels, issues, issue relations. Only user provisioning is concurrent.
pub struct Seeder<C, P> {
    api: SeedApi<C>,
    provisioner: P,
    config: SeedConfig,
}

impl<C: GraphClient, P: UserProvisioner> Seeder<C, P> {
    pub fn new(client: C, provisioner: P, config: SeedConfig) -> Self {
        Self {
            api: SeedApi::new(client),
            provisioner,
            config,
        }
    }

    pub fn api(&self) -> &SeedApi<C> {
        &self.api
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Runs every phase and summarizes what was created.
    ///
    /// Fails only when the run cannot continue: an invalid configuration or
    /// plan, a missing default issue template, a failed component listing,
    /// or any failed build step with fail-fast enabled. Everything else is
    /// recorded in the summary.
    pub async fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;

        let run_id = RunId::new();
        let started_at = Utc::now();
        info!(run_id = %run_id, issue_count = self.config.issue_count(), "Starting seeding run");

        let users = provision_users(&self.provisioner, USERNAMES).await;

        let plan = demo_plan(&self.config.plan_options());
        let report = PlanExecutor::new(&self.api)
            .with_fail_fast(self.config.fail_fast)
            .execute(&plan)
            .await?;
        if self.config.fail_fast {
            let failed = report.records.iter().find_map(|r| match &r.outcome {
                StepOutcome::Failed { reason } => Some((r.key.clone(), reason.clone())),
                _ => None,
            });
            if let Some((step, reason)) = failed {
                return Err(SeedError::Aborted { step, reason });
            }
        }

        let template_key = default_issue_template_key();
        let template = report
            .outputs
            .issue_template(&template_key)
            .map_err(|e| SeedError::IssueTemplateUnavailable(e.to_string()))?;

        let components = self.api.list_components().await?;

        let mut failures = Vec::new();
        let labels = self.create_labels(&components, &mut failures).await;

        let seed = self
            .config
            .seed
            .unwrap_or_else(|| Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64);
        info!(seed, "Seeding random source");

        let user_ids = users.ids();
        let mut generator = IssueGenerator::new(
            &self.api,
            StdRng::seed_from_u64(seed),
            template,
            self.config.generator.clone(),
        )
        .with_labels(&labels)
        .with_users(&user_ids);

        let issues = generator.generate_for_components(&components).await;
        let pool: Vec<IssueId> = issues.iter().map(|i| i.id.clone()).collect();
        let relations = generator.generate_relations(&pool).await;
        failures.extend(generator.into_failures());

        let summary = RunSummary {
            run_id,
            seed,
            started_at,
            finished_at: Utc::now(),
            users_provisioned: users.resolved.len(),
            user_failures: users
                .failed
                .into_iter()
                .map(|(username, reason)| UserFailure { username, reason })
                .collect(),
            plan: PlanSummary::from(&report),
            components: components.len(),
            labels: labels.len(),
            totals: IssueTotals::from_issues(&issues),
            issue_relations: relations.len(),
            failures,
        };
        info!(
            run_id = %summary.run_id,
            issues = summary.totals.issues,
            issue_relations = summary.issue_relations,
            failures = summary.failure_count(),
            "Seeding run finished"
        );
        Ok(summary)
    }

    /// Creates the demo labels on every listed component. A label that fails
    /// is recorded and left out of the returned pool.
    async fn create_labels(
        &self,
        components: &[ComponentId],
        failures: &mut Vec<GenerationFailure>,
    ) -> Vec<LabelId> {
        let mut labels = Vec::with_capacity(LABELS.len());
        for def in LABELS {
            match self.api.create_label(def, components).await {
                Ok(id) => labels.push(id),
                Err(e) => {
                    warn!(label = def.name, error = %e, "Failed to create label");
                    failures.push(GenerationFailure {
                        action: "label",
                        subject: def.name.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seeder_client::{DryRunClient, Operation};
    use std::sync::Arc;

    type DrySeeder = Seeder<Arc<DryRunClient>, Arc<DryRunClient>>;

    fn build(client: DryRunClient, config: SeedConfig) -> (Arc<DryRunClient>, DrySeeder) {
        let client = Arc::new(client);
        let seeder = Seeder::new(Arc::clone(&client), Arc::clone(&client), config);
        (client, seeder)
    }

    #[tokio::test]
    async fn test_labels_target_listed_components() {
        let (client, seeder) = build(DryRunClient::new(), SeedConfig::default().with_seed(1));
        let summary = seeder.run().await.unwrap();
        assert_eq!(summary.labels, 4);

        let label_calls = client.calls_of(Operation::CreateLabel);
        assert_eq!(label_calls.len(), 4);
        assert_eq!(label_calls[0]["trackables"].as_array().unwrap().len(), 7);
        assert_eq!(label_calls[3]["name"], "enhancement");
    }

    #[tokio::test]
    async fn test_failed_label_is_dropped_from_pool() {
        let client = DryRunClient::new().with_failing_call(Operation::CreateLabel, 2);
        let config = SeedConfig::default()
            .with_seed(3)
            .with_generator(seeder_generator::GeneratorConfig::default().with_label_probability(1.0));
        let (client, seeder) = build(client, config);
        let summary = seeder.run().await.unwrap();

        assert_eq!(summary.labels, 3);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].subject, "documentation");
        // Every issue gets the three labels that exist.
        assert_eq!(summary.totals.label_attachments, 70 * 3);
        assert_eq!(client.count(Operation::AddLabelToIssue), 70 * 3);
    }

    #[tokio::test]
    async fn test_phases_run_in_order() {
        let (client, seeder) = build(DryRunClient::new(), SeedConfig::default().with_seed(5));
        seeder.run().await.unwrap();

        let ops: Vec<Operation> = client.calls().iter().map(|c| c.operation).collect();
        let first = |op: Operation| ops.iter().position(|o| *o == op).unwrap();
        let last = |op: Operation| ops.iter().rposition(|o| *o == op).unwrap();

        assert!(last(Operation::AddComponentVersionToProject) < first(Operation::ListComponents));
        assert!(first(Operation::ListComponents) < first(Operation::CreateLabel));
        assert!(last(Operation::CreateLabel) < first(Operation::CreateIssue));
        assert!(last(Operation::CreateIssue) < first(Operation::CreateIssueRelation));
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected_before_any_call() {
        let config = SeedConfig::default()
            .with_generator(seeder_generator::GeneratorConfig::default().with_label_probability(2.0));
        let (client, seeder) = build(DryRunClient::new(), config);
        assert!(matches!(seeder.run().await, Err(SeedError::Generation(_))));
        assert!(client.calls().is_empty());
        assert!(client.users().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_issue_count_is_rejected() {
        let client = DryRunClient::new().with_failing_operation(Operation::CreateIssue);
        let config = SeedConfig::default().with_seed(1).with_issue_count(usize::MAX / 4);
        let (client, seeder) = build(client, config);

        let err = seeder.run().await.unwrap_err();
        assert!(matches!(err, SeedError::Generation(_)));
        assert!(err.to_string().contains("issue_count"));
        assert_eq!(client.count(Operation::CreateIssue), 0);
    }
}
