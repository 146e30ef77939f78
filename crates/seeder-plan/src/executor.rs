//! Executes a build plan against the tracker.
//!
//! Steps run one at a time in topological order. A step only runs when every
//! step it depends on succeeded: a failed step never unblocks its dependents,
//! which are reported as skipped instead of being called with missing IDs.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use seeder_client::{GraphClient, SeedApi};

use crate::error::{PlanError, Result};
use crate::output::{Outputs, StepOutput};
use crate::plan::BuildPlan;
use crate::step::{Step, StepKey, StepKind};

/// How a step ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    Succeeded,
    Failed { reason: String },
    /// Not run because the named step did not succeed.
    Skipped { blocked_by: StepKey },
}

/// Outcome of one step.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub key: StepKey,
    pub kind: &'static str,
    #[serde(flatten)]
    pub outcome: StepOutcome,
}

/// Result of executing a plan.
#[derive(Debug, Default)]
pub struct PlanReport {
    /// One record per step, in execution order.
    pub records: Vec<StepRecord>,
    /// Outputs of the steps that succeeded.
    pub outputs: Outputs,
}

impl PlanReport {
    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Succeeded))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Skipped { .. }))
    }

    /// Records of steps that failed or were skipped.
    pub fn problems(&self) -> impl Iterator<Item = &StepRecord> {
        self.records
            .iter()
            .filter(|r| !matches!(r.outcome, StepOutcome::Succeeded))
    }

    pub fn is_clean(&self) -> bool {
        self.records
            .iter()
            .all(|r| r.outcome == StepOutcome::Succeeded)
    }

    pub fn outcome(&self, key: &StepKey) -> Option<&StepOutcome> {
        self.records.iter().find(|r| &r.key == key).map(|r| &r.outcome)
    }

    fn count(&self, pred: impl Fn(&StepOutcome) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// A step failure: either the remote call or reading an input failed.
enum StepFailure {
    Client(seeder_client::ClientError),
    Input(PlanError),
}

impl std::fmt::Display for StepFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepFailure::Client(e) => write!(f, "{}", e),
            StepFailure::Input(e) => write!(f, "{}", e),
        }
    }
}

impl From<seeder_client::ClientError> for StepFailure {
    fn from(e: seeder_client::ClientError) -> Self {
        StepFailure::Client(e)
    }
}

impl From<PlanError> for StepFailure {
    fn from(e: PlanError) -> Self {
        StepFailure::Input(e)
    }
}

/// Runs plans through a [`SeedApi`].
pub struct PlanExecutor<'a, C> {
    api: &'a SeedApi<C>,
    fail_fast: bool,
}

impl<'a, C: GraphClient> PlanExecutor<'a, C> {
    pub fn new(api: &'a SeedApi<C>) -> Self {
        Self {
            api,
            fail_fast: false,
        }
    }

    /// Stops at the first failed step; the remaining steps are skipped.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Validates and executes `plan`. Only an invalid plan is an `Err`;
    /// step failures are reported in the returned [`PlanReport`].
    pub async fn execute(&self, plan: &BuildPlan) -> Result<PlanReport> {
        let order = plan.topological_order()?;
        info!(steps = order.len(), "Executing build plan");

        let mut report = PlanReport::default();
        let mut settled: HashMap<StepKey, bool> = HashMap::with_capacity(order.len());
        let mut first_failure: Option<StepKey> = None;

        for step in order {
            let blocked_by = match (&first_failure, self.fail_fast) {
                (Some(failed), true) => Some(failed.clone()),
                _ => step
                    .dependencies()
                    .into_iter()
                    .find(|dep| !settled.get(*dep).copied().unwrap_or(false))
                    .cloned(),
            };

            let outcome = if let Some(blocked_by) = blocked_by {
                debug!(step = %step.key, blocked_by = %blocked_by, "Skipping step");
                StepOutcome::Skipped { blocked_by }
            } else {
                match self.run_step(step, &report.outputs).await {
                    Ok(output) => {
                        report.outputs.insert(step.key.clone(), output);
                        StepOutcome::Succeeded
                    }
                    Err(e) => {
                        warn!(step = %step.key, kind = step.kind.name(), error = %e, "Step failed");
                        first_failure.get_or_insert_with(|| step.key.clone());
                        StepOutcome::Failed {
                            reason: e.to_string(),
                        }
                    }
                }
            };

            settled.insert(step.key.clone(), outcome == StepOutcome::Succeeded);
            report.records.push(StepRecord {
                key: step.key.clone(),
                kind: step.kind.name(),
                outcome,
            });
        }

        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Build plan finished"
        );
        Ok(report)
    }

    async fn run_step(
        &self,
        step: &Step,
        outputs: &Outputs,
    ) -> std::result::Result<StepOutput, StepFailure> {
        let api = self.api;
        let output = match &step.kind {
            StepKind::ComponentTemplate { def } => {
                StepOutput::ComponentTemplate(api.create_component_template(def).await?)
            }
            StepKind::InterfaceTemplate {
                def,
                component_templates,
            } => {
                let templates = component_templates
                    .iter()
                    .map(|k| outputs.component_template(k).cloned())
                    .collect::<Result<Vec<_>>>()?;
                StepOutput::InterfaceTemplate(api.create_interface_template(def, &templates).await?)
            }
            StepKind::RelationTemplate { def, from, to } => {
                let from = outputs.component_template(from)?;
                let to = outputs.component_template(to)?;
                StepOutput::RelationTemplate(api.create_relation_template(def, from, to).await?)
            }
            StepKind::IssueTemplate { def } => {
                StepOutput::IssueTemplate(api.create_issue_template(def).await?)
            }
            StepKind::Component { def, template } => {
                let template = outputs.component_template(template)?;
                StepOutput::Component(api.create_component(def, template).await?)
            }
            StepKind::InterfaceSpecification {
                def,
                component,
                template,
            } => {
                let component = &outputs.component(component)?.id;
                let template = outputs.interface_template(template)?;
                StepOutput::InterfaceSpecification(
                    api.create_interface_specification(def, component, template)
                        .await?,
                )
            }
            StepKind::AttachInterfaces {
                specification,
                component,
            } => {
                let specification = outputs.interface_specification(specification)?;
                let component_version = &outputs.component(component)?.version;
                let mut attached = Vec::with_capacity(specification.versions.len());
                for version in &specification.versions {
                    api.add_interface(component_version, version).await?;
                    attached.push(version.clone());
                }
                StepOutput::InterfacesAttached(attached)
            }
            StepKind::Relation {
                start,
                end,
                template,
            } => {
                let start = &outputs.component(start)?.version;
                let end = &outputs.component(end)?.version;
                let template = outputs.relation_template(template)?;
                StepOutput::Relation(api.create_relation(start, end, template).await?)
            }
            StepKind::Project { def } => StepOutput::Project(api.create_project(def).await?),
            StepKind::AddToProject { project, component } => {
                let project = outputs.project(project)?;
                let version = &outputs.component(component)?.version;
                api.add_component_version_to_project(project, version)
                    .await?;
                StepOutput::ProjectMember(version.clone())
            }
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::{demo_plan, PlanOptions};
    use seeder_client::{DryRunClient, Operation};

    #[tokio::test]
    async fn test_demo_plan_against_dry_run() {
        let api = SeedApi::new(DryRunClient::new());
        let plan = demo_plan(&PlanOptions::default());
        let report = PlanExecutor::new(&api).execute(&plan).await.unwrap();

        assert!(report.is_clean());
        assert_eq!(report.succeeded(), plan.len());

        let client = api.client();
        assert_eq!(client.count(Operation::CreateComponentTemplate), 3);
        assert_eq!(client.count(Operation::CreateIssueTemplate), 3);
        assert_eq!(client.count(Operation::CreateComponent), 7);
        assert_eq!(client.count(Operation::CreateInterfaceSpecification), 3);
        // 3 microservices x 3 interface versions
        assert_eq!(client.count(Operation::AddInterface), 9);
        assert_eq!(client.count(Operation::CreateRelation), 8);
        assert_eq!(client.count(Operation::CreateProject), 1);
        assert_eq!(client.count(Operation::AddComponentVersionToProject), 7);

        let template = report
            .outputs
            .issue_template(&crate::demo::default_issue_template_key())
            .unwrap();
        assert_eq!(template.issue_states.len(), 3);
    }

    #[tokio::test]
    async fn test_no_output_consumed_before_it_is_produced() {
        let api = SeedApi::new(DryRunClient::new());
        let plan = demo_plan(&PlanOptions::default().with_project_count(2));
        let report = PlanExecutor::new(&api).execute(&plan).await.unwrap();

        let executed_at: HashMap<&StepKey, usize> = report
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| (&r.key, i))
            .collect();
        for (i, record) in report.records.iter().enumerate() {
            let step = plan.get(&record.key).unwrap();
            for dep in step.dependencies() {
                assert!(executed_at[dep] < i, "{} ran before {}", record.key, dep);
            }
        }

        // The version linked to each interface is the one the component returned.
        let first_attach = &api.client().calls_of(Operation::AddInterface)[0];
        let order_service = report.outputs.component(&"order-service".into()).unwrap();
        assert_eq!(first_attach["componentVersion"], order_service.version.as_str());
    }

    #[tokio::test]
    async fn test_failed_step_skips_dependents_only() {
        // Second component created is ShoppingCartService.
        let client = DryRunClient::new().with_failing_call(Operation::CreateComponent, 2);
        let api = SeedApi::new(client);
        let plan = demo_plan(&PlanOptions::default());
        let report = PlanExecutor::new(&api).execute(&plan).await.unwrap();

        assert_eq!(report.failed(), 1);
        assert_eq!(
            report.outcome(&"shopping-cart-service".into()),
            Some(&StepOutcome::Failed {
                reason: "simulated failure for CreateComponent".into()
            })
        );
        assert_eq!(
            report.outcome(&"shopping-cart-service/interface".into()),
            Some(&StepOutcome::Skipped {
                blocked_by: "shopping-cart-service".into()
            })
        );
        // Attach is blocked by its specification, which is the first
        // unsettled dependency.
        assert_eq!(
            report.outcome(&"shopping-cart-service/interface/attach".into()),
            Some(&StepOutcome::Skipped {
                blocked_by: "shopping-cart-service/interface".into()
            })
        );
        assert_eq!(
            report.outcome(&"test-project/shopping-cart-service".into()),
            Some(&StepOutcome::Skipped {
                blocked_by: "shopping-cart-service".into()
            })
        );
        // Independent steps still ran.
        assert_eq!(
            report.outcome(&"test-project/payment-service".into()),
            Some(&StepOutcome::Succeeded)
        );
        assert_eq!(api.client().count(Operation::AddComponentVersionToProject), 6);
        // Relations touching the shopping cart are skipped: order->cart and cart->express etc.
        let skipped_relations = report
            .records
            .iter()
            .filter(|r| r.kind == "relation" && matches!(r.outcome, StepOutcome::Skipped { .. }))
            .count();
        assert_eq!(api.client().count(Operation::CreateRelation), 8 - skipped_relations);
        assert!(skipped_relations > 0);
    }

    #[tokio::test]
    async fn test_fail_fast_stops_at_first_failure() {
        let client = DryRunClient::new().with_failing_call(Operation::CreateComponentTemplate, 2);
        let api = SeedApi::new(client);
        let plan = demo_plan(&PlanOptions::default());
        let report = PlanExecutor::new(&api)
            .with_fail_fast(true)
            .execute(&plan)
            .await
            .unwrap();

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), plan.len() - 2);
        assert!(report.problems().skip(1).all(|r| r.outcome
            == StepOutcome::Skipped {
                blocked_by: "library-template".into()
            }));
        assert_eq!(api.client().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_invalid_plan_is_an_error() {
        let api = SeedApi::new(DryRunClient::new());
        let mut plan = BuildPlan::new();
        plan.add(
            "member",
            StepKind::AddToProject {
                project: "missing".into(),
                component: "missing".into(),
            },
        );
        assert!(matches!(
            PlanExecutor::new(&api).execute(&plan).await,
            Err(PlanError::UnknownDependency { .. })
        ));
        assert!(api.client().calls().is_empty());
    }

    #[test]
    fn test_record_serialization() {
        let record = StepRecord {
            key: "express".into(),
            kind: "component",
            outcome: StepOutcome::Skipped {
                blocked_by: "library-template".into(),
            },
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["blocked_by"], "library-template");
        assert_eq!(json["key"], "express");
    }
}
