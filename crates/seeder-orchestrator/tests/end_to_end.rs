//! Full runs against the dry-run tracker.

use std::collections::HashSet;
use std::sync::Arc;

use seeder_client::{DryRunClient, Operation};
use seeder_orchestrator::{SeedConfig, SeedError, Seeder};

type DrySeeder = Seeder<Arc<DryRunClient>, Arc<DryRunClient>>;

fn seeder(client: DryRunClient, config: SeedConfig) -> (Arc<DryRunClient>, DrySeeder) {
    let client = Arc::new(client);
    let seeder = Seeder::new(Arc::clone(&client), Arc::clone(&client), config);
    (client, seeder)
}

#[tokio::test]
async fn seventy_issues_and_seventy_relations() {
    let (client, seeder) = seeder(DryRunClient::new(), SeedConfig::default().with_seed(2024));
    let summary = seeder.run().await.unwrap();

    assert!(summary.is_clean(), "unexpected failures:\n{}", summary);
    assert_eq!(summary.seed, 2024);
    assert_eq!(summary.users_provisioned, 5);
    assert_eq!(summary.components, 7);
    assert_eq!(summary.labels, 4);
    assert_eq!(summary.totals.issues, 70);
    assert_eq!(summary.issue_relations, 70);

    assert_eq!(client.users().len(), 5);
    assert_eq!(client.count(Operation::CreateComponentTemplate), 3);
    assert_eq!(client.count(Operation::CreateInterfaceSpecificationTemplate), 1);
    assert_eq!(client.count(Operation::CreateRelationTemplate), 3);
    assert_eq!(client.count(Operation::CreateIssueTemplate), 3);
    assert_eq!(client.count(Operation::CreateComponent), 7);
    assert_eq!(client.count(Operation::CreateRelation), 8);
    assert_eq!(client.count(Operation::CreateProject), 1);
    assert_eq!(client.count(Operation::AddComponentVersionToProject), 7);
    assert_eq!(client.count(Operation::ListComponents), 1);
    assert_eq!(client.count(Operation::CreateIssue), 70);
    assert_eq!(client.count(Operation::CreateIssueRelation), 70);
    assert_eq!(
        client.count(Operation::AddLabelToIssue),
        summary.totals.label_attachments
    );
    assert_eq!(
        client.count(Operation::CreateIssueComment),
        summary.totals.comments
    );

    // Ten issues per listed component.
    let mut per_component = std::collections::HashMap::new();
    for call in client.calls_of(Operation::CreateIssue) {
        *per_component
            .entry(call["trackable"].as_str().unwrap().to_string())
            .or_insert(0) += 1;
    }
    assert_eq!(per_component.len(), 7);
    assert!(per_component.values().all(|n| *n == 10));

    // Relations only connect issues handed out by the tracker.
    for call in client.calls_of(Operation::CreateIssueRelation) {
        assert!(call["issue"].as_str().unwrap().starts_with("dry-issue-"));
        assert!(call["relatedIssue"].as_str().unwrap().starts_with("dry-issue-"));
    }
}

#[tokio::test]
async fn same_seed_reproduces_the_run() {
    let titles = |client: &DryRunClient| -> Vec<String> {
        client
            .calls_of(Operation::CreateIssue)
            .iter()
            .map(|c| c["title"].as_str().unwrap().to_string())
            .collect()
    };

    let (a, first) = seeder(DryRunClient::new(), SeedConfig::default().with_seed(11));
    let (b, second) = seeder(DryRunClient::new(), SeedConfig::default().with_seed(11));
    let one = first.run().await.unwrap();
    let two = second.run().await.unwrap();

    assert_eq!(titles(&a), titles(&b));
    assert_eq!(one.totals, two.totals);
    assert_ne!(one.run_id, two.run_id);
}

#[tokio::test]
async fn failed_user_is_never_assigned() {
    let client = DryRunClient::new().with_failing_user("ElectricJaguar");
    let config = SeedConfig::default().with_seed(5).with_generator(
        seeder_generator::GeneratorConfig::default().with_assignment_probability(1.0),
    );
    let (client, seeder) = seeder(client, config);
    let summary = seeder.run().await.unwrap();

    assert_eq!(summary.users_provisioned, 4);
    assert_eq!(summary.user_failures.len(), 1);
    assert_eq!(summary.user_failures[0].username, "ElectricJaguar");
    assert!(!summary.is_clean());

    // Every issue is assigned to each of the four created users, and nobody else.
    let assigned: HashSet<String> = client
        .calls_of(Operation::CreateAssignment)
        .iter()
        .map(|c| c["user"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(assigned.len(), 4);
    assert_eq!(summary.totals.assignments, 70 * 4);
}

#[tokio::test]
async fn failed_component_skips_its_dependents_but_not_the_run() {
    // The fourth component created is Express.
    let client = DryRunClient::new().with_failing_call(Operation::CreateComponent, 4);
    let (client, seeder) = seeder(client, SeedConfig::default().with_seed(9));
    let summary = seeder.run().await.unwrap();

    assert_eq!(summary.plan.failed, 1);
    assert!(summary.plan.skipped > 0);
    assert!(summary
        .plan
        .problems
        .iter()
        .any(|p| p.key.as_str() == "test-project/express"));
    // Only the six created components are listed and seeded.
    assert_eq!(summary.components, 6);
    assert_eq!(summary.totals.issues, 60);
    assert_eq!(client.count(Operation::AddComponentVersionToProject), 6);
}

#[tokio::test]
async fn fail_fast_aborts_the_run() {
    let client = DryRunClient::new().with_failing_call(Operation::CreateComponent, 1);
    let (client, seeder) = seeder(client, SeedConfig::default().with_fail_fast(true));

    match seeder.run().await {
        Err(SeedError::Aborted { step, .. }) => assert_eq!(step.as_str(), "order-service"),
        other => panic!("expected abort, got {:?}", other.map(|s| s.to_string())),
    }
    assert_eq!(client.count(Operation::CreateIssue), 0);
}

#[tokio::test]
async fn missing_issue_template_is_fatal() {
    let client = DryRunClient::new().with_failing_call(Operation::CreateIssueTemplate, 1);
    let (client, seeder) = seeder(client, SeedConfig::default());

    assert!(matches!(
        seeder.run().await,
        Err(SeedError::IssueTemplateUnavailable(_))
    ));
    assert_eq!(client.count(Operation::ListComponents), 0);
}

#[tokio::test]
async fn failed_listing_is_fatal() {
    let client = DryRunClient::new().with_failing_operation(Operation::ListComponents);
    let (client, seeder) = seeder(client, SeedConfig::default());

    assert!(matches!(seeder.run().await, Err(SeedError::Client(_))));
    assert_eq!(client.count(Operation::CreateLabel), 0);
}

#[tokio::test]
async fn two_projects_double_the_issues() {
    let config = SeedConfig::default().with_seed(1).with_project_count(2).with_issue_count(2);
    let (client, seeder) = seeder(DryRunClient::new(), config);
    let summary = seeder.run().await.unwrap();

    assert!(summary.is_clean());
    assert_eq!(summary.components, 14);
    assert_eq!(summary.totals.issues, 28);
    assert_eq!(summary.issue_relations, 28);
    assert_eq!(client.count(Operation::CreateProject), 2);
    // Templates are created once.
    assert_eq!(client.count(Operation::CreateComponentTemplate), 3);
}

#[tokio::test]
async fn relations_can_be_skipped() {
    let config = SeedConfig::default().with_seed(1).with_relations(false).with_issue_count(1);
    let (client, seeder) = seeder(DryRunClient::new(), config);
    let summary = seeder.run().await.unwrap();

    assert!(summary.is_clean());
    assert_eq!(client.count(Operation::CreateRelation), 0);
    assert_eq!(summary.totals.issues, 7);
}
