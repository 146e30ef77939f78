//! Command implementations.

use std::sync::Arc;

use tracing::info;

use seeder_client::{DryRunClient, HttpGraphClient, RestUserProvisioner};
use seeder_orchestrator::{RunSummary, Seeder};

use crate::cli::{Cli, OutputFormat};

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Exit status of a run that finished but recorded failures.
pub const EXIT_WITH_FAILURES: i32 = 2;

/// Runs a full seeding pass against the configured tracker, or against an
/// in-memory one with `--dry-run`.
pub async fn run(cli: &Cli) -> Result<RunSummary> {
    let endpoint = cli.endpoint_config();
    endpoint.validate()?;
    let config = cli.seed_config();

    let summary = if cli.dry_run {
        info!("Dry run, no requests leave the process");
        let client = Arc::new(DryRunClient::new());
        Seeder::new(Arc::clone(&client), client, config).run().await?
    } else {
        info!(graphql_url = %endpoint.graphql_url, user_url = %endpoint.user_url, "Seeding tracker");
        Seeder::new(
            HttpGraphClient::new(&endpoint),
            RestUserProvisioner::new(&endpoint),
            config,
        )
        .run()
        .await?
    };
    Ok(summary)
}

/// Renders the summary in the requested format.
pub fn render(summary: &RunSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

/// Process exit status for a finished run.
pub fn exit_code(summary: &RunSummary) -> i32 {
    if summary.is_clean() {
        0
    } else {
        EXIT_WITH_FAILURES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn dry_cli(extra: &[&str]) -> Cli {
        let mut args = vec!["seeder", "secret", "--dry-run", "--seed", "11"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    #[tokio::test]
    async fn test_dry_run_is_clean() {
        let summary = run(&dry_cli(&[])).await.unwrap();
        assert_eq!(summary.seed, 11);
        assert_eq!(summary.components, 7);
        assert_eq!(summary.totals.issues, 70);
        assert_eq!(exit_code(&summary), 0);
    }

    #[tokio::test]
    async fn test_dry_run_honours_counts() {
        let summary = run(&dry_cli(&["--issue-count", "1", "--skip-relations"]))
            .await
            .unwrap();
        assert_eq!(summary.totals.issues, 7);
        assert_eq!(summary.issue_relations, 7);
        assert_eq!(summary.plan.steps, 31);
    }

    #[tokio::test]
    async fn test_exit_code_reports_recorded_failures() {
        let client = Arc::new(DryRunClient::new().with_failing_user("ElectricJaguar"));
        let config = dry_cli(&["--issue-count", "1"]).seed_config();
        let summary = Seeder::new(Arc::clone(&client), client, config)
            .run()
            .await
            .unwrap();

        assert_eq!(summary.user_failures.len(), 1);
        assert!(!summary.is_clean());
        assert_eq!(exit_code(&summary), EXIT_WITH_FAILURES);
    }

    #[tokio::test]
    async fn test_oversized_issue_count_is_fatal() {
        let count = usize::MAX.to_string();
        let cli = dry_cli(&["--issue-count", count.as_str()]);
        let err = run(&cli).await.unwrap_err();
        assert!(err.to_string().contains("issue_count"));
    }

    #[tokio::test]
    async fn test_invalid_endpoint_is_fatal() {
        let cli = dry_cli(&["--graphql-url", "ftp://tracker/graphql"]);
        let err = run(&cli).await.unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[tokio::test]
    async fn test_render_formats() {
        let summary = run(&dry_cli(&["--issue-count", "1"])).await.unwrap();

        let text = render(&summary, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Run run-"));
        assert!(text.contains("issues:          7"));

        let json: serde_json::Value =
            serde_json::from_str(&render(&summary, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["issues"], 7);
        assert_eq!(json["seed"], 11);
        assert_eq!(json["plan"]["failed"], 0);
    }
}
