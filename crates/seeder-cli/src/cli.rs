//! Command-line interface definition using clap.

use clap::Parser;

use seeder_client::config::{DEFAULT_GRAPHQL_URL, DEFAULT_USER_URL};
use seeder_client::EndpointConfig;
use seeder_orchestrator::SeedConfig;

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    // Format: "0.3.0 (abc1234, 2026-01-29)"
    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Seeder - fills a component/issue tracker with demo data
#[derive(Parser, Debug)]
#[command(name = "seeder")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// API token of the tracker
    #[arg(required = true, env = "SEEDER_TOKEN", hide_env_values = true)]
    pub token: String,

    /// GraphQL endpoint
    #[arg(long, env = "SEEDER_GRAPHQL_URL", default_value = DEFAULT_GRAPHQL_URL)]
    pub graphql_url: String,

    /// Account-creation endpoint
    #[arg(long, env = "SEEDER_USER_URL", default_value = DEFAULT_USER_URL)]
    pub user_url: String,

    /// Issues created per component (at most 10000)
    #[arg(long, default_value_t = 10)]
    pub issue_count: usize,

    /// Copies of the component/project graph
    #[arg(long, default_value_t = 1)]
    pub project_count: usize,

    /// Seed of the random source (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not create component relations
    #[arg(long)]
    pub skip_relations: bool,

    /// Abort on the first failed build step
    #[arg(long)]
    pub fail_fast: bool,

    /// Run against an in-memory tracker instead of the network
    #[arg(long)]
    pub dry_run: bool,

    /// Output format of the run summary
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Output format of the run summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Tracker endpoints from the token and URL flags.
    pub fn endpoint_config(&self) -> EndpointConfig {
        EndpointConfig::new(self.token.clone())
            .with_graphql_url(self.graphql_url.clone())
            .with_user_url(self.user_url.clone())
    }

    /// Run settings from the flags.
    pub fn seed_config(&self) -> SeedConfig {
        let config = SeedConfig::default()
            .with_issue_count(self.issue_count)
            .with_project_count(self.project_count)
            .with_relations(!self.skip_relations)
            .with_fail_fast(self.fail_fast);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_token_only() {
        let cli = Cli::parse_from(["seeder", "secret"]);
        assert_eq!(cli.token, "secret");
        assert_eq!(cli.issue_count, 10);
        assert_eq!(cli.project_count, 1);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.dry_run);
        assert!(!cli.skip_relations);
    }

    #[test]
    fn test_cli_parse_options() {
        let cli = Cli::parse_from([
            "seeder",
            "secret",
            "--graphql-url",
            "https://tracker.example.com/graphql",
            "--issue-count",
            "3",
            "--project-count",
            "2",
            "--seed",
            "42",
            "--skip-relations",
            "--fail-fast",
            "--dry-run",
            "--format",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.graphql_url, "https://tracker.example.com/graphql");
        assert_eq!(cli.user_url, DEFAULT_USER_URL);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);

        let config = cli.seed_config();
        assert_eq!(config.issue_count(), 3);
        assert_eq!(config.project_count, 2);
        assert_eq!(config.seed, Some(42));
        assert!(!config.include_relations);
        assert!(config.fail_fast);
    }

    #[test]
    fn test_endpoint_config() {
        let cli = Cli::parse_from(["seeder", "secret", "--user-url", "http://tracker:3000/login/user"]);
        let endpoint = cli.endpoint_config();
        assert_eq!(endpoint.token, "secret");
        assert_eq!(endpoint.graphql_url, DEFAULT_GRAPHQL_URL);
        assert_eq!(endpoint.user_url, "http://tracker:3000/login/user");
    }

    #[test]
    fn test_log_level_mapping() {
        let level = |v: &str| Cli::parse_from(["seeder", "t", v]).log_level();
        assert_eq!(Cli::parse_from(["seeder", "t"]).log_level(), tracing::Level::WARN);
        assert_eq!(level("-v"), tracing::Level::INFO);
        assert_eq!(level("-vvv"), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["seeder", "t", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
