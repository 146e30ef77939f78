//! Error types for a seeding run.

use thiserror::Error;

use seeder_plan::StepKey;

/// Errors that end a run before it finishes.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The build plan is invalid.
    #[error("Plan error: {0}")]
    Plan(#[from] seeder_plan::PlanError),

    /// A call the rest of the run depends on failed.
    #[error("Client error: {0}")]
    Client(#[from] seeder_client::ClientError),

    /// Invalid generator settings.
    #[error("Generator error: {0}")]
    Generation(#[from] seeder_generator::GenerationError),

    /// The default issue template was not created, so no issue can be.
    #[error("default issue template is unavailable: {0}")]
    IssueTemplateUnavailable(String),

    /// A build step failed with fail-fast enabled.
    #[error("aborted after step {step} failed: {reason}")]
    Aborted {
        /// Step that failed.
        step: StepKey,
        /// Why it failed.
        reason: String,
    },
}

/// Result type for seeding operations.
pub type Result<T> = std::result::Result<T, SeedError>;
