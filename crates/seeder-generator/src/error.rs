//! Error types for issue generation.

use seeder_client::ClientError;
use thiserror::Error;

/// Errors that can occur while generating an issue.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The issue template offers nothing to pick from.
    #[error("issue template has no {0}")]
    EmptyOptions(&'static str),

    /// Invalid generator configuration.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    /// The tracker rejected a call.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result type alias for generation.
pub type Result<T> = std::result::Result<T, GenerationError>;
