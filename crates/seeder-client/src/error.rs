//! Error types for remote calls.

use thiserror::Error;

/// Errors that can occur while talking to the tracker.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport error calling {operation}: {message}")]
    Transport {
        /// Operation or endpoint that was being called.
        operation: String,
        /// Error message.
        message: String,
    },

    /// The server answered with a non-success HTTP status.
    #[error("{operation} returned HTTP {status}: {body}")]
    Status {
        /// Operation or endpoint that was being called.
        operation: String,
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The GraphQL response carried errors (validation, unknown IDs, auth).
    #[error("{operation} rejected by server: {}", messages.join("; "))]
    Remote {
        /// Operation that was rejected.
        operation: String,
        /// Messages of the `errors` array.
        messages: Vec<String>,
    },

    /// The response had neither `data` nor `errors`.
    #[error("{0} returned no data")]
    MissingData(String),

    /// The response did not have the expected shape.
    #[error("unexpected response for {operation}: {message}")]
    InvalidResponse {
        /// Operation whose response could not be read.
        operation: String,
        /// What was wrong.
        message: String,
    },

    /// Failure injected by the dry-run transport.
    #[error("simulated failure for {0}")]
    Simulated(String),

    /// Invalid endpoint configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Builds an `InvalidResponse` error.
    pub fn invalid_response(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClientError::Remote {
            operation: "createIssue".into(),
            messages: vec!["unknown state".into(), "unknown type".into()],
        };
        assert_eq!(
            err.to_string(),
            "createIssue rejected by server: unknown state; unknown type"
        );

        let err = ClientError::Status {
            operation: "createUser".into(),
            status: 401,
            body: "unauthorized".into(),
        };
        assert_eq!(err.to_string(), "createUser returned HTTP 401: unauthorized");

        let err = ClientError::MissingData("getComponents".into());
        assert_eq!(err.to_string(), "getComponents returned no data");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Serialization(_)));
    }
}
