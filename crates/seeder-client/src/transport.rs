//! Request/response transport to the GraphQL endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::config::EndpointConfig;
use crate::error::{ClientError, Result};
use crate::operations::Operation;

/// A transport that can execute one GraphQL operation.
///
/// Implementations return the `data` object of a successful response. Any
/// transport failure, HTTP error or GraphQL `errors` entry is an `Err`.
#[async_trait]
pub trait GraphClient: Send + Sync {
    /// Executes `operation` with the given variables.
    async fn call(&self, operation: Operation, variables: Value) -> Result<Value>;
}

#[async_trait]
impl<T: GraphClient + ?Sized> GraphClient for Arc<T> {
    async fn call(&self, operation: Operation, variables: Value) -> Result<Value> {
        (**self).call(operation, variables).await
    }
}

/// GraphQL request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRequest<'a> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: Value,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphError>,
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphError {
    pub message: String,
}

impl GraphResponse {
    /// Converts the envelope into the `data` object, failing on errors.
    pub fn into_data(self, operation: Operation) -> Result<Value> {
        if !self.errors.is_empty() {
            return Err(ClientError::Remote {
                operation: operation.name().to_string(),
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            });
        }
        match self.data {
            Some(Value::Null) | None => Err(ClientError::MissingData(operation.name().to_string())),
            Some(data) => Ok(data),
        }
    }
}

/// GraphQL transport over HTTP.
#[derive(Clone)]
pub struct HttpGraphClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpGraphClient {
    /// Creates a transport for the configured GraphQL endpoint.
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.graphql_url.clone(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl GraphClient for HttpGraphClient {
    async fn call(&self, operation: Operation, variables: Value) -> Result<Value> {
        let request = GraphRequest {
            query: operation.document(),
            operation_name: operation.name(),
            variables,
        };

        trace!(operation = %operation, variables = %request.variables, "Sending GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("authorization", self.token.as_str())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                operation: operation.name().to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                operation: operation.name().to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GraphResponse = response.json().await.map_err(|e| {
            ClientError::invalid_response(operation.name(), format!("not a GraphQL response: {}", e))
        })?;

        envelope.into_data(operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let request = GraphRequest {
            query: Operation::ListComponents.document(),
            operation_name: Operation::ListComponents.name(),
            variables: json!({}),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["operationName"], "GetComponents");
        assert!(json["query"].as_str().unwrap().contains("components"));
        assert_eq!(json["variables"], json!({}));
    }

    #[test]
    fn test_response_with_data() {
        let raw = r#"{"data": {"createLabel": {"label": {"id": "l-1"}}}}"#;
        let response: GraphResponse = serde_json::from_str(raw).unwrap();
        let data = response.into_data(Operation::CreateLabel).unwrap();
        assert_eq!(data["createLabel"]["label"]["id"], "l-1");
    }

    #[test]
    fn test_response_with_errors() {
        let raw = r#"{
            "data": null,
            "errors": [{"message": "Template not found", "path": ["createIssue"]}]
        }"#;
        let response: GraphResponse = serde_json::from_str(raw).unwrap();
        let err = response.into_data(Operation::CreateIssue).unwrap_err();
        match err {
            ClientError::Remote { operation, messages } => {
                assert_eq!(operation, "CreateIssue");
                assert_eq!(messages, vec!["Template not found".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_response_without_data() {
        let response: GraphResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            response.into_data(Operation::CreateProject),
            Err(ClientError::MissingData(_))
        ));
    }
}
