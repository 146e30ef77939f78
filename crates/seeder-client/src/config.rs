//! Endpoint configuration for the tracker.

use url::Url;

use crate::error::{ClientError, Result};

/// Default GraphQL endpoint of a local tracker.
pub const DEFAULT_GRAPHQL_URL: &str = "http://localhost:8080/graphql";

/// Default account-creation endpoint of a local tracker.
pub const DEFAULT_USER_URL: &str = "http://localhost:3000/login/user";

/// Where the tracker lives and how to authenticate against it.
#[derive(Clone)]
pub struct EndpointConfig {
    /// API token; sent as-is on GraphQL calls and as a bearer token on
    /// account creation.
    pub token: String,
    /// GraphQL endpoint.
    pub graphql_url: String,
    /// Account-creation endpoint.
    pub user_url: String,
}

impl std::fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("token", &"<redacted>")
            .field("graphql_url", &self.graphql_url)
            .field("user_url", &self.user_url)
            .finish()
    }
}

impl EndpointConfig {
    /// Creates a configuration for the default local endpoints.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            user_url: DEFAULT_USER_URL.to_string(),
        }
    }

    /// Sets the GraphQL endpoint.
    pub fn with_graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = url.into();
        self
    }

    /// Sets the account-creation endpoint.
    pub fn with_user_url(mut self, url: impl Into<String>) -> Self {
        self.user_url = url.into();
        self
    }

    /// Checks that the token is present and both endpoints are http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(ClientError::Configuration("API token is empty".into()));
        }
        check_url("GraphQL endpoint", &self.graphql_url)?;
        check_url("user endpoint", &self.user_url)?;
        Ok(())
    }
}

fn check_url(what: &str, raw: &str) -> Result<()> {
    let url = Url::parse(raw)
        .map_err(|e| ClientError::Configuration(format!("invalid {} '{}': {}", what, raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ClientError::Configuration(format!(
            "{} must use http or https, got '{}'",
            what, scheme
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EndpointConfig::new("secret");
        assert_eq!(config.graphql_url, DEFAULT_GRAPHQL_URL);
        assert_eq!(config.user_url, DEFAULT_USER_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = EndpointConfig::new("secret")
            .with_graphql_url("https://tracker.example.com/graphql")
            .with_user_url("https://tracker.example.com/login/user");
        assert_eq!(config.graphql_url, "https://tracker.example.com/graphql");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_token() {
        let result = EndpointConfig::new("  ").validate();
        assert!(matches!(result, Err(ClientError::Configuration(_))));
    }

    #[test]
    fn test_rejects_bad_urls() {
        let bad = EndpointConfig::new("t").with_graphql_url("not a url");
        assert!(bad.validate().is_err());

        let ftp = EndpointConfig::new("t").with_user_url("ftp://example.com/user");
        let err = ftp.validate().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", EndpointConfig::new("super-secret"));
        assert!(!debug.contains("super-secret"));
    }
}
