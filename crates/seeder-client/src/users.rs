//! Account provisioning over the tracker's REST login endpoint.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use seeder_models::UserId;

use crate::config::EndpointConfig;
use crate::error::{ClientError, Result};

/// Something that can create user accounts.
#[async_trait]
pub trait UserProvisioner: Send + Sync {
    /// Creates an account for `username` and returns its ID.
    async fn create_user(&self, username: &str) -> Result<UserId>;
}

#[async_trait]
impl<T: UserProvisioner + ?Sized> UserProvisioner for Arc<T> {
    async fn create_user(&self, username: &str) -> Result<UserId> {
        (**self).create_user(username).await
    }
}

/// Account creation request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest<'a> {
    pub username: &'a str,
    pub display_name: &'a str,
    pub email: String,
    pub is_admin: bool,
}

impl<'a> CreateUserRequest<'a> {
    /// A non-admin account whose display name is the username.
    pub fn for_username(username: &'a str) -> Self {
        Self {
            username,
            display_name: username,
            email: format!("{}@example.com", username),
            is_admin: false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreateUserResponse {
    id: String,
}

/// Creates accounts by POSTing to the login endpoint with a bearer token.
#[derive(Clone)]
pub struct RestUserProvisioner {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl RestUserProvisioner {
    pub fn new(config: &EndpointConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.user_url.clone(),
            token: config.token.clone(),
        }
    }
}

#[async_trait]
impl UserProvisioner for RestUserProvisioner {
    async fn create_user(&self, username: &str) -> Result<UserId> {
        let operation = format!("createUser({})", username);
        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .json(&CreateUserRequest::for_username(username))
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                operation: operation.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        let created: CreateUserResponse = response
            .json()
            .await
            .map_err(|e| ClientError::invalid_response(operation, e.to_string()))?;
        debug!(username, id = %created.id, "Created user");
        Ok(UserId::from(created.id))
    }
}

/// Outcome of provisioning a batch of accounts.
#[derive(Debug, Default)]
pub struct ProvisionedUsers {
    /// Usernames that got an account, in request order.
    pub resolved: Vec<(String, UserId)>,
    /// Usernames whose account creation failed, with the reason.
    pub failed: Vec<(String, String)>,
}

impl ProvisionedUsers {
    /// IDs of every created account.
    pub fn ids(&self) -> Vec<UserId> {
        self.resolved.iter().map(|(_, id)| id.clone()).collect()
    }
}

/// Creates all accounts concurrently. A failed account is reported but does
/// not stop the others.
pub async fn provision_users<P>(provisioner: &P, usernames: &[&str]) -> ProvisionedUsers
where
    P: UserProvisioner + ?Sized,
{
    let results = join_all(usernames.iter().map(|u| provisioner.create_user(u))).await;

    let mut users = ProvisionedUsers::default();
    for (username, result) in usernames.iter().zip(results) {
        match result {
            Ok(id) => users.resolved.push((username.to_string(), id)),
            Err(e) => {
                warn!(username, error = %e, "Failed to create user");
                users.failed.push((username.to_string(), e.to_string()));
            }
        }
    }
    info!(
        created = users.resolved.len(),
        failed = users.failed.len(),
        "Provisioned users"
    );
    users
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlakyProvisioner;

    #[async_trait]
    impl UserProvisioner for FlakyProvisioner {
        async fn create_user(&self, username: &str) -> Result<UserId> {
            if username.starts_with("bad") {
                Err(ClientError::Simulated(username.to_string()))
            } else {
                Ok(UserId::from(format!("id-{}", username)))
            }
        }
    }

    #[test]
    fn test_request_body() {
        let json = serde_json::to_value(CreateUserRequest::for_username("LuckyDuckling91")).unwrap();
        assert_eq!(json["username"], "LuckyDuckling91");
        assert_eq!(json["displayName"], "LuckyDuckling91");
        assert_eq!(json["email"], "LuckyDuckling91@example.com");
        assert_eq!(json["isAdmin"], false);
    }

    #[tokio::test]
    async fn test_provision_keeps_order_and_isolates_failures() {
        let users = provision_users(&FlakyProvisioner, &["alice", "bad-bob", "carol"]).await;

        let names: Vec<_> = users.resolved.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["alice", "carol"]);
        assert_eq!(users.ids()[1].as_str(), "id-carol");
        assert_eq!(users.failed.len(), 1);
        assert_eq!(users.failed[0].0, "bad-bob");
    }

    #[tokio::test]
    async fn test_provision_empty() {
        let users = provision_users(&FlakyProvisioner, &[]).await;
        assert!(users.resolved.is_empty());
        assert!(users.failed.is_empty());
    }
}
