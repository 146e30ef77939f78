//! Client for the tracker the seeder populates.
//!
//! This crate provides:
//! - The GraphQL documents of every remote operation
//! - A `GraphClient` transport trait with an HTTP implementation
//! - `SeedApi`, typed wrappers returning tracker IDs
//! - Account provisioning over the REST login endpoint
//! - `DryRunClient`, an in-process stand-in for the tracker

pub mod api;
pub mod config;
pub mod dry_run;
pub mod error;
pub mod operations;
pub mod transport;
pub mod users;

pub use api::{CreatedComponent, CreatedInterfaceSpecification, NewIssue, SeedApi};
pub use config::{EndpointConfig, DEFAULT_GRAPHQL_URL, DEFAULT_USER_URL};
pub use dry_run::{DryRunClient, RecordedCall};
pub use error::{ClientError, Result};
pub use operations::Operation;
pub use transport::{GraphClient, HttpGraphClient};
pub use users::{provision_users, ProvisionedUsers, RestUserProvisioner, UserProvisioner};
