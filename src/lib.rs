//! Synapse Clients Library
//!
//! Typed client registry for Azure Synapse: ten fixed management-plane
//! clients built once at provider setup, plus factory methods for
//! workspace-scoped data-plane clients at `https://{workspace}.{suffix}`.
//! Clouds without the Synapse service are modeled explicitly; the factory
//! methods reject them with a permanent capability error.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod mgmt;
pub mod synapse;

// Re-export the main surface for convenience
pub use auth::{AccessToken, AuthError, Authorizer, StaticTokenAuthorizer, SynapseAuth};
pub use client::raw::RawClient;
pub use client::Client;
pub use config::{AzureEnvironment, ClientOptions};
pub use error::Error;
