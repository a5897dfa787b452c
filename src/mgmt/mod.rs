//! # Management-Plane Clients
//!
//! Typed clients for the Microsoft.Synapse ARM resource categories. Each
//! client owns a public `client: RawClient` that the registry passes through
//! `ClientOptions::configure_client` during construction; the typed wrapper
//! only knows its base URI, the subscription, and its resource paths.

pub mod firewall_rules;
pub mod integration_runtimes;
pub mod models;
pub mod pools;
pub mod private_link_hubs;
pub mod workspaces;

// Re-export for convenience
pub use firewall_rules::IpFirewallRulesClient;
pub use integration_runtimes::{IntegrationRuntimeAuthKeysClient, IntegrationRuntimesClient};
pub use pools::{BigDataPoolsClient, SqlPoolTransparentDataEncryptionsClient, SqlPoolsClient};
pub use private_link_hubs::PrivateLinkHubsClient;
pub use workspaces::{
    WorkspaceAadAdminsClient, WorkspaceManagedIdentitySqlControlSettingsClient, WorkspacesClient,
};

/// ARM api-version used by every management-plane operation
pub const API_VERSION: &str = "2021-03-01";
