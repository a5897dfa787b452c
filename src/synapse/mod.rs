//! # Workspace Data-Plane Clients
//!
//! Clients for a single workspace's own API surface, reached at
//! `https://{workspace}.{suffix}` rather than through Azure Resource
//! Manager. These are built on demand by the registry's factory methods and
//! carry only the Synapse authorizer, not the shared management-plane
//! request policy.

pub mod access_control;
pub mod artifacts;
pub mod managed_virtual_network;

// Re-export for convenience
pub use access_control::{RoleAssignmentsClient, RoleDefinitionsClient};
pub use artifacts::LinkedServicesClient;
pub use managed_virtual_network::ManagedPrivateEndpointsClient;
