//! # Managed Virtual Network
//!
//! Managed private endpoints inside a workspace's managed virtual network.

use serde::{Deserialize, Serialize};

use crate::client::raw::RawClient;
use crate::error::Error;

/// Data-plane api-version for managed virtual network operations
pub const API_VERSION: &str = "2019-06-01-preview";

/// Managed private endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedPrivateEndpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub properties: ManagedPrivateEndpointProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedPrivateEndpointProperties {
    /// Resource id of the target the endpoint connects to
    pub private_link_resource_id: String,
    /// Sub-resource group of the target (e.g. `blob`, `sqlServer`)
    pub group_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<ConnectionState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedPrivateEndpointList {
    pub value: Vec<ManagedPrivateEndpoint>,
}

/// Client for managed private endpoints
#[derive(Debug, Clone)]
pub struct ManagedPrivateEndpointsClient {
    pub client: RawClient,
    endpoint: String,
}

impl ManagedPrivateEndpointsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: RawClient::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get(
        &self,
        virtual_network_name: &str,
        endpoint_name: &str,
    ) -> Result<ManagedPrivateEndpoint, Error> {
        self.client
            .get(&self.endpoint_url(virtual_network_name, endpoint_name))
            .await
    }

    pub async fn create(
        &self,
        virtual_network_name: &str,
        endpoint_name: &str,
        private_endpoint: &ManagedPrivateEndpoint,
    ) -> Result<ManagedPrivateEndpoint, Error> {
        self.client
            .put(
                &self.endpoint_url(virtual_network_name, endpoint_name),
                private_endpoint,
            )
            .await
    }

    pub async fn delete(
        &self,
        virtual_network_name: &str,
        endpoint_name: &str,
    ) -> Result<(), Error> {
        self.client
            .delete(&self.endpoint_url(virtual_network_name, endpoint_name))
            .await
    }

    pub async fn list(
        &self,
        virtual_network_name: &str,
    ) -> Result<ManagedPrivateEndpointList, Error> {
        let url = format!(
            "{}/managedVirtualNetworks/{}/managedPrivateEndpoints?api-version={}",
            self.endpoint, virtual_network_name, API_VERSION
        );
        self.client.get(&url).await
    }

    fn endpoint_url(&self, virtual_network_name: &str, endpoint_name: &str) -> String {
        format!(
            "{}/managedVirtualNetworks/{}/managedPrivateEndpoints/{}?api-version={}",
            self.endpoint, virtual_network_name, endpoint_name, API_VERSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_shape() {
        let client = ManagedPrivateEndpointsClient::new("https://ws1.dev.azuresynapse.net");
        assert_eq!(
            client.endpoint_url("default", "pe-storage"),
            "https://ws1.dev.azuresynapse.net/managedVirtualNetworks/default/managedPrivateEndpoints/pe-storage?api-version=2019-06-01-preview"
        );
    }
}
