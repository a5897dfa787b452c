//! # Artifacts
//!
//! Workspace artifacts; only linked services are wired up here.

use serde::{Deserialize, Serialize};

use crate::client::raw::RawClient;
use crate::error::Error;

/// Data-plane api-version for artifacts operations
pub const API_VERSION: &str = "2021-06-01-preview";

/// Linked service attached to a workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedServiceResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Linked service payloads are polymorphic per connector type; kept as
    /// raw JSON and interpreted by the caller
    pub properties: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedServiceList {
    pub value: Vec<LinkedServiceResource>,
    #[serde(rename = "nextLink", skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

/// Client for workspace linked services
#[derive(Debug, Clone)]
pub struct LinkedServicesClient {
    pub client: RawClient,
    endpoint: String,
}

impl LinkedServicesClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: RawClient::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get(&self, linked_service_name: &str) -> Result<LinkedServiceResource, Error> {
        self.client.get(&self.service_url(linked_service_name)).await
    }

    pub async fn create_or_update(
        &self,
        linked_service_name: &str,
        linked_service: &LinkedServiceResource,
    ) -> Result<LinkedServiceResource, Error> {
        self.client
            .put(&self.service_url(linked_service_name), linked_service)
            .await
    }

    pub async fn delete(&self, linked_service_name: &str) -> Result<(), Error> {
        self.client.delete(&self.service_url(linked_service_name)).await
    }

    pub async fn list(&self) -> Result<LinkedServiceList, Error> {
        let url = format!("{}/linkedservices?api-version={}", self.endpoint, API_VERSION);
        self.client.get(&url).await
    }

    fn service_url(&self, linked_service_name: &str) -> String {
        format!(
            "{}/linkedservices/{}?api-version={}",
            self.endpoint, linked_service_name, API_VERSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_url_shape() {
        let client = LinkedServicesClient::new("https://ws1.dev.azuresynapse.net");
        assert_eq!(
            client.service_url("ls1"),
            "https://ws1.dev.azuresynapse.net/linkedservices/ls1?api-version=2021-06-01-preview"
        );
    }
}
