//! # Private Link Hubs
//!
//! Private link hub management; these are resource-group scoped rather than
//! workspace scoped.

use super::models::{ListResult, PrivateLinkHub};
use super::API_VERSION;
use crate::client::raw::RawClient;
use crate::error::Error;

/// Client for Synapse private link hubs
#[derive(Debug, Clone)]
pub struct PrivateLinkHubsClient {
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl PrivateLinkHubsClient {
    pub fn new_with_base_uri(
        base_uri: impl Into<String>,
        subscription_id: impl Into<String>,
    ) -> Self {
        Self {
            client: RawClient::new(),
            base_uri: base_uri.into().trim_end_matches('/').to_string(),
            subscription_id: subscription_id.into(),
        }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub async fn get(
        &self,
        resource_group: &str,
        hub_name: &str,
    ) -> Result<PrivateLinkHub, Error> {
        self.client.get(&self.hub_url(resource_group, hub_name)).await
    }

    pub async fn create_or_update(
        &self,
        resource_group: &str,
        hub_name: &str,
        hub: &PrivateLinkHub,
    ) -> Result<PrivateLinkHub, Error> {
        self.client
            .put(&self.hub_url(resource_group, hub_name), hub)
            .await
    }

    pub async fn delete(&self, resource_group: &str, hub_name: &str) -> Result<(), Error> {
        self.client.delete(&self.hub_url(resource_group, hub_name)).await
    }

    pub async fn list_by_resource_group(
        &self,
        resource_group: &str,
    ) -> Result<ListResult<PrivateLinkHub>, Error> {
        let url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/privateLinkHubs?api-version={}",
            self.base_uri, self.subscription_id, resource_group, API_VERSION
        );
        self.client.get(&url).await
    }

    fn hub_url(&self, resource_group: &str, hub_name: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/privateLinkHubs/{}?api-version={}",
            self.base_uri, self.subscription_id, resource_group, hub_name, API_VERSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hub_url_is_resource_group_scoped() {
        let client =
            PrivateLinkHubsClient::new_with_base_uri("https://management.azure.com", "sub-1");
        let url = client.hub_url("rg-1", "hub-1");
        assert!(url.contains("/resourceGroups/rg-1/providers/Microsoft.Synapse/privateLinkHubs/hub-1"));
        assert!(!url.contains("/workspaces/"));
    }
}
