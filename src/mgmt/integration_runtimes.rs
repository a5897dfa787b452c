//! # Integration Runtimes
//!
//! Integration runtime management plus the separate auth-key client for
//! self-hosted runtimes, mirroring the service's split between resource CRUD
//! and key operations.

use super::models::{
    IntegrationRuntime, IntegrationRuntimeAuthKeys, RegenerateKeyParameters,
};
use super::API_VERSION;
use crate::client::raw::RawClient;
use crate::error::Error;

/// Client for workspace integration runtimes
#[derive(Debug, Clone)]
pub struct IntegrationRuntimesClient {
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl IntegrationRuntimesClient {
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
        workspace_name: &str,
        runtime_name: &str,
    ) -> Result<IntegrationRuntime, Error> {
        self.client
            .get(&self.runtime_url(resource_group, workspace_name, runtime_name))
            .await
    }

    pub async fn create_or_update(
        &self,
        resource_group: &str,
        workspace_name: &str,
        runtime_name: &str,
        runtime: &IntegrationRuntime,
    ) -> Result<IntegrationRuntime, Error> {
        self.client
            .put(
                &self.runtime_url(resource_group, workspace_name, runtime_name),
                runtime,
            )
            .await
    }

    pub async fn delete(
        &self,
        resource_group: &str,
        workspace_name: &str,
        runtime_name: &str,
    ) -> Result<(), Error> {
        self.client
            .delete(&self.runtime_url(resource_group, workspace_name, runtime_name))
            .await
    }

    fn runtime_url(
        &self,
        resource_group: &str,
        workspace_name: &str,
        runtime_name: &str,
    ) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}/integrationRuntimes/{}?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, runtime_name, API_VERSION
        )
    }
}

/// Client for self-hosted integration runtime auth keys
#[derive(Debug, Clone)]
pub struct IntegrationRuntimeAuthKeysClient {
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl IntegrationRuntimeAuthKeysClient {
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

    /// List both auth keys of a self-hosted runtime
    pub async fn list(
        &self,
        resource_group: &str,
        workspace_name: &str,
        runtime_name: &str,
    ) -> Result<IntegrationRuntimeAuthKeys, Error> {
        let url = self.action_url(resource_group, workspace_name, runtime_name, "listAuthKeys");
        self.client.post(&url, &serde_json::json!({})).await
    }

    /// Regenerate the named auth key and return the new key pair
    pub async fn regenerate(
        &self,
        resource_group: &str,
        workspace_name: &str,
        runtime_name: &str,
        parameters: &RegenerateKeyParameters,
    ) -> Result<IntegrationRuntimeAuthKeys, Error> {
        let url = self.action_url(
            resource_group,
            workspace_name,
            runtime_name,
            "regenerateAuthKey",
        );
        self.client.post(&url, parameters).await
    }

    fn action_url(
        &self,
        resource_group: &str,
        workspace_name: &str,
        runtime_name: &str,
        action: &str,
    ) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}/integrationRuntimes/{}/{}?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, runtime_name, action, API_VERSION
        )
    }
}
