//! # Workspaces
//!
//! Workspace CRUD plus the two singleton sub-resources the provider manages
//! alongside a workspace: the Azure AD administrator and the
//! managed-identity SQL control settings.

use super::models::{
    AadAdmin, ListResult, ManagedIdentitySqlControlSettings, Workspace,
};
use super::API_VERSION;
use crate::client::raw::RawClient;
use crate::error::Error;

/// Client for Synapse workspaces
#[derive(Debug, Clone)]
pub struct WorkspacesClient {
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl WorkspacesClient {
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
    ) -> Result<Workspace, Error> {
        self.client
            .get(&self.workspace_url(resource_group, workspace_name))
            .await
    }

    pub async fn create_or_update(
        &self,
        resource_group: &str,
        workspace_name: &str,
        workspace: &Workspace,
    ) -> Result<Workspace, Error> {
        self.client
            .put(&self.workspace_url(resource_group, workspace_name), workspace)
            .await
    }

    pub async fn delete(&self, resource_group: &str, workspace_name: &str) -> Result<(), Error> {
        self.client
            .delete(&self.workspace_url(resource_group, workspace_name))
            .await
    }

    pub async fn list_by_resource_group(
        &self,
        resource_group: &str,
    ) -> Result<ListResult<Workspace>, Error> {
        let url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces?api-version={}",
            self.base_uri, self.subscription_id, resource_group, API_VERSION
        );
        self.client.get(&url).await
    }

    fn workspace_url(&self, resource_group: &str, workspace_name: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, API_VERSION
        )
    }
}

/// Client for workspace Azure AD administrators
#[derive(Debug, Clone)]
pub struct WorkspaceAadAdminsClient {
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl WorkspaceAadAdminsClient {
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
    ) -> Result<AadAdmin, Error> {
        self.client
            .get(&self.admin_url(resource_group, workspace_name))
            .await
    }

    pub async fn create_or_update(
        &self,
        resource_group: &str,
        workspace_name: &str,
        admin: &AadAdmin,
    ) -> Result<AadAdmin, Error> {
        self.client
            .put(&self.admin_url(resource_group, workspace_name), admin)
            .await
    }

    pub async fn delete(&self, resource_group: &str, workspace_name: &str) -> Result<(), Error> {
        self.client
            .delete(&self.admin_url(resource_group, workspace_name))
            .await
    }

    // Singleton sub-resource, addressed as "activeDirectory"
    fn admin_url(&self, resource_group: &str, workspace_name: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}/administrators/activeDirectory?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, API_VERSION
        )
    }
}

/// Client for workspace managed-identity SQL control settings
#[derive(Debug, Clone)]
pub struct WorkspaceManagedIdentitySqlControlSettingsClient {
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl WorkspaceManagedIdentitySqlControlSettingsClient {
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
    ) -> Result<ManagedIdentitySqlControlSettings, Error> {
        self.client
            .get(&self.settings_url(resource_group, workspace_name))
            .await
    }

    pub async fn create_or_update(
        &self,
        resource_group: &str,
        workspace_name: &str,
        settings: &ManagedIdentitySqlControlSettings,
    ) -> Result<ManagedIdentitySqlControlSettings, Error> {
        self.client
            .put(&self.settings_url(resource_group, workspace_name), settings)
            .await
    }

    // Singleton sub-resource, addressed as "default"
    fn settings_url(&self, resource_group: &str, workspace_name: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}/managedIdentitySqlControlSettings/default?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, API_VERSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_url_shape() {
        let client = WorkspacesClient::new_with_base_uri("https://management.azure.com", "sub-1");
        assert_eq!(
            client.workspace_url("rg-1", "ws-1"),
            "https://management.azure.com/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.Synapse/workspaces/ws-1?api-version=2021-03-01"
        );
    }

    #[test]
    fn test_singleton_sub_resource_urls() {
        let admins =
            WorkspaceAadAdminsClient::new_with_base_uri("https://management.azure.com", "s");
        assert!(admins
            .admin_url("rg", "ws")
            .contains("/workspaces/ws/administrators/activeDirectory"));

        let settings = WorkspaceManagedIdentitySqlControlSettingsClient::new_with_base_uri(
            "https://management.azure.com",
            "s",
        );
        assert!(settings
            .settings_url("rg", "ws")
            .contains("/workspaces/ws/managedIdentitySqlControlSettings/default"));
    }
}
