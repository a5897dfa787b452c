//! # IP Firewall Rules
//!
//! Workspace-level IP firewall rule management.

use super::models::{IpFirewallRule, ListResult};
use super::API_VERSION;
use crate::client::raw::RawClient;
use crate::error::Error;

/// Client for workspace IP firewall rules
#[derive(Debug, Clone)]
pub struct IpFirewallRulesClient {
    /// Raw handle the registry configures with the shared policy
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl IpFirewallRulesClient {
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
        rule_name: &str,
    ) -> Result<IpFirewallRule, Error> {
        self.client
            .get(&self.rule_url(resource_group, workspace_name, rule_name))
            .await
    }

    pub async fn create_or_update(
        &self,
        resource_group: &str,
        workspace_name: &str,
        rule_name: &str,
        rule: &IpFirewallRule,
    ) -> Result<IpFirewallRule, Error> {
        self.client
            .put(&self.rule_url(resource_group, workspace_name, rule_name), rule)
            .await
    }

    pub async fn delete(
        &self,
        resource_group: &str,
        workspace_name: &str,
        rule_name: &str,
    ) -> Result<(), Error> {
        self.client
            .delete(&self.rule_url(resource_group, workspace_name, rule_name))
            .await
    }

    pub async fn list_by_workspace(
        &self,
        resource_group: &str,
        workspace_name: &str,
    ) -> Result<ListResult<IpFirewallRule>, Error> {
        let url = format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}/firewallRules?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, API_VERSION
        );
        self.client.get(&url).await
    }

    fn rule_url(&self, resource_group: &str, workspace_name: &str, rule_name: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}/firewallRules/{}?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, rule_name, API_VERSION
        )
    }
}
