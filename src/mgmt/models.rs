//! # Management-Plane Models
//!
//! Request and response bodies for the Microsoft.Synapse ARM resources,
//! matching the JSON schema of api-version 2021-03-01. Only the fields the
//! surrounding tooling reads or writes are modeled; ARM tolerates absent
//! optional fields in both directions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Paged ARM list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub value: Vec<T>,
    #[serde(rename = "nextLink", skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

/// Workspace IP firewall rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpFirewallRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub properties: IpFirewallRuleProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpFirewallRuleProperties {
    pub start_ip_address: String,
    pub end_ip_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

/// Integration runtime attached to a workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationRuntime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub properties: IntegrationRuntimeProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationRuntimeProperties {
    /// `Managed` or `SelfHosted`
    #[serde(rename = "type")]
    pub runtime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Authentication keys for a self-hosted integration runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationRuntimeAuthKeys {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_key1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_key2: Option<String>,
}

/// Selects which auth key to regenerate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateKeyParameters {
    /// `authKey1` or `authKey2`
    pub key_name: String,
}

/// Private link hub
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateLinkHub {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<PrivateLinkHubProperties>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateLinkHubProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

/// Apache Spark pool (the service calls these big data pools)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BigDataPool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub location: String,
    pub properties: BigDataPoolProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BigDataPoolProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<u32>,
    pub node_size: String,
    pub node_size_family: String,
    pub spark_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scale: Option<AutoScaleProperties>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScaleProperties {
    pub enabled: bool,
    pub min_node_count: u32,
    pub max_node_count: u32,
}

/// Dedicated SQL pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlPool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    pub properties: SqlPoolProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sku {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlPoolProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Transparent data encryption setting of a SQL pool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransparentDataEncryption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub properties: TransparentDataEncryptionProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransparentDataEncryptionProperties {
    /// `Enabled` or `Disabled`
    pub status: String,
}

/// Synapse workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<ManagedIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    pub properties: WorkspaceProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedIdentity {
    #[serde(rename = "type")]
    pub identity_type: String,
    #[serde(rename = "principalId", skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(rename = "tenantId", skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_data_lake_storage: Option<DataLakeStorageAccountDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_resource_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_administrator_login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sql_administrator_login_password: Option<String>,
    /// Populated by the service, e.g. the `dev` endpoint the data-plane
    /// clients target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectivity_endpoints: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataLakeStorageAccountDetails {
    pub account_url: String,
    pub filesystem: String,
}

/// Azure AD administrator of a workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AadAdmin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub properties: AadAdminProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AadAdminProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub administrator_type: Option<String>,
    pub login: String,
    pub sid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// Managed-identity SQL control settings of a workspace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedIdentitySqlControlSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub properties: ManagedIdentitySqlControlSettingsProperties,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedIdentitySqlControlSettingsProperties {
    pub grant_sql_control_to_managed_identity: GrantSqlControlToManagedIdentity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantSqlControlToManagedIdentity {
    /// `Enabled` or `Disabled`
    pub desired_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_state: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firewall_rule_round_trips_camel_case() {
        let rule = IpFirewallRule {
            id: None,
            name: Some("AllowAll".to_string()),
            properties: IpFirewallRuleProperties {
                start_ip_address: "0.0.0.0".to_string(),
                end_ip_address: "255.255.255.255".to_string(),
                provisioning_state: None,
            },
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["properties"]["startIpAddress"], "0.0.0.0");
        assert!(json["properties"].get("provisioningState").is_none());
    }

    #[test]
    fn test_list_result_next_link_rename() {
        let json = r#"{"value":[],"nextLink":"https://example/page2"}"#;
        let page: ListResult<Workspace> = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_link.as_deref(), Some("https://example/page2"));
        assert!(page.value.is_empty());
    }

    #[test]
    fn test_auth_keys_field_names() {
        let json = r#"{"authKey1":"k1","authKey2":"k2"}"#;
        let keys: IntegrationRuntimeAuthKeys = serde_json::from_str(json).unwrap();
        assert_eq!(keys.auth_key1.as_deref(), Some("k1"));
        assert_eq!(keys.auth_key2.as_deref(), Some("k2"));
    }
}
