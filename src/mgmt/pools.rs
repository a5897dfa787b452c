//! # Pools
//!
//! Apache Spark pools (the service still names them big data pools), SQL
//! pools, and SQL pool transparent data encryption.

use super::models::{
    BigDataPool, SqlPool, TransparentDataEncryption,
};
use super::API_VERSION;
use crate::client::raw::RawClient;
use crate::error::Error;

/// Client for Apache Spark pools
///
/// The service team hopes to rename big data pools to spark pools; registry
/// field naming already follows the newer name.
#[derive(Debug, Clone)]
pub struct BigDataPoolsClient {
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl BigDataPoolsClient {
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
        pool_name: &str,
    ) -> Result<BigDataPool, Error> {
        self.client
            .get(&self.pool_url(resource_group, workspace_name, pool_name))
            .await
    }

    pub async fn create_or_update(
        &self,
        resource_group: &str,
        workspace_name: &str,
        pool_name: &str,
        pool: &BigDataPool,
    ) -> Result<BigDataPool, Error> {
        self.client
            .put(&self.pool_url(resource_group, workspace_name, pool_name), pool)
            .await
    }

    pub async fn delete(
        &self,
        resource_group: &str,
        workspace_name: &str,
        pool_name: &str,
    ) -> Result<(), Error> {
        self.client
            .delete(&self.pool_url(resource_group, workspace_name, pool_name))
            .await
    }

    fn pool_url(&self, resource_group: &str, workspace_name: &str, pool_name: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}/bigDataPools/{}?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, pool_name, API_VERSION
        )
    }
}

/// Client for dedicated SQL pools
#[derive(Debug, Clone)]
pub struct SqlPoolsClient {
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl SqlPoolsClient {
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
        pool_name: &str,
    ) -> Result<SqlPool, Error> {
        self.client
            .get(&self.pool_url(resource_group, workspace_name, pool_name))
            .await
    }

    pub async fn create(
        &self,
        resource_group: &str,
        workspace_name: &str,
        pool_name: &str,
        pool: &SqlPool,
    ) -> Result<SqlPool, Error> {
        self.client
            .put(&self.pool_url(resource_group, workspace_name, pool_name), pool)
            .await
    }

    pub async fn delete(
        &self,
        resource_group: &str,
        workspace_name: &str,
        pool_name: &str,
    ) -> Result<(), Error> {
        self.client
            .delete(&self.pool_url(resource_group, workspace_name, pool_name))
            .await
    }

    fn pool_url(&self, resource_group: &str, workspace_name: &str, pool_name: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}/sqlPools/{}?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, pool_name, API_VERSION
        )
    }
}

/// Client for SQL pool transparent data encryption settings
#[derive(Debug, Clone)]
pub struct SqlPoolTransparentDataEncryptionsClient {
    pub client: RawClient,
    base_uri: String,
    subscription_id: String,
}

impl SqlPoolTransparentDataEncryptionsClient {
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
        pool_name: &str,
    ) -> Result<TransparentDataEncryption, Error> {
        self.client
            .get(&self.tde_url(resource_group, workspace_name, pool_name))
            .await
    }

    pub async fn create_or_update(
        &self,
        resource_group: &str,
        workspace_name: &str,
        pool_name: &str,
        settings: &TransparentDataEncryption,
    ) -> Result<TransparentDataEncryption, Error> {
        self.client
            .put(&self.tde_url(resource_group, workspace_name, pool_name), settings)
            .await
    }

    // The service exposes exactly one TDE setting per pool, addressed as
    // "current"
    fn tde_url(&self, resource_group: &str, workspace_name: &str, pool_name: &str) -> String {
        format!(
            "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Synapse/workspaces/{}/sqlPools/{}/transparentDataEncryption/current?api-version={}",
            self.base_uri, self.subscription_id, resource_group, workspace_name, pool_name, API_VERSION
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spark_pool_url_uses_big_data_pools_segment() {
        let client =
            BigDataPoolsClient::new_with_base_uri("https://management.azure.com", "sub-1");
        let url = client.pool_url("rg", "ws", "spark1");
        assert!(url.contains("/workspaces/ws/bigDataPools/spark1"));
    }

    #[test]
    fn test_tde_url_addresses_current_setting() {
        let client = SqlPoolTransparentDataEncryptionsClient::new_with_base_uri(
            "https://management.azure.com",
            "sub-1",
        );
        let url = client.tde_url("rg", "ws", "pool1");
        assert!(url.contains("/sqlPools/pool1/transparentDataEncryption/current"));
    }
}
