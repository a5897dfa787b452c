//! # Client Registry
//!
//! The fixed set of management-plane clients the provider holds for its
//! lifetime, plus factory methods for workspace-scoped data-plane clients.
//!
//! The registry is an explicit value: the provider setup phase builds it
//! once from `ClientOptions` and threads it through whichever components
//! need client access. Construction is infallible and performs no network
//! I/O. The factory methods allocate a fresh client per call; nothing is
//! memoized, connection reuse is the transport's concern.

pub mod raw;

use std::sync::Arc;

use tracing::debug;

use crate::auth::{Authorizer, SynapseAuth};
use crate::config::ClientOptions;
use crate::error::Error;
use crate::mgmt::{
    BigDataPoolsClient, IntegrationRuntimeAuthKeysClient, IntegrationRuntimesClient,
    IpFirewallRulesClient, PrivateLinkHubsClient, SqlPoolTransparentDataEncryptionsClient,
    SqlPoolsClient, WorkspaceAadAdminsClient,
    WorkspaceManagedIdentitySqlControlSettingsClient, WorkspacesClient,
};
use crate::synapse::{
    LinkedServicesClient, ManagedPrivateEndpointsClient, RoleAssignmentsClient,
    RoleDefinitionsClient,
};

/// All Synapse clients the provider needs, built once at setup time.
///
/// The fixed fields are assigned at construction and never mutated, so a
/// shared reference is safe for concurrent use.
#[derive(Debug)]
pub struct Client {
    pub firewall_rules_client: IpFirewallRulesClient,
    pub integration_runtimes_client: IntegrationRuntimesClient,
    pub integration_runtime_auth_keys_client: IntegrationRuntimeAuthKeysClient,
    pub private_link_hubs_client: PrivateLinkHubsClient,
    pub spark_pool_client: BigDataPoolsClient,
    pub sql_pool_client: SqlPoolsClient,
    pub sql_pool_transparent_data_encryption_client: SqlPoolTransparentDataEncryptionsClient,
    pub workspace_client: WorkspacesClient,
    pub workspace_aad_admins_client: WorkspaceAadAdminsClient,
    pub workspace_managed_identity_sql_control_settings_client:
        WorkspaceManagedIdentitySqlControlSettingsClient,

    synapse_auth: SynapseAuth,
}

impl Client {
    /// Build every management-plane client against the options' resource
    /// manager endpoint and subscription, applying the shared request policy
    /// to each.
    pub fn new(o: &ClientOptions) -> Self {
        let endpoint = o.resource_manager_endpoint.as_str();
        let subscription = o.subscription_id.as_str();
        debug!(
            "building Synapse client registry for subscription {} against {}",
            subscription, endpoint
        );

        let mut firewall_rules_client =
            IpFirewallRulesClient::new_with_base_uri(endpoint, subscription);
        o.configure_client(
            &mut firewall_rules_client.client,
            &o.resource_manager_authorizer,
        );

        let mut integration_runtimes_client =
            IntegrationRuntimesClient::new_with_base_uri(endpoint, subscription);
        o.configure_client(
            &mut integration_runtimes_client.client,
            &o.resource_manager_authorizer,
        );

        let mut integration_runtime_auth_keys_client =
            IntegrationRuntimeAuthKeysClient::new_with_base_uri(endpoint, subscription);
        o.configure_client(
            &mut integration_runtime_auth_keys_client.client,
            &o.resource_manager_authorizer,
        );

        let mut private_link_hubs_client =
            PrivateLinkHubsClient::new_with_base_uri(endpoint, subscription);
        o.configure_client(
            &mut private_link_hubs_client.client,
            &o.resource_manager_authorizer,
        );

        let mut spark_pool_client = BigDataPoolsClient::new_with_base_uri(endpoint, subscription);
        o.configure_client(&mut spark_pool_client.client, &o.resource_manager_authorizer);

        let mut sql_pool_client = SqlPoolsClient::new_with_base_uri(endpoint, subscription);
        o.configure_client(&mut sql_pool_client.client, &o.resource_manager_authorizer);

        let mut sql_pool_transparent_data_encryption_client =
            SqlPoolTransparentDataEncryptionsClient::new_with_base_uri(endpoint, subscription);
        o.configure_client(
            &mut sql_pool_transparent_data_encryption_client.client,
            &o.resource_manager_authorizer,
        );

        let mut workspace_client = WorkspacesClient::new_with_base_uri(endpoint, subscription);
        o.configure_client(&mut workspace_client.client, &o.resource_manager_authorizer);

        let mut workspace_aad_admins_client =
            WorkspaceAadAdminsClient::new_with_base_uri(endpoint, subscription);
        o.configure_client(
            &mut workspace_aad_admins_client.client,
            &o.resource_manager_authorizer,
        );

        let mut workspace_managed_identity_sql_control_settings_client =
            WorkspaceManagedIdentitySqlControlSettingsClient::new_with_base_uri(
                endpoint,
                subscription,
            );
        o.configure_client(
            &mut workspace_managed_identity_sql_control_settings_client.client,
            &o.resource_manager_authorizer,
        );

        Self {
            firewall_rules_client,
            integration_runtimes_client,
            integration_runtime_auth_keys_client,
            private_link_hubs_client,
            spark_pool_client,
            sql_pool_client,
            sql_pool_transparent_data_encryption_client,
            workspace_client,
            workspace_aad_admins_client,
            workspace_managed_identity_sql_control_settings_client,

            synapse_auth: o.synapse_auth.clone(),
        }
    }

    /// Whether workspace-scoped clients can be built in this environment
    pub fn synapse_supported(&self) -> bool {
        self.synapse_auth.is_supported()
    }

    /// Build a role definitions client for one workspace.
    ///
    /// Fails when the cloud environment has no Synapse service; that error
    /// is permanent and must not be retried.
    pub fn role_definitions_client(
        &self,
        workspace_name: &str,
        endpoint_suffix: &str,
    ) -> Result<RoleDefinitionsClient, Error> {
        let authorizer = self.synapse_authorizer()?;
        let endpoint = build_endpoint(workspace_name, endpoint_suffix);
        let mut client = RoleDefinitionsClient::new(endpoint);
        client.client.set_authorizer(Arc::clone(authorizer));
        Ok(client)
    }

    /// Build a role assignments client for one workspace
    pub fn role_assignments_client(
        &self,
        workspace_name: &str,
        endpoint_suffix: &str,
    ) -> Result<RoleAssignmentsClient, Error> {
        let authorizer = self.synapse_authorizer()?;
        let endpoint = build_endpoint(workspace_name, endpoint_suffix);
        let mut client = RoleAssignmentsClient::new(endpoint);
        client.client.set_authorizer(Arc::clone(authorizer));
        Ok(client)
    }

    /// Build a managed private endpoints client for one workspace
    pub fn managed_private_endpoints_client(
        &self,
        workspace_name: &str,
        endpoint_suffix: &str,
    ) -> Result<ManagedPrivateEndpointsClient, Error> {
        let authorizer = self.synapse_authorizer()?;
        let endpoint = build_endpoint(workspace_name, endpoint_suffix);
        let mut client = ManagedPrivateEndpointsClient::new(endpoint);
        client.client.set_authorizer(Arc::clone(authorizer));
        Ok(client)
    }

    /// Build a linked services client for one workspace
    pub fn linked_services_client(
        &self,
        workspace_name: &str,
        endpoint_suffix: &str,
    ) -> Result<LinkedServicesClient, Error> {
        let authorizer = self.synapse_authorizer()?;
        let endpoint = build_endpoint(workspace_name, endpoint_suffix);
        let mut client = LinkedServicesClient::new(endpoint);
        client.client.set_authorizer(Arc::clone(authorizer));
        Ok(client)
    }

    // Capability gate shared by the four factories; checked before any
    // endpoint computation
    fn synapse_authorizer(&self) -> Result<&Arc<dyn Authorizer>, Error> {
        match &self.synapse_auth {
            SynapseAuth::Available(authorizer) => Ok(authorizer),
            SynapseAuth::Unsupported => Err(Error::SynapseNotSupported),
        }
    }
}

/// Workspace data-plane endpoint: `https://{workspace}.{suffix}`.
///
/// Inputs are assumed pre-validated upstream; malformed values yield a
/// syntactically valid URL that fails at connection time.
fn build_endpoint(workspace_name: &str, endpoint_suffix: &str) -> String {
    format!("https://{workspace_name}.{endpoint_suffix}")
}
