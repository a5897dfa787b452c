//! # Client Options
//!
//! Options shared by every client the registry constructs: the resource
//! manager endpoint, the subscription, the authorizers, and the cross-cutting
//! request policy (telemetry user-agent, timeout) applied to fully configured
//! handles.
//!
//! All of this is normally assembled once by the provider initialization
//! routine; `from_env` offers the same assembly from environment variables
//! with sensible defaults.

mod environment;

pub use environment::AzureEnvironment;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::info;

use crate::auth::{Authorizer, StaticTokenAuthorizer, SynapseAuth};
use crate::client::raw::RawClient;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Shared construction options for the client registry.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the Azure Resource Manager API
    pub resource_manager_endpoint: String,
    pub subscription_id: String,
    /// Authorizer for management-plane requests
    pub resource_manager_authorizer: Arc<dyn Authorizer>,
    /// Synapse data-plane capability; `Unsupported` in clouds without the
    /// service
    pub synapse_auth: SynapseAuth,
    /// User-Agent attached to fully configured clients
    pub user_agent: String,
    /// Request timeout applied to fully configured clients
    pub request_timeout: Duration,
}

impl ClientOptions {
    pub fn new(
        resource_manager_endpoint: impl Into<String>,
        subscription_id: impl Into<String>,
        resource_manager_authorizer: Arc<dyn Authorizer>,
        synapse_auth: SynapseAuth,
    ) -> Self {
        Self {
            resource_manager_endpoint: resource_manager_endpoint.into(),
            subscription_id: subscription_id.into(),
            resource_manager_authorizer,
            synapse_auth,
            user_agent: default_user_agent(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }

    /// Attach the shared policy (authorizer, telemetry, timeout) to a raw
    /// handle. Every fixed management-plane client goes through this;
    /// workspace-scoped clients intentionally do not.
    pub fn configure_client(&self, client: &mut RawClient, authorizer: &Arc<dyn Authorizer>) {
        client.set_authorizer(Arc::clone(authorizer));
        client.set_user_agent(self.user_agent.clone());
        client.set_timeout(self.request_timeout);
    }

    /// Assemble options from the process environment.
    ///
    /// Reads `ARM_SUBSCRIPTION_ID` (required), `ARM_ENVIRONMENT` (defaults
    /// to `public`), `ARM_ENDPOINT` (overrides the environment's resource
    /// manager endpoint), `ARM_ACCESS_TOKEN` (required) and
    /// `SYNAPSE_ACCESS_TOKEN` (only honored in clouds that offer Synapse).
    pub fn from_env() -> Result<Self> {
        let subscription_id = std::env::var("ARM_SUBSCRIPTION_ID")
            .context("ARM_SUBSCRIPTION_ID must be set")?;

        let environment_name =
            std::env::var("ARM_ENVIRONMENT").unwrap_or_else(|_| "public".to_string());
        let environment = AzureEnvironment::from_name(&environment_name)
            .with_context(|| format!("unknown Azure environment {environment_name:?}"))?;
        info!("Using Azure environment: {}", environment.name);

        let resource_manager_endpoint = std::env::var("ARM_ENDPOINT")
            .unwrap_or_else(|_| environment.resource_manager_endpoint.to_string());

        // Token-based authorizers: refresh is out of scope here, the
        // surrounding tooling re-runs setup when tokens rotate
        let arm_token =
            std::env::var("ARM_ACCESS_TOKEN").context("ARM_ACCESS_TOKEN must be set")?;
        let expires_on = Utc::now() + chrono::Duration::hours(1);
        let resource_manager_authorizer: Arc<dyn Authorizer> =
            Arc::new(StaticTokenAuthorizer::new(arm_token, expires_on));

        let synapse_auth = if environment.supports_synapse() {
            match std::env::var("SYNAPSE_ACCESS_TOKEN") {
                Ok(token) => {
                    SynapseAuth::Available(Arc::new(StaticTokenAuthorizer::new(token, expires_on)))
                }
                // Fall back to the management-plane token; Synapse accepts
                // it for workspaces the caller can already manage
                Err(_) => SynapseAuth::Available(Arc::clone(&resource_manager_authorizer)),
            }
        } else {
            info!(
                "Synapse is not offered in the {} cloud, workspace-scoped clients will be unavailable",
                environment.name
            );
            SynapseAuth::Unsupported
        };

        let mut options = Self::new(
            resource_manager_endpoint,
            subscription_id,
            resource_manager_authorizer,
            synapse_auth,
        );
        options.request_timeout = Duration::from_secs(env_var_or_default(
            "ARM_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        ));
        Ok(options)
    }
}

fn default_user_agent() -> String {
    format!(
        "{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

/// Read environment variable or return default value
fn env_var_or_default<T: std::str::FromStr>(key: &str, default: T) -> T
where
    <T as std::str::FromStr>::Err: std::fmt::Debug,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn test_authorizer() -> Arc<dyn Authorizer> {
        Arc::new(StaticTokenAuthorizer::new(
            "test-token",
            Utc::now() + ChronoDuration::hours(1),
        ))
    }

    #[test]
    fn test_new_applies_default_policy() {
        let options = ClientOptions::new(
            "https://management.azure.com",
            "00000000-0000-0000-0000-000000000000",
            test_authorizer(),
            SynapseAuth::Unsupported,
        );
        assert!(options.user_agent.starts_with("synapse-clients/"));
        assert_eq!(options.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_configure_client_attaches_shared_policy() {
        let options = ClientOptions::new(
            "https://management.azure.com",
            "sub",
            test_authorizer(),
            SynapseAuth::Unsupported,
        );
        let mut raw = RawClient::new();
        assert!(raw.authorizer().is_none());

        options.configure_client(&mut raw, &options.resource_manager_authorizer);
        assert!(raw.authorizer().is_some());
        assert_eq!(raw.user_agent(), Some(options.user_agent.as_str()));
        assert_eq!(raw.timeout(), Some(options.request_timeout));
    }
}
