//! # Client Registry Tests
//!
//! Verifies the construction contract of the registry and its
//! workspace-scoped factory methods:
//! - all fixed clients share the endpoint, subscription, and request policy
//! - the capability gate rejects factory calls in clouds without Synapse
//! - workspace endpoints are computed exactly and without validation
//! - factory methods never memoize
//! - dynamic clients receive the authorizer only, not the shared policy

use std::sync::Arc;

use chrono::{Duration, Utc};
use synapse_clients::{
    Authorizer, Client, ClientOptions, Error, StaticTokenAuthorizer, SynapseAuth,
};

const ENDPOINT: &str = "https://management.azure.com";
const SUBSCRIPTION: &str = "00000000-0000-0000-0000-000000000001";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn arm_authorizer() -> Arc<dyn Authorizer> {
    Arc::new(StaticTokenAuthorizer::new(
        "arm-token",
        Utc::now() + Duration::hours(1),
    ))
}

fn synapse_authorizer() -> Arc<dyn Authorizer> {
    Arc::new(StaticTokenAuthorizer::new(
        "synapse-token",
        Utc::now() + Duration::hours(1),
    ))
}

fn options_with_synapse() -> ClientOptions {
    init_tracing();
    ClientOptions::new(
        ENDPOINT,
        SUBSCRIPTION,
        arm_authorizer(),
        SynapseAuth::Available(synapse_authorizer()),
    )
}

fn options_without_synapse() -> ClientOptions {
    init_tracing();
    ClientOptions::new(
        ENDPOINT,
        SUBSCRIPTION,
        arm_authorizer(),
        SynapseAuth::Unsupported,
    )
}

#[test]
fn test_registry_builds_all_fixed_clients_against_shared_endpoint() {
    let registry = Client::new(&options_with_synapse());

    let endpoints = [
        registry.firewall_rules_client.base_uri(),
        registry.integration_runtimes_client.base_uri(),
        registry.integration_runtime_auth_keys_client.base_uri(),
        registry.private_link_hubs_client.base_uri(),
        registry.spark_pool_client.base_uri(),
        registry.sql_pool_client.base_uri(),
        registry.sql_pool_transparent_data_encryption_client.base_uri(),
        registry.workspace_client.base_uri(),
        registry.workspace_aad_admins_client.base_uri(),
        registry
            .workspace_managed_identity_sql_control_settings_client
            .base_uri(),
    ];
    for endpoint in endpoints {
        assert_eq!(endpoint, ENDPOINT);
    }

    let subscriptions = [
        registry.firewall_rules_client.subscription_id(),
        registry.integration_runtimes_client.subscription_id(),
        registry.integration_runtime_auth_keys_client.subscription_id(),
        registry.private_link_hubs_client.subscription_id(),
        registry.spark_pool_client.subscription_id(),
        registry.sql_pool_client.subscription_id(),
        registry
            .sql_pool_transparent_data_encryption_client
            .subscription_id(),
        registry.workspace_client.subscription_id(),
        registry.workspace_aad_admins_client.subscription_id(),
        registry
            .workspace_managed_identity_sql_control_settings_client
            .subscription_id(),
    ];
    for subscription in subscriptions {
        assert_eq!(subscription, SUBSCRIPTION);
    }
}

#[test]
fn test_fixed_clients_receive_shared_policy() {
    let options = options_with_synapse();
    let registry = Client::new(&options);

    let raw_handles = [
        &registry.firewall_rules_client.client,
        &registry.integration_runtimes_client.client,
        &registry.integration_runtime_auth_keys_client.client,
        &registry.private_link_hubs_client.client,
        &registry.spark_pool_client.client,
        &registry.sql_pool_client.client,
        &registry.sql_pool_transparent_data_encryption_client.client,
        &registry.workspace_client.client,
        &registry.workspace_aad_admins_client.client,
        &registry
            .workspace_managed_identity_sql_control_settings_client
            .client,
    ];
    for raw in raw_handles {
        assert!(raw.authorizer().is_some());
        assert_eq!(raw.user_agent(), Some(options.user_agent.as_str()));
        assert_eq!(raw.timeout(), Some(options.request_timeout));
    }
}

#[test]
fn test_factory_methods_fail_without_synapse_authorizer() {
    let registry = Client::new(&options_without_synapse());
    assert!(!registry.synapse_supported());

    let expected = "Synapse is not supported in this Azure Environment";

    let err = registry
        .role_definitions_client("ws1", "dev.azuresynapse.net")
        .unwrap_err();
    assert!(matches!(err, Error::SynapseNotSupported));
    assert_eq!(err.to_string(), expected);

    assert!(matches!(
        registry.role_assignments_client("ws1", "dev.azuresynapse.net"),
        Err(Error::SynapseNotSupported)
    ));
    assert!(matches!(
        registry.managed_private_endpoints_client("ws1", "dev.azuresynapse.net"),
        Err(Error::SynapseNotSupported)
    ));
    assert!(matches!(
        registry.linked_services_client("ws1", "dev.azuresynapse.net"),
        Err(Error::SynapseNotSupported)
    ));
}

#[test]
fn test_capability_gate_fires_before_endpoint_computation() {
    // Even degenerate inputs must not panic or compute anything; the gate
    // fires first
    let registry = Client::new(&options_without_synapse());

    assert!(matches!(
        registry.role_definitions_client("", ""),
        Err(Error::SynapseNotSupported)
    ));
    assert!(matches!(
        registry.role_assignments_client("", ""),
        Err(Error::SynapseNotSupported)
    ));
    assert!(matches!(
        registry.managed_private_endpoints_client("", ""),
        Err(Error::SynapseNotSupported)
    ));
    assert!(matches!(
        registry.linked_services_client("", ""),
        Err(Error::SynapseNotSupported)
    ));
}

#[test]
fn test_factory_endpoint_is_exact() {
    let registry = Client::new(&options_with_synapse());

    let role_definitions = registry
        .role_definitions_client("ws1", "dev.azuresynapse.net")
        .unwrap();
    assert_eq!(role_definitions.endpoint(), "https://ws1.dev.azuresynapse.net");

    let role_assignments = registry
        .role_assignments_client("ws1", "dev.azuresynapse.net")
        .unwrap();
    assert_eq!(role_assignments.endpoint(), "https://ws1.dev.azuresynapse.net");

    let managed_private_endpoints = registry
        .managed_private_endpoints_client("ws1", "dev.azuresynapse.net")
        .unwrap();
    assert_eq!(
        managed_private_endpoints.endpoint(),
        "https://ws1.dev.azuresynapse.net"
    );

    let linked_services = registry
        .linked_services_client("ws1", "dev.azuresynapse.net")
        .unwrap();
    assert_eq!(linked_services.endpoint(), "https://ws1.dev.azuresynapse.net");
}

#[test]
fn test_dynamic_clients_skip_shared_policy() {
    // The four workspace-scoped clients intentionally receive only the
    // authorizer; user-agent and timeout stay unset
    let registry = Client::new(&options_with_synapse());

    let client = registry
        .role_assignments_client("ws1", "dev.azuresynapse.net")
        .unwrap();
    assert!(client.client.authorizer().is_some());
    assert!(client.client.user_agent().is_none());
    assert!(client.client.timeout().is_none());

    let client = registry
        .linked_services_client("ws1", "dev.azuresynapse.net")
        .unwrap();
    assert!(client.client.authorizer().is_some());
    assert!(client.client.user_agent().is_none());
    assert!(client.client.timeout().is_none());
}

#[test]
fn test_factory_methods_do_not_memoize() {
    let registry = Client::new(&options_with_synapse());

    let first = registry
        .managed_private_endpoints_client("ws1", "dev.azuresynapse.net")
        .unwrap();
    let second = registry
        .managed_private_endpoints_client("ws1", "dev.azuresynapse.net")
        .unwrap();

    // Distinct instances with identical configuration
    assert_eq!(first.endpoint(), second.endpoint());
    assert!(first.client.authorizer().is_some());
    assert!(second.client.authorizer().is_some());
    assert!(!std::ptr::eq(&first, &second));
}

#[test]
fn test_fixed_fields_are_stable_across_reads() {
    let registry = Client::new(&options_with_synapse());

    let first_read = registry.workspace_client.base_uri().to_string();
    let second_read = registry.workspace_client.base_uri().to_string();
    assert_eq!(first_read, second_read);
    assert!(std::ptr::eq(
        registry.workspace_client.base_uri(),
        registry.workspace_client.base_uri()
    ));
}

#[test]
fn test_registry_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();

    let registry = Arc::new(Client::new(&options_with_synapse()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let client = registry
                    .role_definitions_client("ws1", "dev.azuresynapse.net")
                    .unwrap();
                assert_eq!(client.endpoint(), "https://ws1.dev.azuresynapse.net");
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
