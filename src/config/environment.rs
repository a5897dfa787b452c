//! # Azure Cloud Environments
//!
//! Endpoint metadata for the Azure clouds this crate knows about. The
//! Synapse DNS suffix is absent in clouds where the service is not offered,
//! which is how `SynapseAuth::Unsupported` arises during provider setup.

/// Endpoint metadata for one Azure cloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureEnvironment {
    pub name: &'static str,
    /// Base URL of the Azure Resource Manager API
    pub resource_manager_endpoint: &'static str,
    /// DNS suffix for workspace data-plane endpoints
    /// (`https://{workspace}.{suffix}`); `None` where the cloud has no
    /// Synapse service
    pub synapse_endpoint_suffix: Option<&'static str>,
}

pub const PUBLIC: AzureEnvironment = AzureEnvironment {
    name: "public",
    resource_manager_endpoint: "https://management.azure.com",
    synapse_endpoint_suffix: Some("dev.azuresynapse.net"),
};

pub const CHINA: AzureEnvironment = AzureEnvironment {
    name: "china",
    resource_manager_endpoint: "https://management.chinacloudapi.cn",
    synapse_endpoint_suffix: Some("dev.azuresynapse.azure.cn"),
};

pub const US_GOVERNMENT: AzureEnvironment = AzureEnvironment {
    name: "usgovernment",
    resource_manager_endpoint: "https://management.usgovcloudapi.net",
    synapse_endpoint_suffix: None,
};

pub const GERMAN: AzureEnvironment = AzureEnvironment {
    name: "german",
    resource_manager_endpoint: "https://management.microsoftazure.de",
    synapse_endpoint_suffix: None,
};

impl AzureEnvironment {
    /// Look up an environment by its configuration name
    pub fn from_name(name: &str) -> Option<&'static AzureEnvironment> {
        match name {
            "public" => Some(&PUBLIC),
            "china" => Some(&CHINA),
            "usgovernment" => Some(&US_GOVERNMENT),
            "german" => Some(&GERMAN),
            _ => None,
        }
    }

    pub fn supports_synapse(&self) -> bool {
        self.synapse_endpoint_suffix.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_environments() {
        assert_eq!(AzureEnvironment::from_name("public"), Some(&PUBLIC));
        assert_eq!(AzureEnvironment::from_name("china"), Some(&CHINA));
        assert_eq!(
            AzureEnvironment::from_name("usgovernment"),
            Some(&US_GOVERNMENT)
        );
        assert_eq!(AzureEnvironment::from_name("german"), Some(&GERMAN));
    }

    #[test]
    fn test_from_name_unknown_environment() {
        assert_eq!(AzureEnvironment::from_name("stackhub"), None);
        assert_eq!(AzureEnvironment::from_name(""), None);
    }

    #[test]
    fn test_synapse_availability_per_cloud() {
        assert!(PUBLIC.supports_synapse());
        assert!(CHINA.supports_synapse());
        assert!(!US_GOVERNMENT.supports_synapse());
        assert!(!GERMAN.supports_synapse());
    }

    #[test]
    fn test_public_cloud_suffix() {
        assert_eq!(
            PUBLIC.synapse_endpoint_suffix,
            Some("dev.azuresynapse.net")
        );
    }
}
