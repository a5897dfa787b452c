//! # Access Control
//!
//! Workspace role definitions and role assignments (Synapse RBAC, distinct
//! from ARM RBAC).

use serde::{Deserialize, Serialize};

use crate::client::raw::RawClient;
use crate::error::Error;

/// Data-plane api-version for access control operations
pub const API_VERSION: &str = "2020-08-01-preview";

/// Synapse workspace role definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_built_in: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDefinitionList {
    pub value: Vec<RoleDefinition>,
}

/// Synapse workspace role assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleAssignment {
    pub id: String,
    pub role_definition_id: String,
    pub principal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAssignmentList {
    pub value: Vec<RoleAssignment>,
}

/// Body for creating a role assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleAssignmentRequest {
    pub role_definition_id: String,
    pub principal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

/// Client for workspace role definitions
#[derive(Debug, Clone)]
pub struct RoleDefinitionsClient {
    pub client: RawClient,
    endpoint: String,
}

impl RoleDefinitionsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: RawClient::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get(&self, role_definition_id: &str) -> Result<RoleDefinition, Error> {
        let url = format!(
            "{}/roleDefinitions/{}?api-version={}",
            self.endpoint, role_definition_id, API_VERSION
        );
        self.client.get(&url).await
    }

    pub async fn list(&self) -> Result<RoleDefinitionList, Error> {
        let url = format!("{}/roleDefinitions?api-version={}", self.endpoint, API_VERSION);
        self.client.get(&url).await
    }
}

/// Client for workspace role assignments
#[derive(Debug, Clone)]
pub struct RoleAssignmentsClient {
    pub client: RawClient,
    endpoint: String,
}

impl RoleAssignmentsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: RawClient::new(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get(&self, role_assignment_id: &str) -> Result<RoleAssignment, Error> {
        self.client.get(&self.assignment_url(role_assignment_id)).await
    }

    pub async fn create(
        &self,
        role_assignment_id: &str,
        request: &CreateRoleAssignmentRequest,
    ) -> Result<RoleAssignment, Error> {
        self.client
            .put(&self.assignment_url(role_assignment_id), request)
            .await
    }

    pub async fn delete(&self, role_assignment_id: &str) -> Result<(), Error> {
        self.client.delete(&self.assignment_url(role_assignment_id)).await
    }

    pub async fn list(&self) -> Result<RoleAssignmentList, Error> {
        let url = format!("{}/roleAssignments?api-version={}", self.endpoint, API_VERSION);
        self.client.get(&url).await
    }

    fn assignment_url(&self, role_assignment_id: &str) -> String {
        format!(
            "{}/roleAssignments/{}?api-version={}",
            self.endpoint, role_assignment_id, API_VERSION
        )
    }
}
