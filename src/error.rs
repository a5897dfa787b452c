//! # Error Types
//!
//! One typed error for the whole crate. The capability-gate variant is the
//! only error client construction can produce; everything else arises from
//! using a constructed handle.

use thiserror::Error;

use crate::auth::AuthError;

#[derive(Debug, Error)]
pub enum Error {
    /// Capability gate: the configured cloud environment has no Synapse
    /// service. Raised before any endpoint computation; never retryable.
    #[error("Synapse is not supported in this Azure Environment")]
    SynapseNotSupported,

    /// A request was attempted on a handle that never received an authorizer
    #[error("client has no authorizer attached")]
    NoAuthorizer,

    #[error("authorization failed: {0}")]
    Auth(#[from] AuthError),

    /// Transport-level failure (connection, DNS, timeout)
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Non-success response from the service
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode API response: {0}")]
    Deserialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_gate_message() {
        assert_eq!(
            Error::SynapseNotSupported.to_string(),
            "Synapse is not supported in this Azure Environment"
        );
    }

    #[test]
    fn test_api_error_message_includes_status() {
        let err = Error::Api {
            status: 404,
            message: "workspace not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed with status 404: workspace not found"
        );
    }
}
