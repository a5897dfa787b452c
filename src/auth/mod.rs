//! # Authorizers
//!
//! Bearer-token authorizers for the Azure management plane and the Synapse
//! workspace data plane.
//!
//! Credential acquisition and refresh are the caller's concern: the provider
//! initialization layer decides how tokens are obtained (managed identity,
//! workload identity, CLI login) and hands this crate trait objects that can
//! produce a token on demand. Synapse availability is modeled as a sum type
//! rather than a nullable authorizer, so a missing data-plane credential
//! cannot be forgotten at a call site.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use zeroize::Zeroizing;

/// Authorization error
#[derive(Debug, Error)]
pub enum AuthError {
    /// The underlying credential source could not produce a token
    #[error("token acquisition failed: {0}")]
    TokenAcquisition(String),
}

/// A bearer token together with its expiry.
///
/// The secret is zeroed on drop and never appears in `Debug` output.
#[derive(Clone)]
pub struct AccessToken {
    secret: Zeroizing<String>,
    expires_on: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(secret: impl Into<String>, expires_on: DateTime<Utc>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
            expires_on,
        }
    }

    /// The raw bearer token value
    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expires_on(&self) -> DateTime<Utc> {
        self.expires_on
    }

    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_on
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .field("expires_on", &self.expires_on)
            .finish()
    }
}

/// Produces bearer tokens for outgoing requests.
///
/// Implementations are held as `Arc<dyn Authorizer>` and shared across all
/// clients built from the same options.
#[async_trait]
pub trait Authorizer: Send + Sync + fmt::Debug {
    /// Return a token valid for the authorizer's configured audience
    async fn token(&self) -> Result<AccessToken, AuthError>;
}

/// Authorizer that returns a fixed, pre-fetched token.
///
/// Used when the surrounding tooling has already obtained a token (e.g. via
/// the Azure CLI) and in tests, where it plays the role the mock credential
/// plays for the real SDKs.
#[derive(Clone)]
pub struct StaticTokenAuthorizer {
    token: AccessToken,
}

impl StaticTokenAuthorizer {
    pub fn new(secret: impl Into<String>, expires_on: DateTime<Utc>) -> Self {
        Self {
            token: AccessToken::new(secret, expires_on),
        }
    }
}

impl fmt::Debug for StaticTokenAuthorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenAuthorizer")
            .field("token", &self.token)
            .finish()
    }
}

#[async_trait]
impl Authorizer for StaticTokenAuthorizer {
    async fn token(&self) -> Result<AccessToken, AuthError> {
        Ok(self.token.clone())
    }
}

/// Synapse data-plane authorization capability.
///
/// Sovereign clouds without the Synapse service have no data-plane
/// credential at all; that state is `Unsupported` and every workspace-scoped
/// client factory rejects it up front.
#[derive(Debug, Clone)]
pub enum SynapseAuth {
    /// The configured cloud environment does not offer Synapse
    Unsupported,
    /// Synapse is available and this authorizer covers its data plane
    Available(Arc<dyn Authorizer>),
}

impl SynapseAuth {
    pub fn is_supported(&self) -> bool {
        matches!(self, SynapseAuth::Available(_))
    }

    pub fn authorizer(&self) -> Option<&Arc<dyn Authorizer>> {
        match self {
            SynapseAuth::Available(authorizer) => Some(authorizer),
            SynapseAuth::Unsupported => None,
        }
    }
}
