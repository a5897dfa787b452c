//! # Raw Client Handle
//!
//! The shared HTTP handle every typed client owns. Construction is pure (no
//! I/O); an authorizer must be attached before the handle can send anything.
//! `ClientOptions::configure_client` additionally attaches the telemetry
//! user-agent and request timeout; workspace-scoped clients receive only the
//! authorizer.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::Authorizer;
use crate::error::Error;

/// Raw HTTP handle shared by every typed client.
#[derive(Debug, Clone, Default)]
pub struct RawClient {
    http: reqwest::Client,
    authorizer: Option<Arc<dyn Authorizer>>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl RawClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_authorizer(&mut self, authorizer: Arc<dyn Authorizer>) {
        self.authorizer = Some(authorizer);
    }

    pub fn authorizer(&self) -> Option<&Arc<dyn Authorizer>> {
        self.authorizer.as_ref()
    }

    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = Some(user_agent.into());
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let body = self.execute(Method::GET, url, None::<&()>).await?;
        decode(&body)
    }

    pub(crate) async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, Error> {
        let body = self.execute(Method::PUT, url, Some(body)).await?;
        decode(&body)
    }

    pub(crate) async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, Error> {
        let body = self.execute(Method::POST, url, Some(body)).await?;
        decode(&body)
    }

    pub(crate) async fn delete(&self, url: &str) -> Result<(), Error> {
        self.execute(Method::DELETE, url, None::<&()>).await?;
        Ok(())
    }

    /// Send one authorized request and return the response body, mapping
    /// non-success statuses to `Error::Api`.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<String, Error> {
        let authorizer = self.authorizer.as_ref().ok_or(Error::NoAuthorizer)?;
        let token = authorizer.token().await?;

        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .bearer_auth(token.secret());
        if let Some(user_agent) = &self.user_agent {
            request = request.header(USER_AGENT, user_agent);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(body)
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(Error::Deserialize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticTokenAuthorizer;
    use chrono::{Duration as ChronoDuration, Utc};

    #[test]
    fn test_new_handle_is_unconfigured() {
        let raw = RawClient::new();
        assert!(raw.authorizer().is_none());
        assert!(raw.user_agent().is_none());
        assert!(raw.timeout().is_none());
    }

    #[test]
    fn test_attaching_authorizer_only_leaves_policy_unset() {
        let mut raw = RawClient::new();
        raw.set_authorizer(Arc::new(StaticTokenAuthorizer::new(
            "t",
            Utc::now() + ChronoDuration::hours(1),
        )));
        assert!(raw.authorizer().is_some());
        assert!(raw.user_agent().is_none());
        assert!(raw.timeout().is_none());
    }

    #[tokio::test]
    async fn test_send_without_authorizer_fails() {
        let raw = RawClient::new();
        let result: Result<serde_json::Value, Error> =
            raw.get("https://example.invalid/resource").await;
        assert!(matches!(result, Err(Error::NoAuthorizer)));
    }
}
