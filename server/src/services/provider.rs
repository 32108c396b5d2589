//! Auth provider HTTP client — token grants, signup, recovery, sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns every credential this app handles. This client is the
//! only module that speaks its wire protocol; the rest of the server sees
//! `sessions::Session` values and nothing else.

use serde::Deserialize;
use sessions::{Session, SessionUser};

/// Auth provider configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ProviderConfig {
    /// Load from `AUTH_URL` and `AUTH_API_KEY`.
    /// Returns `None` if either is missing (the server cannot run without them).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("AUTH_URL").ok()?;
        let api_key = std::env::var("AUTH_API_KEY").ok()?;
        Some(Self { base_url: base_url.trim_end_matches('/').to_owned(), api_key })
    }

    pub(crate) fn token_url(&self, grant_type: &str) -> String {
        format!("{}/token?grant_type={grant_type}", self.base_url)
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("auth provider unreachable: {0}")]
    Http(String),
    #[error("auth provider error {0}: {1}")]
    Api(u16, String),
    #[error("unexpected auth provider response: {0}")]
    Decode(String),
}

/// Token-grant response shape shared by all grant types.
#[derive(Debug, Deserialize)]
struct GrantResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    user: GrantUser,
}

#[derive(Debug, Deserialize)]
struct GrantUser {
    id: String,
    email: String,
}

pub(crate) fn session_from_grant(grant: GrantResponse, now: i64) -> Session {
    Session {
        access_token: grant.access_token,
        refresh_token: grant.refresh_token,
        expires_at: now + grant.expires_in,
        user: SessionUser { id: grant.user.id, email: grant.user.email },
    }
}

/// Current unix time in seconds. Server clock drives all expiry comparisons.
#[must_use]
pub fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// HTTP client for the auth provider. Cheap to clone.
#[derive(Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
    config: ProviderConfig,
}

impl ProviderClient {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    /// Build from `AUTH_URL` / `AUTH_API_KEY`. `None` if unconfigured.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        ProviderConfig::from_env().map(Self::new)
    }

    async fn grant(
        &self,
        grant_type: &str,
        body: serde_json::Value,
    ) -> Result<Session, ProviderError> {
        let resp = self
            .http
            .post(self.config.token_url(grant_type))
            .header("apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api(status, body));
        }

        let grant: GrantResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(session_from_grant(grant, unix_now()))
    }

    /// Exchange email + password for a session.
    pub async fn password_grant(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, ProviderError> {
        self.grant("password", serde_json::json!({ "email": email, "password": password }))
            .await
    }

    /// Exchange a refresh token for a fresh session.
    pub async fn refresh_grant(&self, refresh_token: &str) -> Result<Session, ProviderError> {
        self.grant("refresh_token", serde_json::json!({ "refresh_token": refresh_token }))
            .await
    }

    /// Exchange a callback authorization code for a session.
    pub async fn exchange_code(&self, code: &str) -> Result<Session, ProviderError> {
        self.grant("authorization_code", serde_json::json!({ "code": code }))
            .await
    }

    /// Register a new account. Returns a session when the provider issues one
    /// immediately, or `None` when email confirmation is pending.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Session>, ProviderError> {
        let resp = self
            .http
            .post(self.config.endpoint("/signup"))
            .header("apikey", &self.config.api_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api(status, body));
        }

        let value: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        if value.get("access_token").is_some() {
            let grant: GrantResponse = serde_json::from_value(value)
                .map_err(|e| ProviderError::Decode(e.to_string()))?;
            return Ok(Some(session_from_grant(grant, unix_now())));
        }
        Ok(None)
    }

    /// Trigger a password-recovery email.
    pub async fn recover(&self, email: &str) -> Result<(), ProviderError> {
        let resp = self
            .http
            .post(self.config.endpoint("/recover"))
            .header("apikey", &self.config.api_key)
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api(status, body));
        }
        Ok(())
    }

    /// Revoke the session behind `access_token`.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), ProviderError> {
        let resp = self
            .http
            .post(self.config.endpoint("/logout"))
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api(status, body));
        }
        Ok(())
    }

    /// Fetch the provider's authoritative record for the token's user.
    pub async fn fetch_user(&self, access_token: &str) -> Result<SessionUser, ProviderError> {
        let resp = self
            .http
            .get(self.config.endpoint("/user"))
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| ProviderError::Http(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Api(status, body));
        }

        let user: GrantUser = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;
        Ok(SessionUser { id: user.id, email: user.email })
    }
}

#[cfg(test)]
#[path = "provider_test.rs"]
mod tests;
