//! Monitoring backend REST client.
//!
//! Pure pass-through: every call attaches `Authorization: Bearer` from the
//! caller's session and forwards status + body unmodified. No retries and no
//! reinterpretation — the UI owns the meaning of backend replies.

use serde_json::Value;

/// HTTP client for the monitoring backend. Cheap to clone.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend unreachable: {0}")]
    Http(String),
}

/// Raw backend reply, handed to callers unchanged.
#[derive(Debug)]
pub struct BackendReply {
    pub status: u16,
    pub body: Value,
}

pub(crate) fn website_path(website_id: &str, suffix: &str) -> String {
    format!("/websites/{website_id}{suffix}")
}

impl BackendClient {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Load from `BACKEND_API_URL`. Returns `None` if missing.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        std::env::var("BACKEND_API_URL").ok().map(Self::new)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
        access_token: &str,
    ) -> Result<BackendReply, BackendError> {
        let resp = req
            .header("Authorization", format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| BackendError::Http(e.to_string()))?;

        let status = resp.status().as_u16();
        let body = resp.json::<Value>().await.unwrap_or(Value::Null);
        Ok(BackendReply { status, body })
    }

    /// `POST /websites/verify` — check a candidate URL is reachable.
    pub async fn verify_website(
        &self,
        access_token: &str,
        url: &str,
    ) -> Result<BackendReply, BackendError> {
        let req = self
            .http
            .post(self.url("/websites/verify"))
            .json(&serde_json::json!({ "url": url }));
        self.send(req, access_token).await
    }

    /// `POST /websites` — register a website for monitoring.
    pub async fn register_website(
        &self,
        access_token: &str,
        body: &Value,
    ) -> Result<BackendReply, BackendError> {
        let req = self.http.post(self.url("/websites")).json(body);
        self.send(req, access_token).await
    }

    /// `POST /websites/{id}/check` — trigger an immediate check.
    pub async fn trigger_check(
        &self,
        access_token: &str,
        website_id: &str,
    ) -> Result<BackendReply, BackendError> {
        let req = self.http.post(self.url(&website_path(website_id, "/check")));
        self.send(req, access_token).await
    }

    /// `GET /websites/user` — list the caller's monitored websites.
    pub async fn list_websites(&self, access_token: &str) -> Result<BackendReply, BackendError> {
        let req = self.http.get(self.url("/websites/user"));
        self.send(req, access_token).await
    }

    /// `POST /websites/{id}/discover-routes` — trigger route discovery.
    pub async fn discover_routes(
        &self,
        access_token: &str,
        website_id: &str,
    ) -> Result<BackendReply, BackendError> {
        let req = self
            .http
            .post(self.url(&website_path(website_id, "/discover-routes")));
        self.send(req, access_token).await
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
