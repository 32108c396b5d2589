//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! dashboard fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use sessions::SessionUser;

use super::types::Website;

#[cfg(any(test, feature = "hydrate"))]
fn website_check_endpoint(website_id: &str) -> String {
    format!("/api/websites/{website_id}/check")
}

#[cfg(any(test, feature = "hydrate"))]
fn website_discover_endpoint(website_id: &str) -> String {
    format!("/api/websites/{website_id}/discover-routes")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(context: &str, status: u16) -> String {
    format!("{context} failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn error_from_response(context: &str, resp: &gloo_net::http::Response) -> String {
    // Prefer the server's error message when it sent one.
    if let Ok(body) = resp.json::<serde_json::Value>().await {
        if let Some(message) = body.get("error").and_then(|v| v.as_str()) {
            return format!("{context} failed: {message}");
        }
    }
    request_failed_message(context, resp.status())
}

/// Fetch the current session's user from `GET /api/auth/session`.
/// Returns `None` when not authenticated or on the server — absence of a
/// session is not an error.
pub async fn fetch_session_user() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the provider's authoritative user record from `GET /api/auth/me`.
pub async fn fetch_account() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionUser>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a user-displayable message when the request or credentials fail.
pub async fn login(email: &str, password: &str) -> Result<SessionUser, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("login", &resp).await);
        }
        resp.json::<SessionUser>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Outcome of a signup attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The provider issued a session immediately.
    SignedIn(SessionUser),
    /// The provider wants the email address confirmed first.
    ConfirmationRequired,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct SignupResponse {
    confirmation_required: bool,
    #[serde(default)]
    user: Option<SessionUser>,
}

/// Register a new account via `POST /api/auth/signup`.
///
/// # Errors
///
/// Returns a user-displayable message when the request is rejected.
pub async fn signup(email: &str, password: &str) -> Result<SignupOutcome, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("signup", &resp).await);
        }
        let body: SignupResponse = resp.json().await.map_err(|e| e.to_string())?;
        match body.user {
            Some(user) if !body.confirmation_required => Ok(SignupOutcome::SignedIn(user)),
            _ => Ok(SignupOutcome::ConfirmationRequired),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Sign out via `POST /api/auth/logout`.
///
/// # Errors
///
/// Returns a user-displayable message when the provider rejects the
/// sign-out; callers must leave their auth state untouched in that case.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("sign out", &resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Request a password-recovery email via `POST /api/auth/reset`.
///
/// # Errors
///
/// Returns a user-displayable message when the request fails.
pub async fn request_password_reset(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/reset")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("password reset", &resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available on server".to_owned())
    }
}

/// List the caller's monitored websites via `GET /api/websites/user`.
///
/// # Errors
///
/// Returns a user-displayable message when the request fails.
pub async fn fetch_websites() -> Result<Vec<Website>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/websites/user")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("website list", &resp).await);
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        Ok(super::types::websites_from_reply(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Verify a candidate URL is reachable via `POST /api/websites/verify`.
///
/// # Errors
///
/// Returns a user-displayable message when verification fails.
pub async fn verify_website(url: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "url": url });
        let resp = gloo_net::http::Request::post("/api/websites/verify")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("verification", &resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        Err("not available on server".to_owned())
    }
}

/// Register a website for monitoring via `POST /api/websites`.
///
/// # Errors
///
/// Returns a user-displayable message when registration fails.
pub async fn register_website(url: &str, name: Option<&str>) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "url": url, "name": name });
        let resp = gloo_net::http::Request::post("/api/websites")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("registration", &resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, name);
        Err("not available on server".to_owned())
    }
}

/// Trigger an immediate check via `POST /api/websites/{id}/check`.
///
/// # Errors
///
/// Returns a user-displayable message when the trigger fails.
pub async fn trigger_check(website_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&website_check_endpoint(website_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("check", &resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = website_id;
        Err("not available on server".to_owned())
    }
}

/// Trigger route discovery via `POST /api/websites/{id}/discover-routes`.
///
/// # Errors
///
/// Returns a user-displayable message when the trigger fails.
pub async fn discover_routes(website_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&website_discover_endpoint(website_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_from_response("route discovery", &resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = website_id;
        Err("not available on server".to_owned())
    }
}
