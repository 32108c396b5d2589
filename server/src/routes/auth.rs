//! Auth routes — login, signup, password reset, callback, session endpoint.
//!
//! Every handler is a thin adapter between HTTP and the provider client:
//! success paths write or clear the session cookie, failure paths map
//! provider errors onto status codes. No credential ever outlives the
//! request except inside the HttpOnly cookie.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use sessions::Session;

use crate::services::provider::{ProviderError, unix_now};
use crate::services::session::{self as session_svc, clear_session_cookie, session_cookie};
use crate::state::AppState;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("SITE_URL")
        .map(|url| url.starts_with("https://"))
        .unwrap_or(false)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Live session extracted from the request cookie.
/// Use as a handler parameter to require authentication; API callers get a
/// 401 status, never a redirect.
#[derive(Debug)]
pub struct AuthSession {
    pub session: Session,
}

impl<S> axum::extract::FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let session = session_svc::read_session(&jar).ok_or(StatusCode::UNAUTHORIZED)?;
        if session.is_expired(unix_now()) {
            return Err(StatusCode::UNAUTHORIZED);
        }
        Ok(Self { session })
    }
}

pub(crate) fn provider_error_to_status(err: &ProviderError) -> StatusCode {
    match err {
        ProviderError::Api(status, _) => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        ProviderError::Http(_) | ProviderError::Decode(_) => StatusCode::BAD_GATEWAY,
    }
}

fn provider_error_response(err: &ProviderError, context: &'static str) -> Response {
    tracing::error!(error = %err, context, "auth provider call failed");
    let status = provider_error_to_status(err);
    (status, Json(serde_json::json!({ "error": context }))).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct CredentialsBody {
    email: String,
    password: String,
}

#[derive(Deserialize)]
pub struct EmailBody {
    email: String,
}

/// `POST /api/auth/login` — password grant, set session cookie, return user.
pub async fn login(State(state): State<AppState>, Json(body): Json<CredentialsBody>) -> Response {
    match state.provider.password_grant(&body.email, &body.password).await {
        Ok(session) => {
            let jar = CookieJar::new().add(session_cookie(&session, cookie_secure()));
            (jar, Json(session.user)).into_response()
        }
        Err(err) => provider_error_response(&err, "login failed"),
    }
}

/// `POST /api/auth/signup` — register; sets a cookie when the provider issues
/// a session immediately, otherwise reports pending email confirmation.
pub async fn signup(State(state): State<AppState>, Json(body): Json<CredentialsBody>) -> Response {
    match state.provider.sign_up(&body.email, &body.password).await {
        Ok(Some(session)) => {
            let jar = CookieJar::new().add(session_cookie(&session, cookie_secure()));
            (jar, Json(serde_json::json!({ "user": session.user, "confirmation_required": false })))
                .into_response()
        }
        Ok(None) => {
            Json(serde_json::json!({ "confirmation_required": true })).into_response()
        }
        Err(err) => provider_error_response(&err, "signup failed"),
    }
}

/// `POST /api/auth/logout` — revoke at the provider, then clear the cookie.
///
/// The cookie is cleared only after the provider confirms; a failed sign-out
/// leaves the session intact so the client can surface the error.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let Some(session) = session_svc::read_session(&jar) else {
        // Nothing to revoke; clearing is idempotent.
        let out = CookieJar::new().add(clear_session_cookie(cookie_secure()));
        return (out, StatusCode::NO_CONTENT).into_response();
    };

    match state.provider.sign_out(&session.access_token).await {
        Ok(()) => {
            let out = CookieJar::new().add(clear_session_cookie(cookie_secure()));
            (out, StatusCode::NO_CONTENT).into_response()
        }
        Err(err) => provider_error_response(&err, "sign out failed"),
    }
}

/// `POST /api/auth/reset` — trigger a password-recovery email.
pub async fn reset(State(state): State<AppState>, Json(body): Json<EmailBody>) -> Response {
    match state.provider.recover(&body.email).await {
        Ok(()) => Json(serde_json::json!({ "ok": true })).into_response(),
        Err(err) => provider_error_response(&err, "password reset failed"),
    }
}

/// `GET /api/auth/session` — the synchronizer's initial fetch.
///
/// Resolves (and if needed refreshes) the cookie session; an absent session
/// is a plain 401, not an error condition.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Response {
    let resolved = session_svc::resolve_session(&state.provider, &jar, cookie_secure()).await;
    let response = match resolved.session {
        Some(session) => Json(session.user).into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    };
    match resolved.jar {
        Some(delta) => (delta, response).into_response(),
        None => response,
    }
}

/// `GET /api/auth/me` — the provider's authoritative user record.
pub async fn me(State(state): State<AppState>, auth: AuthSession) -> Response {
    match state.provider.fetch_user(&auth.session.access_token).await {
        Ok(user) => Json(user).into_response(),
        Err(err) => provider_error_response(&err, "user lookup failed"),
    }
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: Option<String>,
}

/// `GET /auth/callback` — exchange the provider's code, set cookie, land on
/// the dashboard. Failures bounce back to login with an error marker.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackQuery>,
) -> Response {
    let Some(code) = params.code.as_deref() else {
        return Redirect::temporary("/login?error=missing_code").into_response();
    };

    match state.provider.exchange_code(code).await {
        Ok(session) => {
            let jar = CookieJar::new().add(session_cookie(&session, cookie_secure()));
            (jar, Redirect::temporary("/dashboard")).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "auth code exchange failed");
            Redirect::temporary("/login?error=callback_failed").into_response()
        }
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
