//! Website monitoring routes — bearer-authenticated pass-through.
//!
//! Each handler requires a live session, forwards the call to the backend
//! with the session's access token, and mirrors the backend's status and
//! body back to the browser unchanged.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use crate::routes::auth::AuthSession;
use crate::services::backend::{BackendError, BackendReply};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VerifyBody {
    url: String,
}

pub(crate) fn reply_response(reply: BackendReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(reply.body)).into_response()
}

fn backend_error_response(err: &BackendError) -> Response {
    tracing::error!(error = %err, "backend call failed");
    (
        StatusCode::BAD_GATEWAY,
        Json(serde_json::json!({ "error": "backend unreachable" })),
    )
        .into_response()
}

/// `POST /api/websites/verify` — check a candidate URL is reachable.
pub async fn verify(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(body): Json<VerifyBody>,
) -> Response {
    match state.backend.verify_website(&auth.session.access_token, &body.url).await {
        Ok(reply) => reply_response(reply),
        Err(err) => backend_error_response(&err),
    }
}

/// `POST /api/websites` — register a website for monitoring.
pub async fn register(
    State(state): State<AppState>,
    auth: AuthSession,
    Json(body): Json<serde_json::Value>,
) -> Response {
    match state.backend.register_website(&auth.session.access_token, &body).await {
        Ok(reply) => reply_response(reply),
        Err(err) => backend_error_response(&err),
    }
}

/// `POST /api/websites/{id}/check` — trigger an immediate check.
pub async fn check(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(website_id): Path<String>,
) -> Response {
    match state.backend.trigger_check(&auth.session.access_token, &website_id).await {
        Ok(reply) => reply_response(reply),
        Err(err) => backend_error_response(&err),
    }
}

/// `GET /api/websites/user` — list the caller's monitored websites.
pub async fn list_for_user(State(state): State<AppState>, auth: AuthSession) -> Response {
    match state.backend.list_websites(&auth.session.access_token).await {
        Ok(reply) => reply_response(reply),
        Err(err) => backend_error_response(&err),
    }
}

/// `POST /api/websites/{id}/discover-routes` — trigger route discovery.
pub async fn discover_routes(
    State(state): State<AppState>,
    auth: AuthSession,
    Path(website_id): Path<String>,
) -> Response {
    match state.backend.discover_routes(&auth.session.access_token, &website_id).await {
        Ok(reply) => reply_response(reply),
        Err(err) => backend_error_response(&err),
    }
}

#[cfg(test)]
#[path = "websites_test.rs"]
mod tests;
