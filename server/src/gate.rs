//! Edge access gate — session-based redirects before any page renders.
//!
//! ARCHITECTURE
//! ============
//! One middleware layer in front of the SSR router. Each request is
//! classified against a static path list; public paths skip session work
//! entirely, so the gate's cost tracks the protected surface rather than
//! total traffic. The decision itself is a pure function of classification
//! and session presence, kept separate from the middleware for testing.
//!
//! TRADE-OFFS
//! ==========
//! Protected paths match by prefix (`/dashboard/websites` is gated), while
//! auth-only paths match exactly. Session-resolution failures degrade to
//! "no session" — a broken auth provider must never take the site down.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::routes::auth::cookie_secure;
use crate::services::session;
use crate::state::AppState;

/// Paths only meaningful to an unauthenticated visitor. Exact match.
pub const AUTH_ONLY_PATHS: &[&str] = &["/login", "/signup"];

/// Path prefixes requiring an active session.
pub const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/profile"];

/// Access class of a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// No session constraint; the gate is a no-op.
    Public,
    /// Login/signup — pointless with a live session.
    AuthOnly,
    /// Requires a live session.
    Protected,
}

/// What the gate does with a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateAction {
    PassThrough,
    ToLogin,
    ToDashboard,
}

/// Classify a request path against the configured lists.
#[must_use]
pub fn classify(path: &str) -> RouteClass {
    if AUTH_ONLY_PATHS.contains(&path) {
        return RouteClass::AuthOnly;
    }
    let protected = PROTECTED_PREFIXES.iter().any(|prefix| {
        path == *prefix || (path.starts_with(prefix) && path.as_bytes().get(prefix.len()) == Some(&b'/'))
    });
    if protected {
        return RouteClass::Protected;
    }
    RouteClass::Public
}

/// The redirect decision table. Pure and idempotent.
#[must_use]
pub fn decide(class: RouteClass, has_session: bool) -> GateAction {
    match (class, has_session) {
        (RouteClass::AuthOnly, true) => GateAction::ToDashboard,
        (RouteClass::Protected, false) => GateAction::ToLogin,
        _ => GateAction::PassThrough,
    }
}

/// Middleware enforcing the decision table at the edge.
///
/// Resolves the session once per gated request (refreshing an expired access
/// token when possible) and attaches any cookie rewrite to whichever response
/// goes out — redirect or pass-through. The request itself is never mutated.
pub async fn access_gate(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let class = classify(req.uri().path());
    if matches!(class, RouteClass::Public) {
        return next.run(req).await;
    }

    let jar = CookieJar::from_headers(req.headers());
    let secure = cookie_secure();
    let resolved = session::resolve_session(&state.provider, &jar, secure).await;

    let response = match decide(class, resolved.session.is_some()) {
        GateAction::PassThrough => next.run(req).await,
        GateAction::ToLogin => Redirect::temporary("/login").into_response(),
        GateAction::ToDashboard => Redirect::temporary("/dashboard").into_response(),
    };

    match resolved.jar {
        Some(delta) => (delta, response).into_response(),
        None => response,
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
