//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON API with Leptos SSR page rendering under a
//! single Axum router, then wraps the whole thing in the edge access gate.
//! The gate classifies every path itself, so API and asset routes fall
//! through it untouched.

pub mod auth;
pub mod websites;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::gate;
use crate::state::AppState;

/// JSON API consumed by the browser app, plus the provider callback.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/auth/callback", get(auth::callback))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/reset", post(auth::reset))
        .route("/api/auth/session", get(auth::session))
        .route("/api/auth/me", get(auth::me))
        .route("/api/websites/verify", post(websites::verify))
        .route("/api/websites", post(websites::register))
        .route("/api/websites/user", get(websites::list_for_user))
        .route("/api/websites/{id}/check", post(websites::check))
        .route("/api/websites/{id}/discover-routes", post(websites::discover_routes))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Full application router: API + Leptos SSR pages + static assets, gated.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed leptos metadata/environment).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(middleware::from_fn_with_state(state, gate::access_gate)))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
