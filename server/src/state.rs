//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the two external collaborators this app talks to: the auth provider
//! (session issuance and refresh) and the monitoring backend (everything
//! website-shaped). There is no database — all durable state lives with the
//! collaborators.

use crate::services::backend::BackendClient;
use crate::services::provider::ProviderClient;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — both clients are cheap handle clones.
#[derive(Clone)]
pub struct AppState {
    pub provider: ProviderClient,
    pub backend: BackendClient,
}

impl AppState {
    #[must_use]
    pub fn new(provider: ProviderClient, backend: BackendClient) -> Self {
        Self { provider, backend }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
