//! Synchronizer core: the reducer from provider events to `AuthState`, plus
//! the guard that discards async results landing after unmount.
//!
//! DESIGN
//! ======
//! Single-writer: only these functions mutate `AuthState`, always as a full
//! replacement. Events and the initial fetch race on the same event loop;
//! whichever resolves later simply overwrites (last wins), so there is no
//! intermediate inconsistent state to observe.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sessions::{AuthEvent, SessionUser};

use crate::state::auth::AuthState;

/// Apply one provider event. Every field is replaced; `loading` ends.
pub fn apply_event(state: &mut AuthState, event: &AuthEvent) {
    match event {
        AuthEvent::SignedIn(user) | AuthEvent::TokenRefreshed(user) => {
            state.logged_in = true;
            state.email = Some(user.email.clone());
        }
        AuthEvent::SignedOut => {
            state.logged_in = false;
            state.email = None;
        }
    }
    state.loading = false;
}

/// State for a resolved initial fetch. No session is not an error.
#[must_use]
pub fn state_from_user(user: Option<&SessionUser>) -> AuthState {
    AuthState {
        logged_in: user.is_some(),
        email: user.map(|u| u.email.clone()),
        loading: false,
    }
}

/// Alive flag scoped to one synchronizer mount.
///
/// Cloned into in-flight futures; `release` on unmount turns any late
/// resolution into a no-op instead of a stale-state write.
#[derive(Clone, Default)]
pub struct SyncGuard {
    released: Arc<AtomicBool>,
}

impl SyncGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn release(&self) {
        self.released.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        !self.released.load(Ordering::Relaxed)
    }
}

/// Apply the initial-fetch result unless the mount is gone.
/// Returns whether the state was written.
pub fn apply_initial_fetch(
    state: &mut AuthState,
    guard: &SyncGuard,
    user: Option<&SessionUser>,
) -> bool {
    if !guard.is_alive() {
        return false;
    }
    *state = state_from_user(user);
    true
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;
