//! Client session synchronizer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single owner of `AuthState`. On mount it registers an event listener
//! *before* spawning the initial session fetch (no event between fetch-start
//! and fetch-resolution can be missed), applies every provider event through
//! one reducer, and tears both down on unmount. All other modules either
//! read `AuthState` or hand events to [`announce`].

pub mod events;
pub mod sync;

#[cfg(feature = "hydrate")]
mod bridge;

use leptos::prelude::*;
use sessions::AuthEvent;

use crate::state::auth::AuthState;
use crate::state::notices::NoticeState;

pub use events::{AuthEvents, AuthSubscription};
pub use sync::{SyncGuard, apply_event, apply_initial_fetch, state_from_user};

/// Deliver a local session transition to this tab's listeners and mirror it
/// to other tabs.
pub fn announce(events: &AuthEvents, event: &AuthEvent) {
    events.emit(event);
    #[cfg(feature = "hydrate")]
    bridge::broadcast(event);
}

/// Mount the synchronizer under the current reactive owner.
///
/// Subscription first, then the fetch; unmount releases the subscription
/// and the guard that silences a late fetch.
pub fn install(auth: RwSignal<AuthState>, events: &AuthEvents) {
    let subscription = events.subscribe(move |event| {
        auth.update(|state| apply_event(state, event));
    });

    let guard = SyncGuard::new();

    #[cfg(feature = "hydrate")]
    {
        bridge::install(events.clone());
        let fetch_guard = guard.clone();
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_session_user().await;
            // Discarded silently if the component unmounted mid-flight.
            let _ = auth.try_update(|state| apply_initial_fetch(state, &fetch_guard, user.as_ref()));
        });
    }

    on_cleanup(move || {
        guard.release();
        subscription.unsubscribe();
    });
}

/// Apply a finished sign-out call: success announces the transition and
/// reports the navigation target; failure surfaces a notice and leaves the
/// session projection untouched.
pub fn apply_sign_out_result(
    events: &AuthEvents,
    notices: &mut NoticeState,
    result: Result<(), String>,
) -> Option<&'static str> {
    match result {
        Ok(()) => {
            announce(events, &AuthEvent::SignedOut);
            notices.push_success("Signed out. See you next time.");
            Some("/")
        }
        Err(err) => {
            notices.push_error(format!("Sign out failed: {err}"));
            None
        }
    }
}

/// Explicit user sign-out from a UI handler.
///
/// Navigation is a full page load so the edge gate re-evaluates the cleared
/// cookie on the way back in.
pub fn sign_out(events: AuthEvents, notices: RwSignal<NoticeState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::logout().await;
            let mut target = None;
            notices.update(|state| {
                target = apply_sign_out_result(&events, state, result);
            });
            if let Some(path) = target {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(path);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (events, notices);
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
