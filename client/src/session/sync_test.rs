use sessions::{AuthEvent, SessionUser};

use super::*;

fn user(email: &str) -> SessionUser {
    SessionUser { id: "u-1".to_owned(), email: email.to_owned() }
}

// =============================================================================
// apply_event
// =============================================================================

#[test]
fn signed_in_sets_identity_in_one_step() {
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedIn(user("a@b.c")));
    assert!(state.logged_in);
    assert_eq!(state.email.as_deref(), Some("a@b.c"));
    assert!(!state.loading);
}

#[test]
fn signed_out_clears_identity() {
    let mut state = AuthState { logged_in: true, email: Some("a@b.c".to_owned()), loading: false };
    apply_event(&mut state, &AuthEvent::SignedOut);
    assert!(!state.logged_in);
    assert!(state.email.is_none());
}

#[test]
fn token_refresh_replaces_identity() {
    let mut state = AuthState { logged_in: true, email: Some("old@b.c".to_owned()), loading: false };
    apply_event(&mut state, &AuthEvent::TokenRefreshed(user("new@b.c")));
    assert!(state.logged_in);
    assert_eq!(state.email.as_deref(), Some("new@b.c"));
}

#[test]
fn signed_out_while_logged_in_flips_without_reload() {
    // The cross-tab scenario: a live signed-in projection receives SignedOut.
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedIn(user("a@b.c")));
    apply_event(&mut state, &AuthEvent::SignedOut);
    assert_eq!(state, AuthState { logged_in: false, email: None, loading: false });
}

#[test]
fn last_event_wins() {
    let mut state = AuthState::default();
    apply_event(&mut state, &AuthEvent::SignedIn(user("first@b.c")));
    apply_event(&mut state, &AuthEvent::SignedIn(user("second@b.c")));
    assert_eq!(state.email.as_deref(), Some("second@b.c"));
}

// =============================================================================
// state_from_user
// =============================================================================

#[test]
fn fetch_with_session_is_logged_in() {
    let state = state_from_user(Some(&user("a@b.c")));
    assert!(state.logged_in);
    assert_eq!(state.email.as_deref(), Some("a@b.c"));
    assert!(!state.loading);
}

#[test]
fn fetch_without_session_is_anonymous_not_error() {
    let state = state_from_user(None);
    assert_eq!(state, AuthState { logged_in: false, email: None, loading: false });
}

// =============================================================================
// SyncGuard / apply_initial_fetch
// =============================================================================

#[test]
fn guard_starts_alive_and_releases_once() {
    let guard = SyncGuard::new();
    assert!(guard.is_alive());
    guard.release();
    assert!(!guard.is_alive());
    guard.release();
    assert!(!guard.is_alive());
}

#[test]
fn guard_clones_share_the_flag() {
    let guard = SyncGuard::new();
    let in_flight = guard.clone();
    guard.release();
    assert!(!in_flight.is_alive());
}

#[test]
fn live_fetch_result_is_applied() {
    let mut state = AuthState::default();
    let guard = SyncGuard::new();
    assert!(apply_initial_fetch(&mut state, &guard, Some(&user("a@b.c"))));
    assert!(state.logged_in);
}

#[test]
fn stale_fetch_result_is_discarded() {
    // Mount, unmount before the fetch resolves, then resolve: no state change.
    let mut state = AuthState::default();
    let guard = SyncGuard::new();
    guard.release();
    let before = state.clone();
    assert!(!apply_initial_fetch(&mut state, &guard, Some(&user("a@b.c"))));
    assert_eq!(state, before);
}

#[test]
fn event_after_fetch_overwrites_fetch_result() {
    // Wall-clock order wins regardless of which operation started first.
    let mut state = AuthState::default();
    let guard = SyncGuard::new();
    apply_initial_fetch(&mut state, &guard, None);
    apply_event(&mut state, &AuthEvent::SignedIn(user("late@b.c")));
    assert!(state.logged_in);
    assert_eq!(state.email.as_deref(), Some("late@b.c"));
}
