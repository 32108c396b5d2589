//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Mutated only by the session
//! synchronizer — everything else treats it as read-only.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Projection of session liveness and identity for UI rendering.
///
/// `loading` is true from mount until the initial session fetch resolves, so
/// guards can distinguish "not logged in" from "don't know yet".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub logged_in: bool,
    pub email: Option<String>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { logged_in: false, email: None, loading: true }
    }
}
