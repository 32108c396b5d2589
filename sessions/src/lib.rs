//! Shared session model for the auth boundary between `server` and `client`.
//!
//! This crate owns the representation of a provider-issued session as it
//! crosses process boundaries: the server's HttpOnly session cookie, the
//! `/api/auth/session` response, and the browser-side change-notification
//! payload mirrored across tabs. Everything is JSON over serde so the same
//! types deserialize on both sides.

use serde::{Deserialize, Serialize};

/// Seconds before hard expiry at which a session is treated as expired, so a
/// refresh happens while the old access token is still accepted.
pub const REFRESH_SKEW_SECS: i64 = 30;

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The raw string could not be decoded as an [`AuthEvent`].
    #[error("failed to decode auth event: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The user identity attached to a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Provider-assigned user identifier.
    pub id: String,
    /// Email the user authenticated with.
    pub email: String,
}

/// A provider-issued credential bundle.
///
/// Owned by the auth provider; the application never persists it beyond the
/// HttpOnly cookie the server writes. `access_token` authorizes backend API
/// calls, `refresh_token` mints a replacement once `expires_at` passes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for backend API calls.
    pub access_token: String,
    /// Token exchanged for a fresh session when the access token expires.
    pub refresh_token: String,
    /// Unix seconds at which `access_token` stops being accepted.
    pub expires_at: i64,
    /// Identity the session was issued for.
    pub user: SessionUser,
}

impl Session {
    /// Whether the access token should be refreshed at `now` (unix seconds).
    ///
    /// Applies [`REFRESH_SKEW_SECS`] so callers refresh shortly before the
    /// provider would start rejecting the token.
    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        now >= self.expires_at - REFRESH_SKEW_SECS
    }
}

/// A session transition as observed by the browser.
///
/// Tokens stay inside the HttpOnly cookie, so the browser-visible payload is
/// the user identity plus liveness. Events are delivered in occurrence order;
/// consumers apply each one as a full replacement of their derived state
/// (last event wins).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "user", rename_all = "snake_case")]
pub enum AuthEvent {
    /// A session was established (login, signup confirmation, callback).
    SignedIn(SessionUser),
    /// The session ended (logout, expiry, cross-tab sign-out).
    SignedOut,
    /// The access token was rotated; identity is unchanged.
    TokenRefreshed(SessionUser),
}

impl AuthEvent {
    /// The user carried by this event, if any.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            Self::SignedIn(user) | Self::TokenRefreshed(user) => Some(user),
            Self::SignedOut => None,
        }
    }
}

/// Encode an event for the cross-tab storage bridge.
///
/// # Panics
///
/// Never panics in practice; the event types contain no non-string map keys
/// or other constructs `serde_json` can fail on.
#[must_use]
pub fn encode_event(event: &AuthEvent) -> String {
    serde_json::to_string(event).unwrap_or_default()
}

/// Decode an event received from the cross-tab storage bridge.
///
/// # Errors
///
/// Returns [`WireError::Decode`] for malformed or unrecognized payloads.
pub fn decode_event(raw: &str) -> Result<AuthEvent, WireError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
