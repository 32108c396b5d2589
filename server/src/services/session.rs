//! Per-request session accessor — cookie codec plus refresh-on-read.
//!
//! ARCHITECTURE
//! ============
//! The whole session lives in one HttpOnly cookie (base64url-encoded JSON).
//! Reading it is pure; [`resolve_session`] is the single suspension point
//! that may call the provider to rotate an expired access token, and it
//! reports any cookie rewrite back to the caller so the response can carry it.
//!
//! TRADE-OFFS
//! ==========
//! A provider-rejected refresh token clears the cookie (the session is dead);
//! a network failure keeps it, so one flaky refresh does not log the user out
//! everywhere.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::Engine as _;
use sessions::Session;
use time::Duration;

use crate::services::provider::{ProviderClient, ProviderError, unix_now};

pub const SESSION_COOKIE: &str = "uw_session";

/// Cookie lifetime. Outlives the access token by design — the refresh token
/// inside stays usable for this long.
const SESSION_COOKIE_DAYS: i64 = 30;

/// Encode a session for cookie transport.
#[must_use]
pub fn encode_session(session: &Session) -> String {
    let json = serde_json::to_string(session).unwrap_or_default();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json)
}

/// Decode a cookie value back into a session. `None` for anything malformed.
#[must_use]
pub fn decode_session(raw: &str) -> Option<Session> {
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(raw)
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Build the HttpOnly session cookie.
#[must_use]
pub fn session_cookie(session: &Session, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, encode_session(session)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(SESSION_COOKIE_DAYS))
        .build()
}

/// Build a removal cookie for the session.
#[must_use]
pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

/// Read the session straight off the request jar, expiry-unchecked.
#[must_use]
pub fn read_session(jar: &CookieJar) -> Option<Session> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| decode_session(cookie.value()))
}

/// Outcome of resolving the request's session: the live session (if any) and
/// cookie changes the response must carry.
pub struct ResolvedSession {
    pub session: Option<Session>,
    pub jar: Option<CookieJar>,
}

/// Resolve the current session for one request/response pair.
///
/// Valid and unexpired sessions pass through untouched. An expired session is
/// refreshed against the provider; success rewrites the cookie, a provider
/// rejection clears it. Resolution never fails the request — every error path
/// degrades to "no session".
pub async fn resolve_session(
    provider: &ProviderClient,
    jar: &CookieJar,
    secure: bool,
) -> ResolvedSession {
    let Some(raw) = jar.get(SESSION_COOKIE).map(|c| c.value().to_owned()) else {
        return ResolvedSession { session: None, jar: None };
    };

    let Some(session) = decode_session(&raw) else {
        tracing::warn!("malformed session cookie, clearing");
        return ResolvedSession {
            session: None,
            jar: Some(CookieJar::new().add(clear_session_cookie(secure))),
        };
    };

    if !session.is_expired(unix_now()) {
        return ResolvedSession { session: Some(session), jar: None };
    }

    match provider.refresh_grant(&session.refresh_token).await {
        Ok(fresh) => {
            let jar = CookieJar::new().add(session_cookie(&fresh, secure));
            ResolvedSession { session: Some(fresh), jar: Some(jar) }
        }
        Err(ProviderError::Api(status, body)) => {
            tracing::warn!(%status, %body, "refresh token rejected, clearing session");
            ResolvedSession {
                session: None,
                jar: Some(CookieJar::new().add(clear_session_cookie(secure))),
            }
        }
        Err(err) => {
            // Transient failure: unauthenticated for this request only.
            tracing::warn!(error = %err, "session refresh unavailable");
            ResolvedSession { session: None, jar: None }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
