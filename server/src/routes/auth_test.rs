use super::*;
use axum::extract::FromRequestParts;
use sessions::SessionUser;

// =============================================================================
// env_bool — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive_and_trimmed() {
    let key = "__TEST_EB_CI_77__";
    unsafe { std::env::set_var(key, "  TRUE  ") };
    assert_eq!(env_bool(key), Some(true));
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_EB_INVALID_9823__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_42__"), None);
}

// =============================================================================
// cookie_secure — SITE_URL is a shared global, so only the inference logic is
// tested directly.
// =============================================================================

#[test]
fn cookie_secure_https_inference_logic() {
    assert!("https://upwatch.example.com".starts_with("https://"));
    assert!(!"http://localhost:3000".starts_with("https://"));
}

// =============================================================================
// provider_error_to_status
// =============================================================================

#[test]
fn api_errors_keep_provider_status() {
    let err = ProviderError::Api(401, "bad credentials".to_owned());
    assert_eq!(provider_error_to_status(&err), StatusCode::UNAUTHORIZED);

    let err = ProviderError::Api(429, "rate limited".to_owned());
    assert_eq!(provider_error_to_status(&err), StatusCode::TOO_MANY_REQUESTS);
}

#[test]
fn invalid_provider_status_maps_to_bad_gateway() {
    let err = ProviderError::Api(42, "nonsense".to_owned());
    assert_eq!(provider_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

#[test]
fn transport_errors_map_to_bad_gateway() {
    let err = ProviderError::Http("connection refused".to_owned());
    assert_eq!(provider_error_to_status(&err), StatusCode::BAD_GATEWAY);
    let err = ProviderError::Decode("truncated".to_owned());
    assert_eq!(provider_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

// =============================================================================
// AuthSession extractor
// =============================================================================

fn parts_with_cookie(value: Option<&str>) -> axum::http::request::Parts {
    let mut builder = axum::http::Request::builder().uri("/api/websites/user");
    if let Some(value) = value {
        builder = builder.header("cookie", value);
    }
    let (parts, ()) = builder.body(()).expect("request").into_parts();
    parts
}

fn live_session() -> Session {
    Session {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_at: unix_now() + 3_600,
        user: SessionUser { id: "u-1".to_owned(), email: "a@example.com".to_owned() },
    }
}

#[tokio::test]
async fn extractor_accepts_live_session() {
    let session = live_session();
    let cookie = session_cookie(&session, false);
    let header = format!("{}={}", cookie.name(), cookie.value());
    let mut parts = parts_with_cookie(Some(&header));

    let auth = AuthSession::from_request_parts(&mut parts, &())
        .await
        .expect("live session should extract");
    assert_eq!(auth.session.user.email, "a@example.com");
}

#[tokio::test]
async fn extractor_rejects_missing_cookie() {
    let mut parts = parts_with_cookie(None);
    let err = AuthSession::from_request_parts(&mut parts, &())
        .await
        .expect_err("no cookie");
    assert_eq!(err, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn extractor_rejects_expired_session() {
    let mut session = live_session();
    session.expires_at = 0;
    let cookie = session_cookie(&session, false);
    let header = format!("{}={}", cookie.name(), cookie.value());
    let mut parts = parts_with_cookie(Some(&header));

    let err = AuthSession::from_request_parts(&mut parts, &())
        .await
        .expect_err("expired");
    assert_eq!(err, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn extractor_rejects_garbage_cookie() {
    let mut parts = parts_with_cookie(Some("uw_session=garbage"));
    let err = AuthSession::from_request_parts(&mut parts, &())
        .await
        .expect_err("garbage");
    assert_eq!(err, StatusCode::UNAUTHORIZED);
}
