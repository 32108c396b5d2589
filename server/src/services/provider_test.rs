use super::*;

// =============================================================================
// ProviderConfig — uses unique env var names to avoid races with parallel tests.
// =============================================================================

// AUTH_URL / AUTH_API_KEY are shared globals; a single test owns them so
// parallel tests cannot race on set/remove.
#[test]
fn config_from_env_roundtrip() {
    unsafe { std::env::set_var("AUTH_URL", "https://auth.example.com/auth/v1/") };
    unsafe { std::env::set_var("AUTH_API_KEY", "anon-key") };
    let config = ProviderConfig::from_env().expect("config");
    assert_eq!(config.base_url, "https://auth.example.com/auth/v1");
    assert_eq!(config.api_key, "anon-key");

    unsafe { std::env::remove_var("AUTH_URL") };
    unsafe { std::env::remove_var("AUTH_API_KEY") };
    assert!(ProviderConfig::from_env().is_none());
}

#[test]
fn endpoint_appends_path() {
    let config = ProviderConfig {
        base_url: "https://auth.example.com/auth/v1".to_owned(),
        api_key: "key".to_owned(),
    };
    assert_eq!(config.endpoint("/signup"), "https://auth.example.com/auth/v1/signup");
}

#[test]
fn token_url_includes_grant_type() {
    let config = ProviderConfig { base_url: "https://auth.example.com".to_owned(), api_key: "k".to_owned() };
    assert_eq!(
        config.token_url("refresh_token"),
        "https://auth.example.com/token?grant_type=refresh_token"
    );
    assert_eq!(config.token_url("password"), "https://auth.example.com/token?grant_type=password");
}

// =============================================================================
// session_from_grant
// =============================================================================

#[test]
fn session_from_grant_computes_absolute_expiry() {
    let grant = GrantResponse {
        access_token: "at".to_owned(),
        refresh_token: "rt".to_owned(),
        expires_in: 3_600,
        user: GrantUser { id: "u1".to_owned(), email: "a@b.c".to_owned() },
    };
    let session = session_from_grant(grant, 10_000);
    assert_eq!(session.expires_at, 13_600);
    assert_eq!(session.access_token, "at");
    assert_eq!(session.user.email, "a@b.c");
}

#[test]
fn grant_response_parses_provider_json() {
    let raw = r#"{
        "access_token": "at-1",
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": "rt-1",
        "user": {"id": "u-1", "email": "a@example.com", "role": "authenticated"}
    }"#;
    let grant: GrantResponse = serde_json::from_str(raw).expect("parse");
    assert_eq!(grant.access_token, "at-1");
    assert_eq!(grant.refresh_token, "rt-1");
    assert_eq!(grant.expires_in, 3600);
    assert_eq!(grant.user.id, "u-1");
}

// =============================================================================
// unix_now
// =============================================================================

#[test]
fn unix_now_is_past_2020() {
    // 2020-01-01T00:00:00Z
    assert!(unix_now() > 1_577_836_800);
}

// =============================================================================
// ProviderError display
// =============================================================================

#[test]
fn provider_error_display_includes_status() {
    let err = ProviderError::Api(401, "invalid credentials".to_owned());
    let text = err.to_string();
    assert!(text.contains("401"));
    assert!(text.contains("invalid credentials"));
}
