use super::*;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { logged_in: false, email: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { logged_in: false, email: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_logged_in() {
    let state = AuthState { logged_in: true, email: Some("a@b.c".to_owned()), loading: false };
    assert!(!should_redirect_unauth(&state));
}
