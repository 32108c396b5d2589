use super::*;

#[test]
fn default_state_is_anonymous_and_loading() {
    let state = AuthState::default();
    assert!(!state.logged_in);
    assert!(state.email.is_none());
    assert!(state.loading);
}

#[test]
fn states_compare_by_value() {
    let a = AuthState { logged_in: true, email: Some("a@b.c".to_owned()), loading: false };
    let b = a.clone();
    assert_eq!(a, b);
}
