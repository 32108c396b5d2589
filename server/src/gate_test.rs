use super::*;

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_auth_only_exact() {
    assert_eq!(classify("/login"), RouteClass::AuthOnly);
    assert_eq!(classify("/signup"), RouteClass::AuthOnly);
}

#[test]
fn classify_auth_only_is_not_prefix_based() {
    assert_eq!(classify("/login/help"), RouteClass::Public);
    assert_eq!(classify("/signup2"), RouteClass::Public);
}

#[test]
fn classify_protected_roots() {
    assert_eq!(classify("/dashboard"), RouteClass::Protected);
    assert_eq!(classify("/profile"), RouteClass::Protected);
}

#[test]
fn classify_protected_by_prefix() {
    assert_eq!(classify("/dashboard/websites"), RouteClass::Protected);
    assert_eq!(classify("/dashboard/websites/w-1"), RouteClass::Protected);
    assert_eq!(classify("/profile/settings"), RouteClass::Protected);
}

#[test]
fn classify_prefix_requires_segment_boundary() {
    // `/dashboardish` is a different route, not a protected child.
    assert_eq!(classify("/dashboardish"), RouteClass::Public);
    assert_eq!(classify("/profiles"), RouteClass::Public);
}

#[test]
fn classify_public_paths() {
    assert_eq!(classify("/"), RouteClass::Public);
    assert_eq!(classify("/pricing"), RouteClass::Public);
    assert_eq!(classify("/terms"), RouteClass::Public);
    assert_eq!(classify("/api/websites/user"), RouteClass::Public);
    assert_eq!(classify("/pkg/upwatch.wasm"), RouteClass::Public);
}

// =============================================================================
// decide — the full decision table
// =============================================================================

#[test]
fn session_on_auth_only_redirects_to_dashboard() {
    assert_eq!(decide(RouteClass::AuthOnly, true), GateAction::ToDashboard);
}

#[test]
fn no_session_on_protected_redirects_to_login() {
    assert_eq!(decide(RouteClass::Protected, false), GateAction::ToLogin);
}

#[test]
fn session_on_protected_passes() {
    assert_eq!(decide(RouteClass::Protected, true), GateAction::PassThrough);
}

#[test]
fn no_session_on_auth_only_passes() {
    assert_eq!(decide(RouteClass::AuthOnly, false), GateAction::PassThrough);
}

#[test]
fn public_passes_regardless_of_session() {
    assert_eq!(decide(RouteClass::Public, true), GateAction::PassThrough);
    assert_eq!(decide(RouteClass::Public, false), GateAction::PassThrough);
}

#[test]
fn decide_is_idempotent() {
    for class in [RouteClass::Public, RouteClass::AuthOnly, RouteClass::Protected] {
        for has_session in [true, false] {
            assert_eq!(decide(class, has_session), decide(class, has_session));
        }
    }
}

// =============================================================================
// end-to-end decisions over raw paths
// =============================================================================

#[test]
fn authenticated_login_request_goes_to_dashboard() {
    assert_eq!(decide(classify("/login"), true), GateAction::ToDashboard);
}

#[test]
fn anonymous_dashboard_request_goes_to_login() {
    assert_eq!(decide(classify("/dashboard"), false), GateAction::ToLogin);
}

#[test]
fn anonymous_home_request_passes() {
    assert_eq!(decide(classify("/"), false), GateAction::PassThrough);
}
