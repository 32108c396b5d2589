use super::*;

// =============================================================================
// reply_response — backend status and body are mirrored, not reinterpreted
// =============================================================================

#[test]
fn reply_response_mirrors_success_status() {
    let reply = BackendReply { status: 201, body: serde_json::json!({ "id": "w-1" }) };
    let response = reply_response(reply);
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[test]
fn reply_response_mirrors_client_errors() {
    let reply = BackendReply { status: 422, body: serde_json::json!({ "error": "bad url" }) };
    let response = reply_response(reply);
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn reply_response_mirrors_server_errors() {
    let reply = BackendReply { status: 503, body: serde_json::Value::Null };
    let response = reply_response(reply);
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn reply_response_invalid_status_degrades_to_bad_gateway() {
    let reply = BackendReply { status: 42, body: serde_json::Value::Null };
    let response = reply_response(reply);
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn verify_body_parses_url_field() {
    let body: VerifyBody = serde_json::from_str(r#"{"url": "https://example.com"}"#).expect("parse");
    assert_eq!(body.url, "https://example.com");
}
