use super::*;

fn site(status: Option<&str>) -> Website {
    Website {
        id: "w-1".to_owned(),
        url: "https://example.com".to_owned(),
        name: None,
        status: status.map(str::to_owned),
        uptime_percent: None,
        last_checked_at: None,
    }
}

// =============================================================================
// Website helpers
// =============================================================================

#[test]
fn status_label_defaults_to_pending() {
    assert_eq!(site(None).status_label(), "pending");
    assert_eq!(site(Some("down")).status_label(), "down");
}

#[test]
fn is_up_is_case_insensitive() {
    assert_eq!(site(Some("UP")).is_up(), Some(true));
    assert_eq!(site(Some("up")).is_up(), Some(true));
    assert_eq!(site(Some("down")).is_up(), Some(false));
    assert_eq!(site(None).is_up(), None);
}

#[test]
fn display_name_falls_back_to_url() {
    let mut website = site(None);
    assert_eq!(website.display_name(), "https://example.com");
    website.name = Some("  ".to_owned());
    assert_eq!(website.display_name(), "https://example.com");
    website.name = Some("Prod".to_owned());
    assert_eq!(website.display_name(), "Prod");
}

#[test]
fn website_parses_minimal_backend_shape() {
    let website: Website =
        serde_json::from_str(r#"{"id": "w-9", "url": "https://a.example"}"#).expect("parse");
    assert_eq!(website.id, "w-9");
    assert!(website.status.is_none());
}

// =============================================================================
// websites_from_reply
// =============================================================================

#[test]
fn reply_bare_array() {
    let value = serde_json::json!([
        { "id": "w-1", "url": "https://a.example" },
        { "id": "w-2", "url": "https://b.example", "status": "up" }
    ]);
    let websites = websites_from_reply(&value);
    assert_eq!(websites.len(), 2);
    assert_eq!(websites[1].status.as_deref(), Some("up"));
}

#[test]
fn reply_enveloped_array() {
    let value = serde_json::json!({ "websites": [ { "id": "w-1", "url": "https://a.example" } ] });
    assert_eq!(websites_from_reply(&value).len(), 1);
}

#[test]
fn reply_skips_malformed_entries() {
    let value = serde_json::json!([
        { "id": "w-1", "url": "https://a.example" },
        { "oops": true }
    ]);
    assert_eq!(websites_from_reply(&value).len(), 1);
}

#[test]
fn reply_unexpected_shapes_are_empty() {
    assert!(websites_from_reply(&serde_json::json!(null)).is_empty());
    assert!(websites_from_reply(&serde_json::json!({ "error": "boom" })).is_empty());
    assert!(websites_from_reply(&serde_json::json!("nope")).is_empty());
}
