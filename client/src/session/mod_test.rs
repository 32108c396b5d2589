use std::sync::{Arc, Mutex};

use sessions::AuthEvent;

use super::*;
use crate::state::notices::NoticeKind;

// =============================================================================
// apply_sign_out_result
// =============================================================================

#[test]
fn successful_sign_out_announces_and_navigates_home() {
    let events = AuthEvents::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = events.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    let mut notices = NoticeState::default();
    let target = apply_sign_out_result(&events, &mut notices, Ok(()));

    assert_eq!(target, Some("/"));
    assert_eq!(*seen.lock().unwrap(), vec![AuthEvent::SignedOut]);
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].kind, NoticeKind::Success);
}

#[test]
fn failed_sign_out_keeps_session_and_reports_error() {
    let events = AuthEvents::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = events.subscribe(move |event: &AuthEvent| sink.lock().unwrap().push(event.clone()));

    let mut notices = NoticeState::default();
    let target = apply_sign_out_result(&events, &mut notices, Err("backend 502".to_owned()));

    // No event means no AuthState change anywhere.
    assert_eq!(target, None);
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(notices.items.len(), 1);
    assert_eq!(notices.items[0].kind, NoticeKind::Error);
    assert!(notices.items[0].text.contains("backend 502"));
}

// =============================================================================
// announce (native build: local delivery only)
// =============================================================================

#[test]
fn announce_reaches_every_listener() {
    let events = AuthEvents::new();
    let count = Arc::new(Mutex::new(0_usize));
    let a = count.clone();
    let b = count.clone();
    let _sub_a = events.subscribe(move |_| *a.lock().unwrap() += 1);
    let _sub_b = events.subscribe(move |_| *b.lock().unwrap() += 1);

    announce(&events, &AuthEvent::SignedOut);
    assert_eq!(*count.lock().unwrap(), 2);
}

// =============================================================================
// full mount-lifecycle simulation against the hub
// =============================================================================

#[test]
fn mount_applies_events_until_unsubscribed() {
    let events = AuthEvents::new();
    let state = Arc::new(Mutex::new(crate::state::auth::AuthState::default()));

    // Mount: subscribe the reducer, as install() does.
    let reducer_state = state.clone();
    let sub = events
        .subscribe(move |event| apply_event(&mut reducer_state.lock().unwrap(), event));

    events.emit(&AuthEvent::SignedIn(sessions::SessionUser {
        id: "u-1".to_owned(),
        email: "a@b.c".to_owned(),
    }));
    assert!(state.lock().unwrap().logged_in);

    // Unmount: later events no longer reach the dead component's state.
    sub.unsubscribe();
    events.emit(&AuthEvent::SignedOut);
    assert!(state.lock().unwrap().logged_in);
}
