//! Cross-tab bridge — mirrors auth events through `localStorage`.
//!
//! `storage` events only fire in *other* tabs, which is exactly the
//! semantics wanted here: the emitting tab already delivered the event to
//! its own hub. The listener is installed once at app root and lives for
//! the tab; the scoped resource that gets released on unmount is the hub
//! subscription, not this bridge.

use sessions::{AuthEvent, decode_event, encode_event};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use super::events::AuthEvents;

const STORAGE_KEY: &str = "upwatch:auth-event";

/// Write an event where other tabs' storage listeners see it. Storage events
/// fire only when the value changes, so a timestamp prefix keeps repeated
/// identical events distinct.
pub fn broadcast(event: &AuthEvent) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
        return;
    };
    let payload = format!("{}\u{1f}{}", js_sys::Date::now(), encode_event(event));
    let _ = storage.set_item(STORAGE_KEY, &payload);
}

fn parse_payload(raw: &str) -> Option<AuthEvent> {
    let (_, encoded) = raw.split_once('\u{1f}')?;
    decode_event(encoded).ok()
}

/// Attach a storage listener feeding foreign-tab events into the local hub.
/// The closure is leaked on purpose: one per tab, for the tab's lifetime.
pub fn install(events: AuthEvents) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web_sys::StorageEvent| {
        if ev.key().as_deref() != Some(STORAGE_KEY) {
            return;
        }
        let Some(raw) = ev.new_value() else {
            return;
        };
        if let Some(event) = parse_payload(&raw) {
            events.emit(&event);
        }
    }) as Box<dyn FnMut(web_sys::StorageEvent)>);

    if window
        .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}
