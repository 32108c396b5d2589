//! Auth change-notification hub.
//!
//! ARCHITECTURE
//! ============
//! A subscription registry: the provider surface the rest of the client
//! sees. Listeners fire synchronously in registration order on every emit.
//! Subscriptions are scoped resources — `unsubscribe` (or drop) removes the
//! listener, so a remounting component can never accumulate duplicate
//! listeners. Everything is `Send + Sync` so handles can live inside view
//! callbacks and cleanup hooks on the SSR build.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use sessions::AuthEvent;

type Listener = Arc<dyn Fn(&AuthEvent) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

fn lock(inner: &Mutex<HubInner>) -> MutexGuard<'_, HubInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared hub handle. Cloning shares the same listener registry.
#[derive(Clone, Default)]
pub struct AuthEvents {
    inner: Arc<Mutex<HubInner>>,
}

impl AuthEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The returned handle is the only way to remove it.
    #[must_use]
    pub fn subscribe(&self, listener: impl Fn(&AuthEvent) + Send + Sync + 'static) -> AuthSubscription {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        AuthSubscription { hub: Arc::downgrade(&self.inner), id }
    }

    /// Deliver an event to every live listener, in registration order.
    ///
    /// The listener list is snapshotted before delivery, so a listener that
    /// unsubscribes (itself or another) mid-delivery stays safe; the removal
    /// takes effect from the next emit.
    pub fn emit(&self, event: &AuthEvent) {
        let listeners: Vec<Listener> = lock(&self.inner)
            .listeners
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }
}

/// Scoped subscription handle. Dropping it unsubscribes.
pub struct AuthSubscription {
    hub: Weak<Mutex<HubInner>>,
    id: u64,
}

impl AuthSubscription {
    /// Remove the listener. Safe to call more than once, and a no-op once
    /// the hub itself is gone.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.hub.upgrade() {
            lock(&inner).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;
