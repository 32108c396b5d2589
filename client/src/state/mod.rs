//! Client-local state shared through Leptos context.
//!
//! DESIGN
//! ======
//! `auth` is a read-only projection of the provider session owned by the
//! session synchronizer; `notices` holds transient toasts. Components read
//! both via `expect_context`, never by querying the provider themselves.

pub mod auth;
pub mod notices;
