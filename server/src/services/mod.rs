//! Clients for the two external collaborators plus the session accessor.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` speaks the auth provider's wire protocol, `backend` is the
//! bearer-authenticated pass-through to the monitoring API, and `session`
//! owns the cookie that binds the two to a browser.

pub mod backend;
pub mod provider;
pub mod session;
