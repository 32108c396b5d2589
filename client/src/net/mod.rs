//! Networking modules for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every REST call the browser makes (auth + websites), `types`
//! defines the DTOs the dashboard renders from backend replies.

pub mod api;
pub mod types;
