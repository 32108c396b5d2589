//! DTOs for backend replies the dashboard renders.
//!
//! The backend's replies pass through the server unmodified, so these types
//! deserialize defensively: anything beyond `id` and `url` is optional.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A monitored website as returned by `GET /api/websites/user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Website {
    /// Backend-assigned identifier.
    pub id: String,
    /// Monitored URL.
    pub url: String,
    /// Display name, if the user set one.
    #[serde(default)]
    pub name: Option<String>,
    /// Last observed status (e.g. `"up"`, `"down"`), if checked yet.
    #[serde(default)]
    pub status: Option<String>,
    /// Rolling uptime percentage, if the backend has history.
    #[serde(default)]
    pub uptime_percent: Option<f64>,
    /// ISO 8601 timestamp of the most recent check.
    #[serde(default)]
    pub last_checked_at: Option<String>,
}

impl Website {
    /// Label shown on the status badge.
    #[must_use]
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or("pending")
    }

    /// Whether the last check saw the site up. `None` until first check.
    #[must_use]
    pub fn is_up(&self) -> Option<bool> {
        self.status.as_deref().map(|s| s.eq_ignore_ascii_case("up"))
    }

    /// Name if set, else the bare URL.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(&self.url)
    }
}

/// Extract the website list from a backend reply, tolerating both a bare
/// array and a `{"websites": [...]}` envelope.
#[must_use]
pub fn websites_from_reply(value: &serde_json::Value) -> Vec<Website> {
    let array = match value {
        serde_json::Value::Array(items) => items.as_slice(),
        serde_json::Value::Object(map) => match map.get("websites") {
            Some(serde_json::Value::Array(items)) => items.as_slice(),
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    array
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect()
}
