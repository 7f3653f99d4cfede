//! API utilities for talking to the document service
//!
//! Provides helper functions for constructing API URLs and turning failed
//! responses into error details.

use crate::shared::config::config;
use contracts::domain::a001_document_qa::dto::ApiErrorBody;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the configuration when set. Otherwise the URL is
/// built from the current window location with the configured port.
///
/// # Returns
/// - API base URL like "http://localhost:8000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if let Some(base) = api.base_url.as_deref().filter(|b| !b.trim().is_empty()) {
        return base.trim().trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url(DOCUMENTS_PATH);
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error detail for a non-2xx response: the service's `error` field when the
/// body has one, the status code otherwise
pub fn failure_detail(status: u16, body: &str) -> String {
    ApiErrorBody::detail_from(body).unwrap_or_else(|| format!("HTTP {}", status))
}
