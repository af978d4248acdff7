//! API utilities for frontend-backend communication
//!
//! Provides helpers for building backend URLs and decoding the
//! `{ success, error? }` replies every endpoint returns.

use super::config::app_config;
use contracts::shared::api_error::{check_reply, ApiError, BackendReply};
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

/// Port the backend listens on when `api_base` is not configured.
const DEFAULT_API_PORT: u16 = 4000;

/// Get the base URL for API requests
///
/// Uses `api_base` from the configuration when set, otherwise the current
/// window location with the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:4000" (no trailing slash)
/// - Empty string if window is not available
pub fn api_base() -> String {
    let configured = app_config().api_base.trim();
    if !configured.is_empty() {
        return configured.trim_end_matches('/').to_string();
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
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/employees");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL of a single employee, with the id percent-encoded.
pub fn employee_url(id: &str) -> String {
    api_url(&format!("/api/employees/{}", urlencoding::encode(id)))
}

/// Decode a backend reply.
///
/// The body is parsed even on non-2xx statuses so the backend's own `error`
/// message reaches the user; `fallback` covers replies without one.
pub async fn read_reply<T>(response: Response, fallback: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned + BackendReply,
{
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    match serde_json::from_str::<T>(&text) {
        Ok(reply) => check_reply(reply, fallback),
        Err(_) if !(200..300).contains(&status) => {
            Err(ApiError::Backend(format!("{} (HTTP {})", fallback, status)))
        }
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}
