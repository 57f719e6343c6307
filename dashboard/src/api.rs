//! ==============================================================================
//! api.rs - API client for the test panel backend
//! ==============================================================================

use gloo_net::http::Request;
use serde_json::Value;

// Base URL for the backend, overridable at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// backend base url: the `API_BASE_URL` build environment override, or the
/// local default
pub fn base_url() -> &'static str {
    option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

// ==============================================================================
// API functions
// ==============================================================================

/// GET one panel route and decode the body as raw json.
///
/// network and decode failures collapse into one string-shaped error; the
/// caller logs and swallows it.
pub async fn fetch_panel_body(path: &str) -> Result<Value, String> {
    Request::get(&format!("{}{}", base_url(), path))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json::<Value>()
        .await
        .map_err(|e| e.to_string())
}
