//! Endpoint URL helpers
//!
//! The chat endpoint is configured as a base URL; request paths are joined
//! onto it without producing doubled or missing slashes.

/// Strip trailing slashes from a configured base URL.
///
/// # Examples
///
/// ```
/// use chatpane::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:5000/"), "http://localhost:5000");
/// assert_eq!(normalize_base_url("  http://chat.internal/api// "), "http://chat.internal/api");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Join an endpoint path onto a base URL.
///
/// # Examples
///
/// ```
/// use chatpane::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:5000/", "/chat"),
///     "http://localhost:5000/chat"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{normalized_base}/{endpoint}")
}
