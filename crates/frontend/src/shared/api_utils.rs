//! API utilities for frontend-backend communication.

/// Get the base URL for API requests.
///
/// The backend serves the frontend itself, so requests go to the current
/// origin. Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path.
///
/// # Example
/// ```no_run
/// let url = frontend::shared::api_utils::api_url("/check_order_exists");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
