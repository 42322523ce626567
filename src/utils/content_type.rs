//! Content-type inspection for JSON request bodies.

use axum::http::{HeaderMap, header};

/// Returns `true` if the request declares a JSON body.
///
/// The check is a case-insensitive substring match on `application/json`,
/// so parameters such as `; charset=utf-8` are accepted. A missing header or
/// a header value that is not valid UTF-8 counts as non-JSON.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::CONTENT_TYPE, "Application/JSON; charset=utf-8".parse().unwrap());
///
/// assert!(is_json_content(&headers));
/// ```
pub fn is_json_content(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_ascii_lowercase().contains("application/json"))
        .unwrap_or(false)
}
