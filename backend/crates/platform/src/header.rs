//! Request Header Helpers
//!
//! Common extraction of credentials and identity from HTTP headers.

use axum::http::{HeaderMap, header};

/// Header carrying the lesson user, set by the lesson container in front of us
pub const CURRENT_USER_HEADER: &str = "x-webgoat-user";

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the raw `Authorization` header value
pub fn extract_authorization(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()
        .map(str::to_string)
}

/// Extract a bearer token from the `Authorization` header
///
/// A value without the `Bearer ` prefix is taken as the token itself,
/// matching clients that send the bare JWT. Empty values yield `None`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = extract_authorization(headers)?;
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(&value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Extract the current lesson user name
pub fn extract_current_user(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CURRENT_USER_HEADER)?
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
