//! HTTP header helpers
//!
//! Common functions for reading credentials from request headers.

use axum::http::{HeaderMap, header};

/// Authentication scheme carried in the `Authorization` header
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively. Returns `None` when the header
/// is missing, is not valid ASCII, uses another scheme or carries an empty
/// token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_authorization(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = with_authorization("Bearer abc.def");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = with_authorization("bearer abc.def");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def"));
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_other_scheme_or_empty_token() {
        assert_eq!(extract_bearer_token(&with_authorization("Basic dXNlcjpwdw==")), None);
        assert_eq!(extract_bearer_token(&with_authorization("Bearer   ")), None);
        assert_eq!(extract_bearer_token(&with_authorization("Bearer")), None);
    }
}
