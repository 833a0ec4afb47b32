//! API key authentication.
//!
//! The key is read from `X-API-Key`, or else from `Authorization: Bearer
//! <key>`, and compared in constant time against every configured key.
//! With no keys configured every request is allowed.

use axum::extract::Request;
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;

use super::error::AppError;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Configured API keys, injected into request extensions.
///
/// Custom `Debug` redacts the key values.
#[derive(Clone, Default)]
pub struct ApiKeys {
    keys: Vec<String>,
}

impl ApiKeys {
    /// Parse a comma-separated list. Entries are trimmed and empties dropped.
    pub fn parse(raw: &str) -> Self {
        let mut keys: Vec<String> = Vec::new();
        for key in raw.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            if !keys.iter().any(|existing| existing == key) {
                keys.push(key.to_string());
            }
        }
        Self { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether `provided` matches any configured key.
    ///
    /// Every key is compared so the time taken does not depend on which
    /// key matched.
    pub fn accepts(&self, provided: &str) -> bool {
        self.keys
            .iter()
            .fold(false, |found, key| found | constant_time_eq(provided, key))
    }
}

impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys")
            .field("keys", &vec!["[REDACTED]"; self.keys.len()])
            .finish()
    }
}

fn constant_time_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        // Keep timing independent of the length mismatch.
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Extract the presented key: `X-API-Key` first, then a Bearer token.
pub fn presented_key(headers: &HeaderMap) -> Option<&str> {
    let api_key = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty());

    api_key.or_else(|| {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::trim)
    })
}

/// Axum middleware enforcing [`ApiKeys`] from request extensions.
pub async fn auth_middleware(request: Request, next: Next) -> Response {
    let keys = request.extensions().get::<ApiKeys>().cloned().unwrap_or_default();

    if keys.is_empty() {
        return next.run(request).await;
    }

    let rejection = match presented_key(request.headers()) {
        Some(key) if keys.accepts(key) => None,
        Some(_) => Some("unknown API key"),
        None => Some("missing API key"),
    };

    match rejection {
        None => next.run(request).await,
        Some(reason) => {
            tracing::warn!(path = %request.uri().path(), reason, "authentication failed");
            AppError::Unauthorized.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn parse_trims_and_drops_empties() {
        let keys = ApiKeys::parse(" alpha, ,beta,,alpha ");
        assert_eq!(keys.len(), 2);
        assert!(keys.accepts("alpha"));
        assert!(keys.accepts("beta"));
        assert!(!keys.accepts(" alpha"));
        assert!(!keys.accepts(""));
    }

    #[test]
    fn empty_input_means_no_keys() {
        assert!(ApiKeys::parse("").is_empty());
        assert!(ApiKeys::parse(" , ").is_empty());
    }

    #[test]
    fn debug_redacts_keys() {
        let debug = format!("{:?}", ApiKeys::parse("super-secret"));
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn constant_time_eq_works() {
        assert!(constant_time_eq("secret", "secret"));
        assert!(!constant_time_eq("secret", "secreT"));
        assert!(!constant_time_eq("short", "longer-value"));
    }

    #[test]
    fn api_key_header_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, HeaderValue::from_static("from-header"));
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer from-bearer"),
        );
        assert_eq!(presented_key(&headers), Some("from-header"));
    }

    #[test]
    fn bearer_token_is_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer  spaced "),
        );
        assert_eq!(presented_key(&headers), Some("spaced"));
    }

    #[test]
    fn other_schemes_are_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(presented_key(&headers), None);
    }
}
