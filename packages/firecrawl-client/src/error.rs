//! Error types for the Firecrawl client.

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Result type for Firecrawl client operations.
pub type Result<T> = std::result::Result<T, FirecrawlError>;

/// Firecrawl client errors.
#[derive(Debug, Error)]
pub enum FirecrawlError {
    /// Network error (connection refused, reset, DNS)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API key rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// One of the requested sites is not enabled for this account
    #[error("Website is no longer supported: {0}")]
    UnsupportedSite(String),

    /// Too many requests
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// The service or a gateway gave up on the request
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Any other non-2xx response
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Extract job ended in a non-completed state
    #[error("Extract job {id} ended with status {status}")]
    JobFailed { id: String, status: String },

    /// Polling gave up before the job finished
    #[error("Extract job {id} still processing after {elapsed:?}")]
    PollTimeout { id: String, elapsed: Duration },

    /// Unexpected response body
    #[error("Parse error: {0}")]
    Parse(String),
}

impl FirecrawlError {
    /// Map a non-2xx response to a typed error.
    ///
    /// Firecrawl reports failures as `{"success": false, "error": "..."}`;
    /// the `error` field is preferred over the raw body when present.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| body.to_string());

        match status.as_u16() {
            401 => FirecrawlError::Unauthorized(message),
            403 if message.to_lowercase().contains("no longer supported") => {
                FirecrawlError::UnsupportedSite(message)
            }
            408 | 504 => FirecrawlError::Timeout(message),
            429 => FirecrawlError::RateLimited(message),
            code => FirecrawlError::Api {
                status: code,
                message,
            },
        }
    }

    /// Server-side (5xx) failures are usually transient.
    pub fn is_server_error(&self) -> bool {
        matches!(self, FirecrawlError::Api { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized() {
        let err = FirecrawlError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"success":false,"error":"Unauthorized: Invalid token"}"#,
        );
        assert!(matches!(err, FirecrawlError::Unauthorized(ref m) if m == "Unauthorized: Invalid token"));
    }

    #[test]
    fn test_unsupported_site() {
        let err = FirecrawlError::from_response(
            StatusCode::FORBIDDEN,
            r#"{"success":false,"error":"This website is no longer supported, please reach out to help@firecrawl.com"}"#,
        );
        assert!(matches!(err, FirecrawlError::UnsupportedSite(_)));
    }

    #[test]
    fn test_plain_forbidden_is_api_error() {
        let err = FirecrawlError::from_response(StatusCode::FORBIDDEN, "forbidden");
        assert!(matches!(err, FirecrawlError::Api { status: 403, .. }));
    }

    #[test]
    fn test_rate_limit_and_timeout() {
        assert!(matches!(
            FirecrawlError::from_response(StatusCode::TOO_MANY_REQUESTS, "slow down"),
            FirecrawlError::RateLimited(_)
        ));
        assert!(matches!(
            FirecrawlError::from_response(StatusCode::GATEWAY_TIMEOUT, ""),
            FirecrawlError::Timeout(_)
        ));
    }

    #[test]
    fn test_server_error() {
        let err = FirecrawlError::from_response(StatusCode::BAD_GATEWAY, "upstream");
        assert!(err.is_server_error());

        let err = FirecrawlError::from_response(StatusCode::BAD_REQUEST, "bad schema");
        assert!(!err.is_server_error());
    }
}
