//! Error types for OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the HTTP client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Invalid or missing API key (401/403)
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Rate limit or quota exceeded (429)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// API error (any other non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OpenAIError {
    /// Map a non-2xx status and body to a typed error.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => OpenAIError::Auth(message),
            408 | 504 => OpenAIError::Timeout(message),
            429 => OpenAIError::RateLimited(message),
            _ => OpenAIError::Api { status, message },
        }
    }

    /// Server-side (5xx) failures are usually transient.
    pub fn is_server_error(&self) -> bool {
        matches!(self, OpenAIError::Api { status, .. } if *status >= 500)
    }
}

impl From<reqwest::Error> for OpenAIError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpenAIError::Timeout(err.to_string())
        } else if err.is_decode() {
            OpenAIError::Parse(err.to_string())
        } else {
            OpenAIError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        assert!(matches!(
            OpenAIError::from_status(401, "bad key".into()),
            OpenAIError::Auth(_)
        ));
        assert!(matches!(
            OpenAIError::from_status(429, "quota".into()),
            OpenAIError::RateLimited(_)
        ));
        assert!(OpenAIError::from_status(503, "overloaded".into()).is_server_error());
        assert!(!OpenAIError::from_status(400, "bad request".into()).is_server_error());
    }
}
