//! Typed errors for remote calls and user input.

use std::time::Duration;
use thiserror::Error;

/// Failure of a remote service call (extraction or synthesis).
///
/// Remote clients classify failures once, at the protocol boundary, so the
/// pipeline can pick retry behavior and user guidance by matching on the tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Credentials rejected
    #[error("Invalid API key or insufficient permissions: {0}")]
    Auth(String),

    /// Connection failure or transient server-side error
    #[error("Network error: {0}")]
    Transport(String),

    /// Too many requests
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// One of the requested sites is not enabled for the extraction account
    #[error("Website is no longer supported: {0}")]
    UnsupportedSite(String),

    /// The call did not finish within the caller-side deadline
    #[error("Request timed out after {after:?}")]
    Timeout { after: Duration },

    /// A remote job was accepted but had not finished when polling gave up.
    /// Submitting again would start a second job, so this is not retried.
    #[error("Extract job {job_id} was still processing after {after:?}")]
    JobStillRunning { job_id: String, after: Duration },

    /// The service answered with something we could not understand
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Unknown(String),
}

impl RemoteError {
    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RemoteError::Transport(_) | RemoteError::RateLimited(_) | RemoteError::Timeout { .. }
        )
    }

    /// Remediation guidance shown to the user alongside the error.
    ///
    /// `fallback` is the generic advice for errors without a specific hint.
    pub fn hint(&self, fallback: &'static str) -> &'static str {
        match self {
            RemoteError::UnsupportedSite(_) => {
                "It appears one of the sites is not supported by your Firecrawl API key. \
                 Please contact Firecrawl support to enable access to this website."
            }
            RemoteError::Auth(_) => {
                "Please check that your API keys are correct and have the necessary permissions."
            }
            _ => fallback,
        }
    }
}

/// Invalid search criteria supplied by the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("Job title must not be empty")]
    EmptyJobTitle,

    #[error("Location must not be empty")]
    EmptyLocation,

    #[error("Experience must be between 0 and {max} years, got {value}")]
    ExperienceOutOfRange { value: f32, max: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(RemoteError::Transport("reset".into()).is_retryable());
        assert!(RemoteError::RateLimited("slow down".into()).is_retryable());
        assert!(RemoteError::Timeout { after: Duration::from_secs(5) }.is_retryable());

        assert!(!RemoteError::Auth("bad key".into()).is_retryable());
        assert!(!RemoteError::UnsupportedSite("naukri".into()).is_retryable());
        assert!(!RemoteError::InvalidResponse("garbage".into()).is_retryable());
        assert!(!RemoteError::Unknown("?".into()).is_retryable());
        assert!(!RemoteError::JobStillRunning {
            job_id: "job-1".into(),
            after: Duration::from_secs(300)
        }
        .is_retryable());
    }

    #[test]
    fn test_sub_second_timeout_is_displayed_precisely() {
        let err = RemoteError::Timeout {
            after: Duration::from_millis(250),
        };
        assert_eq!(err.to_string(), "Request timed out after 250ms");
    }

    #[test]
    fn test_hint_dispatches_on_tag() {
        let fallback = "try again";

        assert!(RemoteError::UnsupportedSite("x".into())
            .hint(fallback)
            .contains("Firecrawl support"));
        assert!(RemoteError::Auth("x".into())
            .hint(fallback)
            .contains("API keys are correct"));
        assert_eq!(RemoteError::Transport("x".into()).hint(fallback), fallback);
    }

    #[test]
    fn test_description_mentioning_api_key_is_not_an_auth_error() {
        // Classification comes from the tag, never from the message text.
        let err = RemoteError::Transport("api key header dropped by proxy".into());
        assert_eq!(err.hint("generic"), "generic");
    }
}
