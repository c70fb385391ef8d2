//! Bounded retry with a caller-side timeout for remote calls.

use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, warn};

use crate::error::RemoteError;

/// Retry and deadline settings for one kind of remote call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt, for transient errors only
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
    /// Deadline for each individual attempt
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(8),
            timeout: Duration::from_secs(120),
        }
    }
}

impl RetryPolicy {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn backoff(mut self, initial: Duration, max: Duration) -> Self {
        self.initial_backoff = initial;
        self.max_backoff = max;
        self
    }

    /// Delay before retry number `retry` (1-based).
    pub fn backoff_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

/// Run `operation` under `policy`.
///
/// Each attempt is bounded by `policy.timeout`; an elapsed attempt counts as
/// [`RemoteError::Timeout`]. Non-retryable errors return immediately.
pub async fn call_with_policy<T, F, Fut>(
    policy: &RetryPolicy,
    operation: &str,
    mut attempt_fn: F,
) -> Result<T, RemoteError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RemoteError>>,
{
    let mut attempt = 0;

    loop {
        if attempt > 0 {
            let delay = policy.backoff_for(attempt);
            debug!(
                operation,
                attempt,
                backoff_ms = delay.as_millis() as u64,
                "Retrying remote call"
            );
            sleep(delay).await;
        }

        let result = match timeout(policy.timeout, attempt_fn()).await {
            Ok(result) => result,
            Err(_) => Err(RemoteError::Timeout {
                after: policy.timeout,
            }),
        };

        match result {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < policy.max_retries => {
                warn!(operation, attempt, error = %e, "Transient remote failure");
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
