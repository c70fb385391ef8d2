use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use crate::kernel::RetryPolicy;

pub const DEFAULT_FIRECRAWL_API_URL: &str = "https://api.firecrawl.dev/v1";
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const DEFAULT_LLM_MODEL: &str = "mistral-small-latest";

/// Added to the extract poll timeout to get the per-attempt deadline, so
/// the poller gives up (and reports the job id) before the attempt is cut.
/// Covers one in-flight HTTP request plus a poll interval.
pub const EXTRACT_ATTEMPT_GRACE: Duration = Duration::from_secs(150);

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub firecrawl_api_key: String,
    pub firecrawl_api_url: String,
    /// Local OpenAI-compatible servers accept any key
    pub llm_api_key: String,
    pub llm_base_url: String,
    pub llm_model: String,
    pub extract_timeout: Duration,
    pub synthesis_timeout: Duration,
    pub max_retries: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            firecrawl_api_key: var("FIRECRAWL_API_KEY").context("FIRECRAWL_API_KEY must be set")?,
            firecrawl_api_url: var("FIRECRAWL_API_URL")
                .unwrap_or_else(|| DEFAULT_FIRECRAWL_API_URL.to_string()),
            llm_api_key: var("LLM_API_KEY")
                .or_else(|| var("MISTRAL_API_KEY"))
                .or_else(|| var("OPENAI_API_KEY"))
                .unwrap_or_else(|| "dummy_key".to_string()),
            llm_base_url: var("LLM_BASE_URL").unwrap_or_else(|| DEFAULT_LLM_BASE_URL.to_string()),
            llm_model: var("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            extract_timeout: Duration::from_secs(
                var("EXTRACT_TIMEOUT_SECS")
                    .unwrap_or_else(|| "300".to_string())
                    .parse()
                    .context("EXTRACT_TIMEOUT_SECS must be a valid number")?,
            ),
            synthesis_timeout: Duration::from_secs(
                var("SYNTHESIS_TIMEOUT_SECS")
                    .unwrap_or_else(|| "120".to_string())
                    .parse()
                    .context("SYNTHESIS_TIMEOUT_SECS must be a valid number")?,
            ),
            max_retries: var("REMOTE_MAX_RETRIES")
                .unwrap_or_else(|| "2".to_string())
                .parse()
                .context("REMOTE_MAX_RETRIES must be a valid number")?,
        })
    }

    /// How long the extraction client polls one job before giving up.
    pub fn extract_poll_timeout(&self) -> Duration {
        self.extract_timeout
    }

    /// Each attempt outlives the poll timeout by [`EXTRACT_ATTEMPT_GRACE`].
    pub fn extraction_policy(&self) -> RetryPolicy {
        RetryPolicy::with_timeout(self.extract_timeout + EXTRACT_ATTEMPT_GRACE)
            .max_retries(self.max_retries)
    }

    pub fn synthesis_policy(&self) -> RetryPolicy {
        RetryPolicy::with_timeout(self.synthesis_timeout).max_retries(self.max_retries)
    }
}
