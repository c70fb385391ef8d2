//! Pure Firecrawl REST API client.
//!
//! A minimal client for Firecrawl's structured extraction endpoint. An extract
//! job is started with a list of URLs, a natural-language prompt and a JSON
//! schema; Firecrawl scrapes the pages and returns data shaped to the schema.
//!
//! # Example
//!
//! ```rust,ignore
//! use firecrawl_client::{ExtractRequest, FirecrawlClient};
//!
//! let client = FirecrawlClient::new(api_key)?;
//!
//! let request = ExtractRequest::new(vec!["https://example.com/jobs".into()])
//!     .with_prompt("Extract job postings")
//!     .with_schema(schema);
//!
//! let response = client.extract(&request).await?;
//! println!("{}", response.data);
//! ```

pub mod error;
pub mod types;

pub use error::{FirecrawlError, Result};
pub use types::{ExtractRequest, ExtractResponse, ExtractStartResponse};

use serde::de::DeserializeOwned;
use std::time::Duration;

const BASE_URL: &str = "https://api.firecrawl.dev/v1";

#[derive(Clone)]
pub struct FirecrawlClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl FirecrawlClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            poll_interval: Duration::from_secs(2),
            poll_timeout: Duration::from_secs(300),
        })
    }

    /// Set a custom base URL (self-hosted Firecrawl, proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run an extract job end-to-end: start it, then poll until it leaves
    /// the `processing` state.
    pub async fn extract(&self, request: &ExtractRequest) -> Result<ExtractResponse> {
        tracing::info!(urls = request.urls.len(), "Starting Firecrawl extract");

        let start: ExtractStartResponse = self.post("/extract", request).await?;

        if !start.success || start.data.is_some() {
            tracing::debug!(success = start.success, "Extract returned without a job id");
            return Ok(start.into());
        }

        let id = start
            .id
            .ok_or_else(|| FirecrawlError::Parse("extract response carried no job id".into()))?;

        tracing::info!(job_id = %id, "Extract job started, polling for completion");
        self.wait_for_extract(&id).await
    }

    /// Fetch the current state of an extract job.
    pub async fn extract_status(&self, id: &str) -> Result<ExtractResponse> {
        self.get(&format!("/extract/{}", id)).await
    }

    /// Poll until a job completes or `poll_timeout` elapses.
    pub async fn wait_for_extract(&self, id: &str) -> Result<ExtractResponse> {
        let started = tokio::time::Instant::now();

        loop {
            let status = self.extract_status(id).await?;

            if !status.is_processing() {
                if status.success && !status.is_completed() {
                    return Err(FirecrawlError::JobFailed {
                        id: id.to_string(),
                        status: status.status,
                    });
                }
                tracing::info!(job_id = %id, status = %status.status, "Extract job finished");
                return Ok(status);
            }

            if started.elapsed() >= self.poll_timeout {
                return Err(FirecrawlError::PollTimeout {
                    id: id.to_string(),
                    elapsed: started.elapsed(),
                });
            }

            tracing::debug!(job_id = %id, "Extract job still processing");
            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn post<T: serde::Serialize, R: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<R> {
        let url = format!("{}{}", self.base_url, endpoint);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        Self::read_json(resp).await
    }

    async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R> {
        let url = format!("{}{}", self.base_url, endpoint);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Self::read_json(resp).await
    }

    async fn read_json<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = %status, body = %body, "Firecrawl API error");
            return Err(FirecrawlError::from_response(status, &body));
        }

        let text = resp.text().await?;
        serde_json::from_str(&text).map_err(|e| FirecrawlError::Parse(e.to_string()))
    }
}
