//! Firecrawl adapter (implements BaseExtractor)

use async_trait::async_trait;
use firecrawl_client::{ExtractRequest, FirecrawlClient, FirecrawlError};
use std::sync::Arc;

use super::traits::{BaseExtractor, RawExtraction};
use crate::error::RemoteError;
use crate::query::ExtractionQuery;

/// Wrapper around FirecrawlClient that implements BaseExtractor
#[derive(Clone)]
pub struct FirecrawlAdapter(pub Arc<FirecrawlClient>);

impl FirecrawlAdapter {
    pub fn new(client: Arc<FirecrawlClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseExtractor for FirecrawlAdapter {
    async fn extract(&self, query: &ExtractionQuery) -> Result<RawExtraction, RemoteError> {
        let request = ExtractRequest::new(query.urls.clone())
            .with_prompt(query.prompt.clone())
            .with_schema(query.schema.clone());

        let response = self.0.extract(&request).await.map_err(to_remote_error)?;

        if !response.success {
            tracing::warn!(
                status = %response.status,
                error = response.error.as_deref().unwrap_or(""),
                "Firecrawl reported an unsuccessful extract"
            );
        }

        Ok(RawExtraction {
            success: response.success,
            data: response.data,
            status: response.status,
            expires_at: response.expires_at,
        })
    }
}

/// Classify a client error into the tag the pipeline dispatches on.
pub fn to_remote_error(err: FirecrawlError) -> RemoteError {
    match err {
        FirecrawlError::Unauthorized(msg) => RemoteError::Auth(msg),
        FirecrawlError::UnsupportedSite(msg) => RemoteError::UnsupportedSite(msg),
        FirecrawlError::RateLimited(msg) => RemoteError::RateLimited(msg),
        FirecrawlError::PollTimeout { id, elapsed } => RemoteError::JobStillRunning {
            job_id: id,
            after: elapsed,
        },
        FirecrawlError::Parse(msg) => RemoteError::InvalidResponse(msg),
        e @ (FirecrawlError::Network(_) | FirecrawlError::Timeout(_)) => {
            RemoteError::Transport(e.to_string())
        }
        e if e.is_server_error() => RemoteError::Transport(e.to_string()),
        e => RemoteError::Unknown(e.to_string()),
    }
}
