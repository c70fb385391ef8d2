// Trait definitions for dependency injection
//
// Infrastructure seams only. The pipeline owns the business logic and talks
// to remote services exclusively through these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseExtractor)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::RemoteError;
use crate::query::ExtractionQuery;

// =============================================================================
// Extraction Trait (Infrastructure - schema-driven web extraction)
// =============================================================================

/// Final answer of the extraction service for one query.
///
/// Mirrors the service's wire shape so test doubles can be written as JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawExtraction {
    pub success: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "expiresAt", default)]
    pub expires_at: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait BaseExtractor: Send + Sync {
    /// Run one extraction over `query.urls`, shaped by `query.schema`.
    async fn extract(&self, query: &ExtractionQuery) -> Result<RawExtraction, RemoteError>;
}

// =============================================================================
// AI Trait (Infrastructure - text completion)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String, RemoteError>;
}
