//! Extraction client: one logical extraction call per query.

use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::RemoteError;
use crate::kernel::{call_with_policy, BaseExtractor, RawExtraction, RetryPolicy};
use crate::models::ExtractionResult;
use crate::query::ExtractionQuery;

#[derive(Clone)]
pub struct ExtractionClient {
    extractor: Arc<dyn BaseExtractor>,
    policy: RetryPolicy,
}

impl ExtractionClient {
    pub fn new(extractor: Arc<dyn BaseExtractor>, policy: RetryPolicy) -> Self {
        Self { extractor, policy }
    }

    /// Run the query against the extraction service.
    ///
    /// Never returns an error: failures come back as a result with
    /// `succeeded == false` and the cause in `error`.
    pub async fn extract(&self, query: &ExtractionQuery) -> ExtractionResult {
        tracing::info!(urls = ?query.urls, "Extracting structured data");

        let outcome: Result<RawExtraction, RemoteError> =
            call_with_policy(&self.policy, "extract", || self.extractor.extract(query)).await;

        match outcome {
            Ok(raw) => {
                tracing::debug!(success = raw.success, status = %raw.status, "Extraction finished");
                into_result(raw)
            }
            Err(e) => {
                tracing::error!(error = %e, "Extraction failed");
                ExtractionResult::failed(e)
            }
        }
    }
}

fn into_result(raw: RawExtraction) -> ExtractionResult {
    let payload = match raw.data {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            tracing::warn!(kind = value_kind(&other), "Extraction data is not an object, ignoring");
            Map::new()
        }
    };

    ExtractionResult {
        succeeded: raw.success,
        payload,
        status: raw.status,
        expires_at: raw.expires_at,
        error: None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
