// Test doubles for the remote service seams
//
// Both mocks replay queued responses in order; the last queued response is
// repeated once the queue runs down to it. Every call is recorded.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::RemoteError;
use crate::kernel::{BaseAI, BaseExtractor, RawExtraction};
use crate::query::ExtractionQuery;

fn next_response<T: Clone>(queue: &Mutex<VecDeque<T>>) -> Option<T> {
    let mut queue = queue.lock().unwrap();
    if queue.len() > 1 {
        queue.pop_front()
    } else {
        queue.front().cloned()
    }
}

// =============================================================================
// Mock Extractor
// =============================================================================

#[derive(Clone, Default)]
pub struct MockExtractor {
    responses: Arc<Mutex<VecDeque<Result<RawExtraction, RemoteError>>>>,
    calls: Arc<Mutex<Vec<ExtractionQuery>>>,
}

impl MockExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response given in the service's wire shape
    /// (`{"success": .., "data": .., "status": .., "expiresAt": ..}`).
    pub fn with_response(self, response: Value) -> Self {
        let raw: RawExtraction =
            serde_json::from_value(response).expect("mock response must match the wire shape");
        self.responses.lock().unwrap().push_back(Ok(raw));
        self
    }

    /// Queue a successful response carrying `data`.
    pub fn with_data(self, data: Value) -> Self {
        self.with_response(serde_json::json!({
            "success": true,
            "data": data,
            "status": "completed",
        }))
    }

    pub fn with_error(self, error: RemoteError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<ExtractionQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseExtractor for MockExtractor {
    async fn extract(&self, query: &ExtractionQuery) -> Result<RawExtraction, RemoteError> {
        self.calls.lock().unwrap().push(query.clone());

        next_response(&self.responses).unwrap_or_else(|| {
            Ok(RawExtraction {
                success: true,
                data: serde_json::json!({}),
                status: "completed".to_string(),
                expires_at: None,
            })
        })
    }
}

// =============================================================================
// Mock AI
// =============================================================================

#[derive(Clone, Default)]
pub struct MockAI {
    responses: Arc<Mutex<VecDeque<Result<String, RemoteError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response.into()));
        self
    }

    pub fn with_error(self, error: RemoteError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Prompts received, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String, RemoteError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        next_response(&self.responses).unwrap_or_else(|| Ok("Mock AI response".to_string()))
    }
}
