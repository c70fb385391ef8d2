use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /extract`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractRequest {
    pub urls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

impl ExtractRequest {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            prompt: None,
            schema: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_schema(mut self, schema: serde_json::Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Response of `POST /extract`. Usually only carries the job id.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractStartResponse {
    pub success: bool,
    pub id: Option<String>,
    pub data: Option<serde_json::Value>,
    pub status: Option<String>,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

/// Extract job state, from `GET /extract/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub status: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl ExtractResponse {
    pub const STATUS_COMPLETED: &'static str = "completed";
    pub const STATUS_PROCESSING: &'static str = "processing";

    pub fn is_processing(&self) -> bool {
        self.status == Self::STATUS_PROCESSING
    }

    pub fn is_completed(&self) -> bool {
        self.status == Self::STATUS_COMPLETED
    }
}

impl From<ExtractStartResponse> for ExtractResponse {
    fn from(start: ExtractStartResponse) -> Self {
        let status = start.status.unwrap_or_else(|| {
            if start.success {
                ExtractResponse::STATUS_COMPLETED.to_string()
            } else {
                "failed".to_string()
            }
        });

        Self {
            success: start.success,
            data: start.data.unwrap_or_default(),
            status,
            expires_at: start.expires_at,
            error: start.error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_skips_unset_fields() {
        let body = serde_json::to_value(ExtractRequest::new(vec!["https://a.test".into()])).unwrap();
        assert_eq!(body, serde_json::json!({ "urls": ["https://a.test"] }));
    }

    #[test]
    fn test_parse_completed_response() {
        let raw = r#"{
            "success": true,
            "data": { "job_postings": [] },
            "status": "completed",
            "expiresAt": "2025-01-08T20:58:12.000Z"
        }"#;

        let response: ExtractResponse = serde_json::from_str(raw).unwrap();
        assert!(response.success);
        assert!(response.is_completed());
        assert!(response.data.get("job_postings").is_some());
        assert!(response.expires_at.is_some());
    }

    #[test]
    fn test_parse_processing_response_without_data() {
        let raw = r#"{ "success": true, "status": "processing" }"#;

        let response: ExtractResponse = serde_json::from_str(raw).unwrap();
        assert!(response.is_processing());
        assert!(response.data.is_null());
        assert!(response.expires_at.is_none());
    }

    #[test]
    fn test_start_response_with_inline_data() {
        let raw = r#"{ "success": true, "data": { "industry_trends": [] } }"#;

        let start: ExtractStartResponse = serde_json::from_str(raw).unwrap();
        let response = ExtractResponse::from(start);
        assert!(response.is_completed());
        assert!(response.data.get("industry_trends").is_some());
    }
}
