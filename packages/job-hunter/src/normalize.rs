//! Record normalization: turn an extraction payload into validated records.
//!
//! Validation is permissive. A missing or malformed field becomes unset
//! instead of rejecting the record; only elements that are not JSON objects
//! are dropped. Record count is not enforced.

use serde_json::{Map, Value};

use crate::models::{ExtractionResult, IndustryTrend, JobPosting};

/// Record counts the extraction prompt asks for. Advisory only.
pub const REQUESTED_MIN_RECORDS: usize = 3;
pub const REQUESTED_MAX_RECORDS: usize = 10;

/// A record kind the normalizer can build from an extraction payload.
pub trait Record: Sized {
    /// Top-level payload key holding the record array.
    const COLLECTION_KEY: &'static str;

    /// Build a record from one array element.
    fn from_fields(fields: &Map<String, Value>) -> Self;

    /// JSON handed to the synthesis step.
    fn to_prompt_value(&self) -> Value;
}

/// Validated records from `result`, in service order.
///
/// Empty when the extraction failed, when the payload lacks
/// `R::COLLECTION_KEY`, or when that key holds something other than an array.
pub fn normalize<R: Record>(result: &ExtractionResult) -> Vec<R> {
    if !result.succeeded {
        tracing::debug!(key = R::COLLECTION_KEY, "Extraction failed, no records");
        return Vec::new();
    }

    let items = match result.payload.get(R::COLLECTION_KEY) {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => {
            tracing::info!(key = R::COLLECTION_KEY, "Payload has no records");
            return Vec::new();
        }
        Some(_) => {
            tracing::warn!(key = R::COLLECTION_KEY, "Payload records are not an array");
            return Vec::new();
        }
    };

    let records: Vec<R> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(fields) => Some(R::from_fields(fields)),
            _ => {
                tracing::warn!(key = R::COLLECTION_KEY, index, "Skipping non-object record");
                None
            }
        })
        .collect();

    if !(REQUESTED_MIN_RECORDS..=REQUESTED_MAX_RECORDS).contains(&records.len()) {
        tracing::debug!(
            key = R::COLLECTION_KEY,
            count = records.len(),
            "Record count outside requested range"
        );
    }

    records
}

/// Records as a pretty-printed JSON array for prompts.
pub fn records_to_prompt_json<R: Record>(records: &[R]) -> String {
    let values: Vec<Value> = records.iter().map(Record::to_prompt_value).collect();
    serde_json::to_string_pretty(&values).unwrap_or_else(|_| "[]".to_string())
}

// =============================================================================
// Field coercion
// =============================================================================

/// Text field: strings, numbers and booleans are accepted; blank is unset.
fn text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    let value = match fields.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!value.is_empty()).then_some(value)
}

/// Numeric field: JSON numbers or strings like "$85,000" and "12.5%".
fn number(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    match fields.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches(|c| matches!(c, '$' | '€' | '£' | '₹'))
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    cleaned.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// List field: an array of strings or one comma-separated string.
fn string_list(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    let entries: Vec<String> = match fields.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.trim().to_string())
            .collect(),
        Some(Value::String(s)) => s.split(',').map(|s| s.trim().to_string()).collect(),
        _ => Vec::new(),
    };
    entries.into_iter().filter(|s| !s.is_empty()).collect()
}

// =============================================================================
// Record kinds
// =============================================================================

impl Record for JobPosting {
    const COLLECTION_KEY: &'static str = "job_postings";

    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            region: text(fields, "region"),
            role: text(fields, "role"),
            job_title: text(fields, "job_title"),
            experience: text(fields, "experience"),
            job_link: text(fields, "job_link"),
        }
    }

    fn to_prompt_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Record for IndustryTrend {
    const COLLECTION_KEY: &'static str = "industry_trends";

    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            industry: text(fields, "industry"),
            avg_salary: number(fields, "avg_salary"),
            growth_rate: number(fields, "growth_rate"),
            demand_level: text(fields, "demand_level"),
            top_skills: string_list(fields, "top_skills"),
        }
    }

    fn to_prompt_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
