//! Domain records: search criteria in, validated records through, reports out.

use chrono::{DateTime, Utc};
use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CriteriaError, RemoteError};

/// Upper bound accepted for years of experience.
pub const MAX_EXPERIENCE_YEARS: f32 = 30.0;

/// Industry categories offered for trend lookup.
pub const JOB_CATEGORIES: &[&str] = &[
    "Information Technology",
    "Software development",
    "Data Science",
    "Marketing",
    "Finance",
    "Healthcare",
    "Education",
    "Engineering",
    "Sales",
    "Human Resources",
];

// =============================================================================
// Search Criteria
// =============================================================================

/// What the user is looking for. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    job_title: String,
    location: String,
    experience_years: f32,
    skills: Vec<String>,
}

impl SearchCriteria {
    pub fn new(
        job_title: impl Into<String>,
        location: impl Into<String>,
        experience_years: f32,
        skills: Vec<String>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            location: location.into(),
            experience_years,
            skills,
        }
    }

    /// Check the criteria the way the input form does before a search.
    ///
    /// Query building never requires this; it is for callers that want to
    /// reject obviously bad input up front.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        if self.job_title.trim().is_empty() {
            return Err(CriteriaError::EmptyJobTitle);
        }
        if self.location.trim().is_empty() {
            return Err(CriteriaError::EmptyLocation);
        }
        if !self.experience_years.is_finite()
            || !(0.0..=MAX_EXPERIENCE_YEARS).contains(&self.experience_years)
        {
            return Err(CriteriaError::ExperienceOutOfRange {
                value: self.experience_years,
                max: MAX_EXPERIENCE_YEARS,
            });
        }
        Ok(())
    }

    /// Split a comma-separated skills field into trimmed, non-empty entries.
    pub fn parse_skills(input: &str) -> Vec<String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn experience_years(&self) -> f32 {
        self.experience_years
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Skills joined for display inside prompts ("Python, SQL").
    pub fn skills_display(&self) -> String {
        self.skills.join(", ")
    }
}

// =============================================================================
// Extracted Records
// =============================================================================

/// One extracted job listing. No identity key; every field may be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JobPosting {
    /// Region or area where the job is located
    pub region: Option<String>,
    /// Specific role or function within the job category
    pub role: Option<String>,
    /// Title of the job position
    pub job_title: Option<String>,
    /// Experience required for the position
    pub experience: Option<String>,
    /// Link to the job posting
    pub job_link: Option<String>,
}

/// Labor-market data for one industry or sub-category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IndustryTrend {
    /// Industry name
    pub industry: Option<String>,
    /// Average salary in the industry
    pub avg_salary: Option<f64>,
    /// Growth rate of the industry
    pub growth_rate: Option<f64>,
    /// Demand level in the industry (High, Medium or Low)
    pub demand_level: Option<String>,
    /// Top skills in demand for this industry
    #[serde(default)]
    pub top_skills: Vec<String>,
}

/// Extraction target for job search.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct JobPostingsSchema {
    /// List of job postings
    pub job_postings: Vec<JobPosting>,
}

/// Extraction target for industry trend lookup.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IndustryTrendsSchema {
    /// List of industry trends
    pub industry_trends: Vec<IndustryTrend>,
}

/// JSON schema for `T` with nested definitions inlined.
///
/// The extraction service resolves a single self-contained schema more
/// reliably than one that points into `definitions`.
pub fn inline_schema<T: JsonSchema>() -> Value {
    let schema = SchemaSettings::draft07()
        .with(|s| s.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<T>();
    serde_json::to_value(schema).unwrap_or_default()
}

// =============================================================================
// Remote Results
// =============================================================================

/// Outcome of one extraction call. Callers check `succeeded` before
/// touching `payload`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub succeeded: bool,
    pub payload: Map<String, Value>,
    pub status: String,
    pub expires_at: Option<DateTime<Utc>>,
    /// Set when the call itself failed (transport, auth, timeout, ...)
    pub error: Option<RemoteError>,
}

impl ExtractionResult {
    pub fn failed(error: RemoteError) -> Self {
        Self {
            succeeded: false,
            payload: Map::new(),
            status: "failed".to_string(),
            expires_at: None,
            error: Some(error),
        }
    }
}

/// Formatted report text from the synthesis step. Never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport(pub String);

impl AnalysisReport {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(title: &str, location: &str, years: f32) -> SearchCriteria {
        SearchCriteria::new(title, location, years, vec![])
    }

    #[test]
    fn test_validate_accepts_form_input() {
        assert!(criteria("Data Scientist", "New York", 3.0).validate().is_ok());
        assert!(criteria("Data Scientist", "Remote", 0.0).validate().is_ok());
        assert!(criteria("Data Scientist", "Remote", 30.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_input() {
        assert_eq!(
            criteria("  ", "New York", 3.0).validate(),
            Err(CriteriaError::EmptyJobTitle)
        );
        assert_eq!(
            criteria("Data Scientist", "", 3.0).validate(),
            Err(CriteriaError::EmptyLocation)
        );
        assert!(matches!(
            criteria("Data Scientist", "Remote", -1.0).validate(),
            Err(CriteriaError::ExperienceOutOfRange { .. })
        ));
        assert!(matches!(
            criteria("Data Scientist", "Remote", f32::NAN).validate(),
            Err(CriteriaError::ExperienceOutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_skills() {
        assert_eq!(
            SearchCriteria::parse_skills(" Python, SQL ,,Machine Learning, "),
            vec!["Python", "SQL", "Machine Learning"]
        );
        assert!(SearchCriteria::parse_skills("").is_empty());
    }

    #[test]
    fn test_job_postings_schema_is_self_contained() {
        let schema = inline_schema::<JobPostingsSchema>();
        let text = schema.to_string();

        assert!(!text.contains("$ref"));
        let item = &schema["properties"]["job_postings"]["items"]["properties"];
        for field in ["region", "role", "job_title", "experience", "job_link"] {
            assert!(item.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(
            item["job_link"]["description"],
            "Link to the job posting"
        );
    }

    #[test]
    fn test_industry_trends_schema_fields() {
        let schema = inline_schema::<IndustryTrendsSchema>();
        let item = &schema["properties"]["industry_trends"]["items"]["properties"];
        for field in ["industry", "avg_salary", "growth_rate", "demand_level", "top_skills"] {
            assert!(item.get(field).is_some(), "missing {}", field);
        }
    }
}
