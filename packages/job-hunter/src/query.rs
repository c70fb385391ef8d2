//! Query building: criteria in, target URLs plus instruction plus schema out.
//!
//! Pure string transformation. Never fails; odd input just yields URLs that
//! find less.

use serde_json::Value;

use crate::models::{inline_schema, IndustryTrendsSchema, JobPostingsSchema, SearchCriteria};
use crate::prompts;

/// Everything the extraction service needs for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionQuery {
    pub urls: Vec<String>,
    pub prompt: String,
    pub schema: Value,
}

/// Lower-case, hyphen-joined form of a free-text field ("New York" -> "new-york").
pub fn hyphenate(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// [`hyphenate`], then percent-encoded for use in a URL.
pub fn slug(input: &str) -> String {
    urlencoding::encode(&hyphenate(input)).into_owned()
}

/// Three job board searches for the given criteria.
pub fn job_search_query(criteria: &SearchCriteria) -> ExtractionQuery {
    let title = slug(criteria.job_title());
    let location = slug(criteria.location());

    let urls = vec![
        format!("https://www.naukri.com/{}-jobs-in-{}", title, location),
        format!("https://www.indeed.com/jobs?q={}&l={}", title, location),
        format!(
            "https://www.monster.com/jobs/search/?q={}&where={}",
            title, location
        ),
    ];

    ExtractionQuery {
        urls,
        prompt: prompts::format_extract_jobs_prompt(
            criteria.job_title(),
            criteria.location(),
            criteria.experience_years(),
            &criteria.skills_display(),
        ),
        schema: inline_schema::<JobPostingsSchema>(),
    }
}

/// Two salary research pages for an industry category.
pub fn industry_trends_query(category: &str) -> ExtractionQuery {
    let keyword = hyphenate(category);
    let category_slug = slug(category);

    // Glassdoor's KO0,N marks the keyword span of the slug.
    let urls = vec![
        format!("https://www.payscale.com/research/US/Job={}/Salary", category_slug),
        format!(
            "https://www.glassdoor.com/Salaries/{}-salary-SRCH_KO0,{}.htm",
            category_slug,
            keyword.chars().count()
        ),
    ];

    ExtractionQuery {
        urls,
        prompt: prompts::format_extract_trends_prompt(category),
        schema: inline_schema::<IndustryTrendsSchema>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenate() {
        assert_eq!(hyphenate("Data Scientist"), "data-scientist");
        assert_eq!(hyphenate("  New   York "), "new-york");
        assert_eq!(hyphenate(""), "");
    }

    #[test]
    fn test_slug_encodes_unsafe_characters() {
        assert_eq!(slug("C++ Developer"), "c%2B%2B-developer");
        assert_eq!(slug("São Paulo"), "s%C3%A3o-paulo");
    }

    #[test]
    fn test_job_search_urls() {
        let criteria = SearchCriteria::new(
            "Data Scientist",
            "New York",
            3.0,
            vec!["Python".into(), "SQL".into()],
        );
        let query = job_search_query(&criteria);

        assert_eq!(
            query.urls,
            vec![
                "https://www.naukri.com/data-scientist-jobs-in-new-york",
                "https://www.indeed.com/jobs?q=data-scientist&l=new-york",
                "https://www.monster.com/jobs/search/?q=data-scientist&where=new-york",
            ]
        );
        assert!(query.prompt.contains("Data Scientist"));
        assert!(query.prompt.contains("Python, SQL"));
        assert!(query.schema["properties"]["job_postings"].is_object());
    }

    #[test]
    fn test_industry_trend_urls() {
        let query = industry_trends_query("Data Science");

        assert_eq!(
            query.urls,
            vec![
                "https://www.payscale.com/research/US/Job=data-science/Salary",
                "https://www.glassdoor.com/Salaries/data-science-salary-SRCH_KO0,12.htm",
            ]
        );
        assert!(query.prompt.contains("for the Data Science industry"));
        assert!(query.schema["properties"]["industry_trends"].is_object());
    }

    #[test]
    fn test_empty_input_still_builds_urls() {
        let query = job_search_query(&SearchCriteria::new("", "", 0.0, vec![]));
        assert_eq!(query.urls.len(), 3);
        assert!(query.urls.iter().all(|u| u.starts_with("https://")));
    }
}
