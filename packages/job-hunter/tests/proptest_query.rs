//! Property-based tests for query building and record normalization

use job_hunter::models::{ExtractionResult, JobPosting};
use job_hunter::normalize::normalize;
use job_hunter::query::{hyphenate, industry_trends_query, job_search_query, slug};
use job_hunter::SearchCriteria;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn free_text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,8}( [A-Za-z0-9]{1,8}){0,3}"
}

fn posting() -> impl Strategy<Value = Value> {
    (
        proptest::option::of("[A-Za-z ]{0,12}"),
        proptest::option::of("[A-Za-z ]{0,12}"),
        proptest::option::of(0u32..40),
        proptest::option::of("https://[a-z]{1,8}\\.com/[0-9]{1,4}"),
    )
        .prop_map(|(region, title, years, link)| {
            let mut fields = Map::new();
            if let Some(region) = region {
                fields.insert("region".into(), json!(region));
            }
            if let Some(title) = title {
                fields.insert("job_title".into(), json!(title));
            }
            if let Some(years) = years {
                fields.insert("experience".into(), json!(years));
            }
            if let Some(link) = link {
                fields.insert("job_link".into(), json!(link));
            }
            Value::Object(fields)
        })
}

fn extraction(succeeded: bool, postings: Vec<Value>) -> ExtractionResult {
    let mut payload = Map::new();
    payload.insert("job_postings".into(), Value::Array(postings));
    ExtractionResult {
        succeeded,
        payload,
        status: "completed".to_string(),
        expires_at: None,
        error: None,
    }
}

proptest! {
    #[test]
    fn job_search_builds_three_urls_with_slugged_fields(
        title in free_text(),
        location in free_text(),
        years in 0.0f32..30.0,
    ) {
        let criteria = SearchCriteria::new(title.clone(), location.clone(), years, vec![]);
        let query = job_search_query(&criteria);

        prop_assert_eq!(query.urls.len(), 3);
        for url in &query.urls {
            prop_assert!(url.contains(&hyphenate(&title)));
            prop_assert!(url.contains(&hyphenate(&location)));
            prop_assert!(!url.contains(' '));
        }
    }

    #[test]
    fn any_text_lands_in_urls_as_an_encoded_slug(
        title in "\\PC{0,20}",
        location in "\\PC{0,20}",
        category in "\\PC{0,20}",
    ) {
        let criteria = SearchCriteria::new(title.clone(), location.clone(), 1.0, vec![]);
        let job_urls = job_search_query(&criteria).urls;
        let trend_urls = industry_trends_query(&category).urls;

        for url in &job_urls {
            prop_assert!(url.contains(&slug(&title)));
            prop_assert!(url.contains(&slug(&location)));
        }
        for url in &trend_urls {
            prop_assert!(url.contains(&slug(&category)));
        }
        for url in job_urls.iter().chain(&trend_urls) {
            prop_assert!(url.is_ascii());
            prop_assert!(!url.chars().any(char::is_whitespace));
        }
    }

    #[test]
    fn job_search_prompt_embeds_criteria_verbatim(
        title in free_text(),
        location in free_text(),
        skill in "[A-Za-z+#]{1,10}",
    ) {
        let criteria = SearchCriteria::new(title.clone(), location.clone(), 4.0, vec![skill.clone()]);
        let query = job_search_query(&criteria);

        prop_assert!(query.prompt.contains(&title));
        prop_assert!(query.prompt.contains(&location));
        prop_assert!(query.prompt.contains(&skill));
    }

    #[test]
    fn trend_lookup_builds_two_urls_with_slugged_category(category in free_text()) {
        let query = industry_trends_query(&category);

        prop_assert_eq!(query.urls.len(), 2);
        for url in &query.urls {
            prop_assert!(url.contains(&hyphenate(&category)));
        }
        prop_assert!(query.prompt.contains(&category));
    }

    #[test]
    fn query_building_never_panics(title in ".*", location in ".*", category in ".*") {
        let criteria = SearchCriteria::new(title, location, 0.0, vec![]);
        prop_assert_eq!(job_search_query(&criteria).urls.len(), 3);
        prop_assert_eq!(industry_trends_query(&category).urls.len(), 2);
    }

    #[test]
    fn normalization_is_idempotent(postings in proptest::collection::vec(posting(), 0..12)) {
        let result = extraction(true, postings.clone());

        let first: Vec<JobPosting> = normalize(&result);
        let second: Vec<JobPosting> = normalize(&result);

        prop_assert_eq!(first.len(), postings.len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn failed_extraction_always_normalizes_to_nothing(
        postings in proptest::collection::vec(posting(), 0..12),
    ) {
        let result = extraction(false, postings);
        prop_assert!(normalize::<JobPosting>(&result).is_empty());
    }
}
