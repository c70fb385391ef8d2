//! Pipeline orchestrator for job search and industry trend lookup.
//!
//! Each flow is a linear state machine:
//!
//! ```text
//! BuildQuery -> Extract -> Normalize -> EmptyResult
//!                  |                 \-> Synthesize -> Done
//!                  \-> Error <---------------/
//! ```
//!
//! No state is kept between invocations. A pipeline holds only the two
//! injected remote-service handles and can be shared across calls.

use std::fmt;
use std::sync::Arc;

use crate::error::RemoteError;
use crate::extraction::ExtractionClient;
use crate::kernel::{BaseAI, BaseExtractor, RetryPolicy};
use crate::models::{AnalysisReport, ExtractionResult, IndustryTrend, JobPosting, SearchCriteria};
use crate::normalize::{normalize, Record};
use crate::query::{industry_trends_query, job_search_query};
use crate::synthesis::SynthesisClient;

pub const NO_JOBS_MESSAGE: &str = "No job listing found matching your criteria. \
Try adjusting your search parameters or try different job sites.";

const JOB_SEARCH_FALLBACK_HINT: &str =
    "Please try again with different search parameters or check your internet connection.";

const TRENDS_FALLBACK_HINT: &str =
    "Please try again with a different industry category or check your internet connection.";

pub fn no_trends_message(category: &str) -> String {
    format!(
        "No industry trends data available for {}. Try a different industry category.",
        category
    )
}

// =============================================================================
// States and outcomes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    BuildQuery,
    Extract,
    Normalize,
    EmptyResult,
    Synthesize,
    Done,
    Error,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PipelineState::Done | PipelineState::EmptyResult | PipelineState::Error
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PipelineState::BuildQuery => "BUILD_QUERY",
            PipelineState::Extract => "EXTRACT",
            PipelineState::Normalize => "NORMALIZE",
            PipelineState::EmptyResult => "EMPTY_RESULT",
            PipelineState::Synthesize => "SYNTHESIZE",
            PipelineState::Done => "DONE",
            PipelineState::Error => "ERROR",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a flow ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Records were found and synthesized.
    Report(AnalysisReport),
    /// Nothing usable was extracted. A normal outcome, not an error.
    NoResults { message: String },
    /// A remote call failed. `message` is ready for display.
    Failed { error: RemoteError, message: String },
}

impl PipelineOutcome {
    pub fn terminal_state(&self) -> PipelineState {
        match self {
            PipelineOutcome::Report(_) => PipelineState::Done,
            PipelineOutcome::NoResults { .. } => PipelineState::EmptyResult,
            PipelineOutcome::Failed { .. } => PipelineState::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PipelineOutcome::Failed { .. })
    }

    /// Display text: the report verbatim, or the fixed fallback message.
    pub fn into_message(self) -> String {
        match self {
            PipelineOutcome::Report(report) => report.into_string(),
            PipelineOutcome::NoResults { message } | PipelineOutcome::Failed { message, .. } => {
                message
            }
        }
    }
}

// =============================================================================
// Pipeline
// =============================================================================

#[derive(Clone)]
pub struct JobHuntingPipeline {
    extraction: ExtractionClient,
    synthesis: SynthesisClient,
}

/// Per-flow tracker that logs every transition.
struct Flow {
    name: &'static str,
    state: PipelineState,
}

impl Flow {
    fn start(name: &'static str) -> Self {
        tracing::info!(flow = name, state = %PipelineState::BuildQuery, "Pipeline started");
        Self {
            name,
            state: PipelineState::BuildQuery,
        }
    }

    fn advance(&mut self, next: PipelineState) {
        tracing::debug!(flow = self.name, from = %self.state, to = %next, "Pipeline transition");
        self.state = next;
        if next.is_terminal() {
            tracing::info!(flow = self.name, state = %next, "Pipeline finished");
        }
    }
}

impl JobHuntingPipeline {
    pub fn new(
        extractor: Arc<dyn BaseExtractor>,
        ai: Arc<dyn BaseAI>,
        extraction_policy: RetryPolicy,
        synthesis_policy: RetryPolicy,
    ) -> Self {
        Self {
            extraction: ExtractionClient::new(extractor, extraction_policy),
            synthesis: SynthesisClient::new(ai, synthesis_policy),
        }
    }

    /// Find postings matching `criteria` and analyze them.
    pub async fn search_jobs(&self, criteria: &SearchCriteria) -> PipelineOutcome {
        let mut flow = Flow::start("job_search");

        let query = job_search_query(criteria);
        tracing::info!(urls = ?query.urls, "Searching for jobs");

        flow.advance(PipelineState::Extract);
        let extracted = self.extraction.extract(&query).await;

        let jobs: Vec<JobPosting> = match validated(&mut flow, &extracted) {
            Ok(records) => records,
            Err(error) => return failed(&mut flow, error, job_search_error_message),
        };

        if jobs.is_empty() {
            flow.advance(PipelineState::EmptyResult);
            return PipelineOutcome::NoResults {
                message: NO_JOBS_MESSAGE.to_string(),
            };
        }

        flow.advance(PipelineState::Synthesize);
        match self.synthesis.analyze_jobs(&jobs, criteria).await {
            Ok(report) => {
                flow.advance(PipelineState::Done);
                PipelineOutcome::Report(report)
            }
            Err(error) => failed(&mut flow, error, job_search_error_message),
        }
    }

    /// Look up and analyze labor-market trends for an industry category.
    pub async fn industry_trends(&self, category: &str) -> PipelineOutcome {
        let mut flow = Flow::start("industry_trends");

        let query = industry_trends_query(category);
        tracing::info!(urls = ?query.urls, "Searching for industry trends");

        flow.advance(PipelineState::Extract);
        let extracted = self.extraction.extract(&query).await;

        let trends: Vec<IndustryTrend> = match validated(&mut flow, &extracted) {
            Ok(records) => records,
            Err(error) => return failed(&mut flow, error, trends_error_message),
        };

        if trends.is_empty() {
            flow.advance(PipelineState::EmptyResult);
            return PipelineOutcome::NoResults {
                message: no_trends_message(category),
            };
        }

        flow.advance(PipelineState::Synthesize);
        match self.synthesis.analyze_trends(&trends, category).await {
            Ok(report) => {
                flow.advance(PipelineState::Done);
                PipelineOutcome::Report(report)
            }
            Err(error) => failed(&mut flow, error, trends_error_message),
        }
    }

    /// Display-string form of [`Self::search_jobs`].
    pub async fn find_jobs(
        &self,
        job_title: &str,
        location: &str,
        experience_years: f32,
        skills: &[String],
    ) -> String {
        let criteria = SearchCriteria::new(job_title, location, experience_years, skills.to_vec());
        self.search_jobs(&criteria).await.into_message()
    }

    /// Display-string form of [`Self::industry_trends`].
    pub async fn get_industry_trends(&self, job_category: &str) -> String {
        self.industry_trends(job_category).await.into_message()
    }
}

/// Normalize, or surface the extraction error when the call itself failed
/// and left nothing to normalize.
fn validated<R: Record>(
    flow: &mut Flow,
    extracted: &ExtractionResult,
) -> Result<Vec<R>, RemoteError> {
    flow.advance(PipelineState::Normalize);
    let records = normalize::<R>(extracted);

    match &extracted.error {
        Some(error) if records.is_empty() => Err(error.clone()),
        _ => {
            tracing::info!(count = records.len(), key = R::COLLECTION_KEY, "Records validated");
            Ok(records)
        }
    }
}

fn failed(
    flow: &mut Flow,
    error: RemoteError,
    message: fn(&RemoteError) -> String,
) -> PipelineOutcome {
    tracing::error!(flow = flow.name, error = %error, "Pipeline failed");
    flow.advance(PipelineState::Error);
    PipelineOutcome::Failed {
        message: message(&error),
        error,
    }
}

pub fn job_search_error_message(error: &RemoteError) -> String {
    format!(
        "An error occurred while searching for jobs: {}\n\n{}",
        error,
        error.hint(JOB_SEARCH_FALLBACK_HINT)
    )
}

pub fn trends_error_message(error: &RemoteError) -> String {
    format!(
        "An error occurred while fetching industry trends: {}\n\n{}",
        error,
        error.hint(TRENDS_FALLBACK_HINT)
    )
}
