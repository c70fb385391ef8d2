//! Synthesis client: validated records in, formatted report out.

use std::sync::Arc;

use crate::error::RemoteError;
use crate::kernel::{call_with_policy, BaseAI, RetryPolicy};
use crate::models::{AnalysisReport, IndustryTrend, JobPosting, SearchCriteria};
use crate::normalize::records_to_prompt_json;
use crate::prompts;

#[derive(Clone)]
pub struct SynthesisClient {
    ai: Arc<dyn BaseAI>,
    policy: RetryPolicy,
}

impl SynthesisClient {
    pub fn new(ai: Arc<dyn BaseAI>, policy: RetryPolicy) -> Self {
        Self { ai, policy }
    }

    /// Pick and assess the best matching postings for `criteria`.
    pub async fn analyze_jobs(
        &self,
        jobs: &[JobPosting],
        criteria: &SearchCriteria,
    ) -> Result<AnalysisReport, RemoteError> {
        let prompt = prompts::format_analyze_jobs_prompt(
            &records_to_prompt_json(jobs),
            criteria.job_title(),
            criteria.location(),
            criteria.experience_years(),
            &criteria.skills_display(),
        );

        tracing::info!(jobs = jobs.len(), "Synthesizing job analysis");
        self.run("analyze_jobs", &prompt).await
    }

    /// Summarize salary, demand and skill trends for `category`.
    pub async fn analyze_trends(
        &self,
        trends: &[IndustryTrend],
        category: &str,
    ) -> Result<AnalysisReport, RemoteError> {
        let prompt =
            prompts::format_analyze_trends_prompt(&records_to_prompt_json(trends), category);

        tracing::info!(trends = trends.len(), category, "Synthesizing industry trends");
        self.run("analyze_trends", &prompt).await
    }

    async fn run(&self, operation: &str, prompt: &str) -> Result<AnalysisReport, RemoteError> {
        let content = call_with_policy(&self.policy, operation, || self.ai.complete(prompt)).await?;
        Ok(AnalysisReport(content))
    }
}
