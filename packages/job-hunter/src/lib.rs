//! Job hunting pipeline.
//!
//! Turns search criteria into a handful of job board or salary research URLs,
//! has a remote extraction service pull schema-shaped records from them,
//! validates those records, and asks a language model for a sectioned report
//! built only from what was extracted.
//!
//! ```rust,ignore
//! use job_hunter::{JobHuntingPipeline, RetryPolicy};
//!
//! let pipeline = JobHuntingPipeline::new(extractor, ai, RetryPolicy::default(), RetryPolicy::default());
//! let report = pipeline
//!     .find_jobs("Data Scientist", "New York", 3.0, &["Python".into(), "SQL".into()])
//!     .await;
//! ```

pub mod config;
pub mod error;
pub mod extraction;
pub mod kernel;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod query;
pub mod synthesis;
pub mod testing;

pub use config::Config;
pub use error::{CriteriaError, RemoteError};
pub use kernel::{BaseAI, BaseExtractor, FirecrawlAdapter, OpenAIAdapter, RetryPolicy};
pub use models::{
    AnalysisReport, ExtractionResult, IndustryTrend, JobPosting, SearchCriteria, JOB_CATEGORIES,
};
pub use pipeline::{JobHuntingPipeline, PipelineOutcome, PipelineState};
