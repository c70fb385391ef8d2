//! Job hunting assistant CLI
//!
//! Runs a job search and an industry trend lookup and prints the reports.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use firecrawl_client::FirecrawlClient;
use job_hunter::{
    Config, FirecrawlAdapter, JobHuntingPipeline, OpenAIAdapter, PipelineOutcome, SearchCriteria,
    JOB_CATEGORIES,
};
use openai_client::OpenAIClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "job-hunter")]
#[command(about = "Find jobs and industry trends, analyzed by an LLM")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search job boards, then analyze trends for the chosen category
    Search {
        /// Job title (e.g. "Software Engineer")
        #[arg(long)]
        title: String,

        /// Where you want to work (e.g. "Bangalore", "Remote")
        #[arg(long)]
        location: String,

        /// Years of experience (0-30)
        #[arg(long, default_value_t = 2.0)]
        experience: f32,

        /// Comma-separated skills (e.g. "Python, SQL")
        #[arg(long, default_value = "")]
        skills: String,

        /// Industry category for the trend analysis
        #[arg(long, default_value = "Information Technology")]
        category: String,

        /// Only run the job search
        #[arg(long)]
        skip_trends: bool,
    },

    /// Analyze trends for one industry category
    Trends {
        #[arg(long)]
        category: String,
    },

    /// List the suggested industry categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_hunter=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Categories => {
            for category in JOB_CATEGORIES {
                println!("{}", category);
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Trends { category } => {
            let pipeline = build_pipeline()?;
            let outcome = pipeline.industry_trends(&category).await;
            Ok(report(&format!("📈 {} Industry Trends Analysis", category), outcome))
        }
        Commands::Search {
            title,
            location,
            experience,
            skills,
            category,
            skip_trends,
        } => {
            let criteria = SearchCriteria::new(
                title,
                location,
                experience,
                SearchCriteria::parse_skills(&skills),
            );
            criteria.validate().context("Invalid search criteria")?;

            if criteria.skills().is_empty() {
                tracing::warn!("No skills provided. Adding skills will improve job matching.");
            }

            let pipeline = build_pipeline()?;

            let jobs = pipeline.search_jobs(&criteria).await;
            let jobs_failed = jobs.is_error();
            let code = report("💼 Job Recommendations", jobs);

            if jobs_failed || skip_trends {
                return Ok(code);
            }

            let trends = pipeline.industry_trends(&category).await;
            Ok(report(&format!("📈 {} Industry Trends Analysis", category), trends))
        }
    }
}

fn build_pipeline() -> Result<JobHuntingPipeline> {
    let config = Config::from_env()?;

    let firecrawl = FirecrawlClient::new(&config.firecrawl_api_key)
        .context("Failed to create Firecrawl client")?
        .with_base_url(&config.firecrawl_api_url)
        .with_poll_timeout(config.extract_poll_timeout());

    let openai = OpenAIClient::new(&config.llm_api_key)
        .with_base_url(&config.llm_base_url)
        .with_timeout(config.synthesis_timeout)
        .context("Failed to create LLM client")?;

    tracing::info!(
        firecrawl = %config.firecrawl_api_url,
        llm = %config.llm_base_url,
        model = %config.llm_model,
        "Remote services configured"
    );

    Ok(JobHuntingPipeline::new(
        Arc::new(FirecrawlAdapter::new(Arc::new(firecrawl))),
        Arc::new(OpenAIAdapter::new(Arc::new(openai), &config.llm_model)),
        config.extraction_policy(),
        config.synthesis_policy(),
    ))
}

/// Print an outcome under `title`; errors go to stderr.
fn report(title: &str, outcome: PipelineOutcome) -> ExitCode {
    match outcome {
        PipelineOutcome::Report(report) => {
            println!("{}\n\n{}\n", title, report);
            ExitCode::SUCCESS
        }
        PipelineOutcome::NoResults { message } => {
            println!("{}\n\n{}\n", title, message);
            ExitCode::SUCCESS
        }
        PipelineOutcome::Failed { message, .. } => {
            eprintln!("❌ {}", message);
            ExitCode::FAILURE
        }
    }
}
