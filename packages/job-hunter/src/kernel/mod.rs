//! Kernel module - remote service seams and their production adapters.

pub mod ai;
pub mod firecrawl;
pub mod resilience;
pub mod traits;

pub use ai::OpenAIAdapter;
pub use firecrawl::FirecrawlAdapter;
pub use resilience::{call_with_policy, RetryPolicy};
pub use traits::{BaseAI, BaseExtractor, RawExtraction};
