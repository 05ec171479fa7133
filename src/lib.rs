pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod types;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;

pub use app::{deduplicate_jobs, filter_jobs_by_criteria, FilterRunResult, FilterUseCase};
pub use config::Config;
pub use error::{JobScraperError, Result};
pub use types::{ExperienceLevel, JobRecord};
