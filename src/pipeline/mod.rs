// Filtering pipeline: normalization helpers, filter stages, deduplication and
// the composer that chains them

pub mod filter_pipeline;
pub mod processing;

// Re-export key types and functions from each stage
pub use filter_pipeline::{FilterPipeline, PipelineOutcome, PipelineReport, StageReport};
pub use processing::dedup::{job_signature, similarity, Deduplicator};
pub use processing::filters::{
    CompanyFilter, DateFilter, ExperienceFilter, FilterCriteria, FilterOutcome, FilterStats,
    JobFilter, JobTypeFilter, KeywordFilter, LocationFilter, MainJobFilter, SalaryFilter,
};
