pub mod filter_use_case;
pub mod ports;
pub mod sort;

pub use filter_use_case::{deduplicate_jobs, filter_jobs_by_criteria, FilterRunResult, FilterUseCase};
