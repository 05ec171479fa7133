use anyhow::Result;
use chrono::{NaiveDateTime, Utc};
use tracing::info;

use crate::app::ports::JobOutputPort;
use crate::app::sort::sort_records;
use crate::config::Config;
use crate::pipeline::processing::dedup::Deduplicator;
use crate::pipeline::processing::filters::{
    FilterCriteria, JobFilter, LocationFilter, MainJobFilter,
};
use crate::pipeline::{FilterPipeline, PipelineReport};
use crate::types::JobRecord;

/// Result of one end-to-end filtering run
#[derive(Debug, Clone)]
pub struct FilterRunResult {
    pub input_count: usize,
    pub records: Vec<JobRecord>,
    pub report: PipelineReport,
}

impl FilterRunResult {
    pub fn output_count(&self) -> usize {
        self.records.len()
    }
}

/// Use case for filtering a scraped batch: aggregate filter, optional
/// location stage, deduplication, then sorting and output
pub struct FilterUseCase {
    config: Config,
    reference_time: Option<NaiveDateTime>,
    output: Box<dyn JobOutputPort>,
}

impl FilterUseCase {
    pub fn new(config: Config, output: Box<dyn JobOutputPort>) -> Self {
        Self {
            config,
            reference_time: None,
            output,
        }
    }

    /// Evaluate posting dates against a fixed instant instead of the wall clock
    pub fn with_reference_time(mut self, now: NaiveDateTime) -> Self {
        self.reference_time = Some(now);
        self
    }

    /// Assemble the stages this config asks for
    pub fn build_pipeline(&self, now: NaiveDateTime) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new().with_filter(
            MainJobFilter::new(self.config.filters.clone()).with_reference_time(now),
        );

        let location = &self.config.location;
        if location.is_active() {
            pipeline = pipeline.with_filter(
                LocationFilter::new(&location.preferred, &location.excluded)
                    .allow_remote(location.allow_remote)
                    .exact_match(location.exact_match),
            );
        }

        if !self.config.output.include_duplicates {
            pipeline = pipeline.with_filter(Deduplicator::new(self.config.output.similarity_threshold));
        }

        pipeline
    }

    /// Filter, sort and write one batch
    pub fn run(&self, records: Vec<JobRecord>) -> Result<FilterRunResult> {
        let now = self
            .reference_time
            .unwrap_or_else(|| Utc::now().naive_utc());
        let input_count = records.len();

        let pipeline = self.build_pipeline(now);
        info!(stages = ?pipeline.stage_names(), "Running filter pipeline");
        let outcome = pipeline.apply(records);
        let mut records = outcome.records;

        if let Some(field) = self.config.output.sort_field() {
            sort_records(&mut records, field, self.config.output.descending(), now);
        }

        self.output.write_jobs(&records)?;
        info!(
            "Wrote {} of {} jobs to {}",
            records.len(),
            input_count,
            self.output.describe()
        );

        Ok(FilterRunResult {
            input_count,
            records,
            report: outcome.report,
        })
    }
}

/// One-shot aggregate filter with the given criteria
pub fn filter_jobs_by_criteria(records: Vec<JobRecord>, criteria: &FilterCriteria) -> Vec<JobRecord> {
    MainJobFilter::new(criteria.clone()).filter(records).records
}

/// One-shot deduplication at the given similarity threshold
pub fn deduplicate_jobs(records: Vec<JobRecord>, similarity_threshold: f64) -> Vec<JobRecord> {
    Deduplicator::new(similarity_threshold).filter(records).records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MemoryOutput {
        written: Arc<Mutex<Vec<JobRecord>>>,
    }

    impl JobOutputPort for MemoryOutput {
        fn write_jobs(&self, records: &[JobRecord]) -> Result<()> {
            self.written.lock().unwrap().extend_from_slice(records);
            Ok(())
        }

        fn describe(&self) -> String {
            "memory".to_string()
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    fn job(title: &str, company: &str, location: &str, posted: &str) -> JobRecord {
        JobRecord::new()
            .with("title", title)
            .with("company", company)
            .with("location", location)
            .with("posted_date", posted)
    }

    fn batch() -> Vec<JobRecord> {
        vec![
            job("Senior Python Developer", "Google Inc", "San Francisco, CA", "2024-01-10"),
            job("Senior Python Developer", "Google", "San Francisco", "2024-01-12"),
            job("Junior Python Developer", "Acme", "Austin, TX", "1 day ago"),
            job("Python Developer", "BadCompany", "Remote", "today"),
        ]
    }

    #[test]
    fn test_run_filters_dedups_sorts_and_writes() {
        let mut config = Config::default();
        config.filters.exclude_companies = vec!["BadCompany".to_string()];

        let output = MemoryOutput::default();
        let use_case =
            FilterUseCase::new(config, Box::new(output.clone())).with_reference_time(now());
        let result = use_case.run(batch()).unwrap();

        assert_eq!(result.input_count, 4);
        assert_eq!(result.output_count(), 2);
        // newest first by default
        assert_eq!(result.records[0].text("company"), "Acme");
        assert_eq!(result.records[1].text("company"), "Google Inc");
        assert_eq!(*output.written.lock().unwrap(), result.records);

        let names: Vec<&str> = result.report.stages.iter().map(|s| s.stage.as_str()).collect();
        assert_eq!(names, vec!["main_job_filter", "duplicate_remover"]);
    }

    #[test]
    fn test_include_duplicates_skips_dedup_stage() {
        let mut config = Config::default();
        config.output.include_duplicates = true;
        config.output.sort_by = Some("none".to_string());

        let use_case = FilterUseCase::new(config, Box::new(MemoryOutput::default()))
            .with_reference_time(now());
        let result = use_case.run(batch()).unwrap();

        assert_eq!(result.records, batch());
        assert!(result.report.stage("duplicate_remover").is_none());
    }

    #[test]
    fn test_location_stage_added_when_configured() {
        let mut config = Config::default();
        config.location.preferred = vec!["Austin".to_string()];

        let use_case = FilterUseCase::new(config, Box::new(MemoryOutput::default()))
            .with_reference_time(now());
        assert_eq!(
            use_case.build_pipeline(now()).stage_names(),
            vec!["main_job_filter", "location_filter", "duplicate_remover"]
        );

        let result = use_case.run(batch()).unwrap();
        let companies: Vec<&str> = result.records.iter().map(|r| r.text("company")).collect();
        // remote postings pass the location stage
        assert_eq!(companies, vec!["BadCompany", "Acme"]);
    }

    #[test]
    fn test_facade_functions() {
        let criteria = FilterCriteria {
            experience_levels: vec!["entry".to_string()],
            ..FilterCriteria::default()
        };
        let kept = filter_jobs_by_criteria(batch(), &criteria);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].experience_level(), Some("entry"));

        assert_eq!(deduplicate_jobs(batch(), 0.9).len(), 3);
    }
}
