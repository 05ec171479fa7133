use serde::Serialize;
use tracing::info;

use crate::metrics::FilterMetrics;
use crate::pipeline::processing::filters::{FilterStats, JobFilter};
use crate::types::JobRecord;

/// Before/after counts for one stage of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageReport {
    pub stage: String,
    pub before: usize,
    pub after: usize,
    pub filtered_out: usize,
    /// The stage's own stats for this run
    pub stats: FilterStats,
}

/// Per-stage report for one pipeline run, in application order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub stages: Vec<StageReport>,
}

impl PipelineReport {
    /// Report for the first stage with the given name
    pub fn stage(&self, name: &str) -> Option<&StageReport> {
        self.stages.iter().find(|report| report.stage == name)
    }

    pub fn total_filtered_out(&self) -> usize {
        self.stages.iter().map(|report| report.filtered_out).sum()
    }
}

/// Result of running a pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub records: Vec<JobRecord>,
    pub report: PipelineReport,
}

/// Ordered composition of filter stages. Each stage receives the previous
/// stage's survivors; deduplication is just another stage the caller places.
#[derive(Default)]
pub struct FilterPipeline {
    stages: Vec<Box<dyn JobFilter>>,
}

impl FilterPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_filter(&mut self, stage: Box<dyn JobFilter>) {
        self.stages.push(stage);
    }

    /// Builder-style variant of [`FilterPipeline::add_filter`]
    pub fn with_filter(mut self, stage: impl JobFilter + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage in insertion order
    pub fn apply(&self, records: Vec<JobRecord>) -> PipelineOutcome {
        let input_count = records.len();
        info!("Starting filter pipeline with {} jobs", input_count);

        let total = self.stages.len();
        let mut records = records;
        let mut report = PipelineReport::default();

        for (index, stage) in self.stages.iter().enumerate() {
            let before = records.len();
            let outcome = stage.filter(records);
            records = outcome.records;
            let after = records.len();

            info!(
                "Filter {}/{} ({}): {} → {} jobs",
                index + 1,
                total,
                stage.name(),
                before,
                after
            );
            FilterMetrics::record_stage(stage.name(), before, after);

            report.stages.push(StageReport {
                stage: stage.name().to_string(),
                before,
                after,
                filtered_out: before.saturating_sub(after),
                stats: outcome.stats,
            });
        }

        info!(
            "Filter pipeline completed: {} → {} jobs",
            input_count,
            records.len()
        );
        FilterMetrics::record_pipeline_output(records.len());

        PipelineOutcome { records, report }
    }
}
