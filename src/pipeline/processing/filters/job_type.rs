use tracing::info;

use super::{FilterOutcome, JobFilter};
use crate::constants::{FIELD_JOB_TYPE, FIELD_LOCATION, FIELD_TITLE, STAGE_JOB_TYPE};
use crate::types::JobRecord;

/// Remote-only and full-time-only screens.
///
/// Full-time screening is permissive: a record is only rejected when its job
/// type says "part" and neither the job type nor the title says full-time.
/// Missing job type information is assumed to be full-time.
#[derive(Debug, Clone, Default)]
pub struct JobTypeFilter {
    remote_only: bool,
    full_time_only: bool,
}

impl JobTypeFilter {
    pub fn new(remote_only: bool, full_time_only: bool) -> Self {
        Self {
            remote_only,
            full_time_only,
        }
    }

    fn accepts(&self, record: &JobRecord) -> bool {
        let location = record.text(FIELD_LOCATION).to_lowercase();
        let job_type = record.text(FIELD_JOB_TYPE).to_lowercase();

        if self.remote_only && !location.contains("remote") && !job_type.contains("remote") {
            return false;
        }

        if self.full_time_only {
            let title = record.text(FIELD_TITLE).to_lowercase();
            let says_full_time = job_type.contains("full") || title.contains("full-time");
            if !says_full_time && job_type.contains("part") {
                return false;
            }
        }

        true
    }
}

impl JobFilter for JobTypeFilter {
    fn name(&self) -> &'static str {
        STAGE_JOB_TYPE
    }

    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome {
        if !self.remote_only && !self.full_time_only {
            return FilterOutcome::pass_through(records);
        }

        let original_count = records.len();
        let kept: Vec<JobRecord> = records.into_iter().filter(|r| self.accepts(r)).collect();

        let outcome = FilterOutcome::kept(original_count, kept);
        info!(
            "Job type filter: kept {} jobs (filtered out {})",
            outcome.stats.final_count, outcome.stats.filtered_out
        );
        outcome
    }
}
