use chrono::{NaiveDateTime, Utc};
use tracing::{debug, info};

use super::{FilterOutcome, JobFilter};
use crate::constants::{FIELD_POSTED_DATE, STAGE_DATE};
use crate::pipeline::processing::dates::parse_posted_date;
use crate::types::JobRecord;

/// Drops postings older than a maximum age. Dates that cannot be parsed are
/// kept.
#[derive(Debug, Clone, Default)]
pub struct DateFilter {
    max_age_hours: Option<u64>,
    reference_time: Option<NaiveDateTime>,
}

impl DateFilter {
    pub fn new(max_age_hours: u64) -> Self {
        Self {
            max_age_hours: Some(max_age_hours).filter(|h| *h > 0),
            reference_time: None,
        }
    }

    /// Measure ages against a fixed instant instead of the wall clock
    pub fn with_reference_time(mut self, now: NaiveDateTime) -> Self {
        self.reference_time = Some(now);
        self
    }

    fn is_within(posted: NaiveDateTime, now: NaiveDateTime, max_age_hours: u64) -> bool {
        let limit_secs = i64::try_from(max_age_hours.saturating_mul(3600)).unwrap_or(i64::MAX);
        (now - posted).num_seconds() <= limit_secs
    }
}

impl JobFilter for DateFilter {
    fn name(&self) -> &'static str {
        STAGE_DATE
    }

    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome {
        let Some(max_age_hours) = self.max_age_hours else {
            return FilterOutcome::pass_through(records);
        };
        let now = self.reference_time.unwrap_or_else(|| Utc::now().naive_utc());

        let original_count = records.len();
        let kept: Vec<JobRecord> = records
            .into_iter()
            .filter(|record| match parse_posted_date(record.text(FIELD_POSTED_DATE), now) {
                Some(posted) => Self::is_within(posted, now, max_age_hours),
                None => {
                    debug!(
                        posted_date = record.text(FIELD_POSTED_DATE),
                        "Keeping record with unparseable posted date"
                    );
                    true
                }
            })
            .collect();

        let outcome = FilterOutcome::kept(original_count, kept);
        info!(
            "Date filter: kept {} jobs posted within {} hours (filtered out {})",
            outcome.stats.final_count, max_age_hours, outcome.stats.filtered_out
        );
        outcome
    }
}
