use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    CompanyFilter, DateFilter, ExperienceFilter, FilterOutcome, FilterStats, JobFilter,
    JobTypeFilter, KeywordFilter, SalaryFilter,
};
use crate::constants::STAGE_MAIN;
use crate::types::JobRecord;

/// User filter preferences. Any option left empty, zero or false disables
/// the stage it governs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub experience_levels: Vec<String>,
    pub include_companies: Vec<String>,
    pub exclude_companies: Vec<String>,
    pub keywords: Vec<String>,
    pub exclude_keywords: Vec<String>,
    pub max_age_days: Option<u64>,
    pub min_salary: Option<u64>,
    pub max_salary: Option<u64>,
    pub remote_only: bool,
    pub full_time_only: bool,
}

impl FilterCriteria {
    fn has_company_rules(&self) -> bool {
        !self.include_companies.is_empty() || !self.exclude_companies.is_empty()
    }

    fn has_keyword_rules(&self) -> bool {
        !self.keywords.is_empty() || !self.exclude_keywords.is_empty()
    }

    fn max_age_hours(&self) -> Option<u64> {
        self.max_age_days
            .filter(|days| *days > 0)
            .map(|days| days.saturating_mul(24))
    }

    fn has_salary_rules(&self) -> bool {
        self.min_salary.unwrap_or(0) > 0 || self.max_salary.unwrap_or(0) > 0
    }

    fn has_job_type_rules(&self) -> bool {
        self.remote_only || self.full_time_only
    }
}

/// The aggregate filter: experience, company, keyword, date, salary and job
/// type stages in that fixed order, each built only when its criteria are set
#[derive(Debug, Clone, Default)]
pub struct MainJobFilter {
    criteria: FilterCriteria,
    reference_time: Option<NaiveDateTime>,
}

impl MainJobFilter {
    pub fn new(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            reference_time: None,
        }
    }

    /// Evaluate posting ages against a fixed instant
    pub fn with_reference_time(mut self, now: NaiveDateTime) -> Self {
        self.reference_time = Some(now);
        self
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Replace the criteria and filter in one call
    pub fn filter_jobs(&mut self, records: Vec<JobRecord>, criteria: FilterCriteria) -> FilterOutcome {
        self.criteria = criteria;
        self.filter(records)
    }

    /// The configured stages, in application order
    fn stages(&self) -> Vec<Box<dyn JobFilter>> {
        let criteria = &self.criteria;
        let mut stages: Vec<Box<dyn JobFilter>> = Vec::new();

        if !criteria.experience_levels.is_empty() {
            stages.push(Box::new(ExperienceFilter::new(&criteria.experience_levels)));
        }
        if criteria.has_company_rules() {
            stages.push(Box::new(CompanyFilter::new(
                &criteria.include_companies,
                &criteria.exclude_companies,
            )));
        }
        if criteria.has_keyword_rules() {
            stages.push(Box::new(KeywordFilter::new(
                &criteria.keywords,
                &criteria.exclude_keywords,
            )));
        }
        if let Some(hours) = criteria.max_age_hours() {
            let mut date_filter = DateFilter::new(hours);
            if let Some(now) = self.reference_time {
                date_filter = date_filter.with_reference_time(now);
            }
            stages.push(Box::new(date_filter));
        }
        if criteria.has_salary_rules() {
            stages.push(Box::new(SalaryFilter::new(
                criteria.min_salary,
                criteria.max_salary,
            )));
        }
        if criteria.has_job_type_rules() {
            stages.push(Box::new(JobTypeFilter::new(
                criteria.remote_only,
                criteria.full_time_only,
            )));
        }

        stages
    }
}

impl JobFilter for MainJobFilter {
    fn name(&self) -> &'static str {
        STAGE_MAIN
    }

    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome {
        let mut stats = FilterStats::new(records.len());
        let mut records = records;

        for stage in self.stages() {
            records = stage.filter(records).records;
            stats.record(format!("after_{}", stage.name()), records.len());
        }

        stats.finish(records.len());
        info!(
            "Main filter: {} → {} jobs",
            stats.original_count, stats.final_count
        );

        FilterOutcome { records, stats }
    }
}
