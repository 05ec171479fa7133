use tracing::info;

use super::{FilterOutcome, JobFilter};
use crate::constants::{FIELD_SALARY, STAGE_SALARY};
use crate::pipeline::processing::normalize::extract_salary;
use crate::types::JobRecord;

/// Salary range check on the first figure in the salary text. Records with
/// no usable salary are always kept.
#[derive(Debug, Clone, Default)]
pub struct SalaryFilter {
    min_salary: Option<u64>,
    max_salary: Option<u64>,
}

impl SalaryFilter {
    /// A zero bound counts as unset
    pub fn new(min_salary: Option<u64>, max_salary: Option<u64>) -> Self {
        Self {
            min_salary: min_salary.filter(|v| *v > 0),
            max_salary: max_salary.filter(|v| *v > 0),
        }
    }

    fn accepts(&self, record: &JobRecord) -> bool {
        let Some(salary) = extract_salary(record.text(FIELD_SALARY)) else {
            return true;
        };

        self.min_salary.map_or(true, |min| salary >= min)
            && self.max_salary.map_or(true, |max| salary <= max)
    }
}

impl JobFilter for SalaryFilter {
    fn name(&self) -> &'static str {
        STAGE_SALARY
    }

    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome {
        if self.min_salary.is_none() && self.max_salary.is_none() {
            return FilterOutcome::pass_through(records);
        }

        let original_count = records.len();
        let kept: Vec<JobRecord> = records.into_iter().filter(|r| self.accepts(r)).collect();

        let outcome = FilterOutcome::kept(original_count, kept);
        info!(
            "Salary filter: kept {} jobs (filtered out {})",
            outcome.stats.final_count, outcome.stats.filtered_out
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary(text: &str) -> JobRecord {
        JobRecord::new().with("title", "Engineer").with("salary", text)
    }

    #[test]
    fn test_below_minimum_dropped_unknown_kept() {
        let filter = SalaryFilter::new(Some(90_000), None);
        assert!(filter.filter(vec![salary("$80,000")]).records.is_empty());
        assert_eq!(filter.filter(vec![salary("N/A")]).records.len(), 1);
        assert_eq!(filter.filter(vec![JobRecord::new()]).records.len(), 1);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let filter = SalaryFilter::new(Some(100_000), Some(150_000));
        let outcome = filter.filter(vec![
            salary("$100,000"),
            salary("$150k"),
            salary("$160,000 - $180,000"),
            salary("$95,000-$125,000"),
        ]);

        let kept: Vec<&str> = outcome.records.iter().map(|r| r.text("salary")).collect();
        assert_eq!(kept, vec!["$100,000", "$150k"]);
    }

    #[test]
    fn test_zero_bounds_disable_the_stage() {
        let records = vec![salary("$1")];
        let outcome = SalaryFilter::new(Some(0), Some(0)).filter(records.clone());
        assert_eq!(outcome.records, records);
    }
}
