use tracing::{debug, info};

use super::{contains_any, prepare_terms, FilterOutcome, JobFilter};
use crate::constants::{FIELD_COMPANY, STAGE_COMPANY};
use crate::types::JobRecord;

/// Include/exclude by company name. Matching is case-insensitive substring,
/// so "BadCompany" also catches "BadCompany Ltd". Exclusion always wins.
#[derive(Debug, Clone, Default)]
pub struct CompanyFilter {
    include_companies: Vec<String>,
    exclude_companies: Vec<String>,
}

impl CompanyFilter {
    pub fn new(include_companies: &[String], exclude_companies: &[String]) -> Self {
        Self {
            include_companies: prepare_terms(include_companies),
            exclude_companies: prepare_terms(exclude_companies),
        }
    }

    fn accepts(&self, record: &JobRecord) -> bool {
        let company = record.text(FIELD_COMPANY).trim().to_lowercase();

        if contains_any(&company, &self.exclude_companies) {
            debug!(company = %company, "Dropping excluded company");
            return false;
        }

        self.include_companies.is_empty() || contains_any(&company, &self.include_companies)
    }
}

impl JobFilter for CompanyFilter {
    fn name(&self) -> &'static str {
        STAGE_COMPANY
    }

    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome {
        if self.include_companies.is_empty() && self.exclude_companies.is_empty() {
            return FilterOutcome::pass_through(records);
        }

        let original_count = records.len();
        let kept: Vec<JobRecord> = records.into_iter().filter(|r| self.accepts(r)).collect();

        let outcome = FilterOutcome::kept(original_count, kept);
        info!(
            "Company filter: kept {} jobs (filtered out {})",
            outcome.stats.final_count, outcome.stats.filtered_out
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn company(name: &str) -> JobRecord {
        JobRecord::new().with("title", "Engineer").with("company", name)
    }

    #[test]
    fn test_exclude_matches_despite_suffix() {
        let filter = CompanyFilter::new(&[], &names(&["BadCompany"]));
        let outcome = filter.filter(vec![company("BadCompany Ltd"), company("GoodCo")]);

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].text("company"), "GoodCo");
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let filter = CompanyFilter::new(&names(&["acme"]), &names(&["acme labs"]));
        let outcome = filter.filter(vec![
            company("Acme Labs"),
            company("Acme Corp"),
            company("Initech"),
        ]);

        let kept: Vec<&str> = outcome.records.iter().map(|r| r.text("company")).collect();
        assert_eq!(kept, vec!["Acme Corp"]);
        assert_eq!(outcome.stats.filtered_out, 2);
    }

    #[test]
    fn test_missing_company_fails_include_list() {
        let filter = CompanyFilter::new(&names(&["acme"]), &[]);
        let outcome = filter.filter(vec![JobRecord::new().with("title", "Engineer")]);
        assert!(outcome.records.is_empty());
    }
}
