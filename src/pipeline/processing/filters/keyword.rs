use tracing::info;

use super::{contains_any, prepare_terms, FilterOutcome, JobFilter};
use crate::constants::{FIELD_DESCRIPTION, FIELD_TITLE, STAGE_KEYWORD};
use crate::types::JobRecord;

/// Keyword screen over title and description: at least one required keyword
/// must appear and no excluded keyword may appear
#[derive(Debug, Clone, Default)]
pub struct KeywordFilter {
    required_keywords: Vec<String>,
    excluded_keywords: Vec<String>,
}

impl KeywordFilter {
    pub fn new(required_keywords: &[String], excluded_keywords: &[String]) -> Self {
        Self {
            required_keywords: prepare_terms(required_keywords),
            excluded_keywords: prepare_terms(excluded_keywords),
        }
    }

    fn accepts(&self, record: &JobRecord) -> bool {
        let content = format!(
            "{} {}",
            record.text(FIELD_TITLE),
            record.text(FIELD_DESCRIPTION)
        )
        .to_lowercase();

        if !self.required_keywords.is_empty() && !contains_any(&content, &self.required_keywords) {
            return false;
        }

        !contains_any(&content, &self.excluded_keywords)
    }
}

impl JobFilter for KeywordFilter {
    fn name(&self) -> &'static str {
        STAGE_KEYWORD
    }

    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome {
        if self.required_keywords.is_empty() && self.excluded_keywords.is_empty() {
            return FilterOutcome::pass_through(records);
        }

        let original_count = records.len();
        let kept: Vec<JobRecord> = records.into_iter().filter(|r| self.accepts(r)).collect();

        let outcome = FilterOutcome::kept(original_count, kept);
        info!(
            "Keyword filter: kept {} jobs (filtered out {})",
            outcome.stats.final_count, outcome.stats.filtered_out
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_required_keywords_match_title_or_description() {
        let filter = KeywordFilter::new(&terms(&["python", "rust"]), &[]);
        let outcome = filter.filter(vec![
            JobRecord::new().with("title", "Python Developer"),
            JobRecord::new()
                .with("title", "Backend Engineer")
                .with("description", "Services written in Rust"),
            JobRecord::new().with("title", "Java Developer"),
        ]);
        assert_eq!(outcome.records.len(), 2);
    }

    #[test]
    fn test_excluded_keywords_drop() {
        let filter = KeywordFilter::new(&[], &terms(&["Sales"]));
        let outcome = filter.filter(vec![
            JobRecord::new().with("title", "Sales Engineer"),
            JobRecord::new().with("title", "Platform Engineer"),
        ]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].text("title"), "Platform Engineer");
    }

    #[test]
    fn test_record_without_text_fails_requirement() {
        let filter = KeywordFilter::new(&terms(&["python"]), &[]);
        let outcome = filter.filter(vec![JobRecord::new()]);
        assert!(outcome.records.is_empty());
    }
}
