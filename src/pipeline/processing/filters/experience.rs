use tracing::info;

use super::{prepare_terms, FilterOutcome, JobFilter};
use crate::constants::STAGE_EXPERIENCE;
use crate::pipeline::processing::classify::ensure_experience_level;
use crate::types::JobRecord;

/// Keeps records whose experience level is in the allowed set, classifying
/// records on demand and stamping the level onto them
#[derive(Debug, Clone, Default)]
pub struct ExperienceFilter {
    allowed_levels: Vec<String>,
}

impl ExperienceFilter {
    pub fn new(allowed_levels: &[String]) -> Self {
        Self {
            allowed_levels: prepare_terms(allowed_levels),
        }
    }
}

impl JobFilter for ExperienceFilter {
    fn name(&self) -> &'static str {
        STAGE_EXPERIENCE
    }

    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome {
        if self.allowed_levels.is_empty() {
            return FilterOutcome::pass_through(records);
        }

        let original_count = records.len();
        let kept: Vec<JobRecord> = records
            .into_iter()
            .filter_map(|mut record| {
                let level = ensure_experience_level(&mut record).to_lowercase();
                self.allowed_levels.contains(&level).then_some(record)
            })
            .collect();

        let outcome = FilterOutcome::kept(original_count, kept);
        info!(
            "Experience filter: kept {} jobs (filtered out {})",
            outcome.stats.final_count, outcome.stats.filtered_out
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_filters_by_classified_level() {
        let records = vec![
            JobRecord::new().with("title", "Junior Developer"),
            JobRecord::new().with("title", "Senior Developer"),
            JobRecord::new().with("title", "Developer"),
        ];

        let outcome = ExperienceFilter::new(&levels(&["Senior", "entry"])).filter(records);

        let titles: Vec<&str> = outcome.records.iter().map(|r| r.text("title")).collect();
        assert_eq!(titles, vec!["Junior Developer", "Senior Developer"]);
        assert_eq!(outcome.records[0].get("experience_level"), Some("entry"));
        assert_eq!(outcome.stats.filtered_out, 1);
    }

    #[test]
    fn test_applying_twice_matches_applying_once() {
        let records = vec![
            JobRecord::new().with("title", "Graduate Analyst"),
            JobRecord::new().with("title", "Head of Data"),
            JobRecord::new().with("title", "Engineer"),
        ];
        let filter = ExperienceFilter::new(&levels(&["mid", "senior"]));

        let once = filter.filter(records);
        let twice = filter.filter(once.records.clone());
        assert_eq!(once.records, twice.records);
        assert_eq!(twice.stats.filtered_out, 0);
    }

    #[test]
    fn test_empty_allowed_set_passes_everything() {
        let records = vec![JobRecord::new().with("title", "Intern")];
        let outcome = ExperienceFilter::default().filter(records.clone());
        assert_eq!(outcome.records, records);
        // pass-through does not classify
        assert!(!outcome.records[0].contains("experience_level"));
    }
}
