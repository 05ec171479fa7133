use tracing::info;

use super::{FilterOutcome, JobFilter};
use crate::constants::{FIELD_JOB_TYPE, FIELD_LOCATION, STAGE_LOCATION};
use crate::pipeline::processing::normalize::{is_remote, normalize_location};
use crate::types::JobRecord;

/// Location preferences. Remote postings pass automatically when allowed;
/// otherwise excluded locations drop a record and, if any preferred locations
/// are configured, a record must match one of them. Unknown locations are
/// kept.
#[derive(Debug, Clone)]
pub struct LocationFilter {
    preferred_locations: Vec<String>,
    excluded_locations: Vec<String>,
    allow_remote: bool,
    exact_match: bool,
}

impl Default for LocationFilter {
    fn default() -> Self {
        Self {
            preferred_locations: Vec::new(),
            excluded_locations: Vec::new(),
            allow_remote: true,
            exact_match: false,
        }
    }
}

impl LocationFilter {
    pub fn new(preferred_locations: &[String], excluded_locations: &[String]) -> Self {
        Self {
            preferred_locations: normalize_all(preferred_locations),
            excluded_locations: normalize_all(excluded_locations),
            ..Self::default()
        }
    }

    pub fn allow_remote(mut self, allow_remote: bool) -> Self {
        self.allow_remote = allow_remote;
        self
    }

    /// Require normalized locations to be equal rather than overlapping
    pub fn exact_match(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    /// Both sides are already normalized and non-empty
    fn matches(&self, job_location: &str, wanted: &str) -> bool {
        if self.exact_match {
            job_location == wanted
        } else {
            job_location.contains(wanted) || wanted.contains(job_location)
        }
    }

    fn accepts(&self, record: &JobRecord) -> bool {
        let raw_location = record.text(FIELD_LOCATION);

        if self.allow_remote && is_remote(raw_location, record.text(FIELD_JOB_TYPE)) {
            return true;
        }

        let location = normalize_location(raw_location);
        if location.is_empty() {
            return true;
        }

        if self
            .excluded_locations
            .iter()
            .any(|excluded| self.matches(&location, excluded))
        {
            return false;
        }

        self.preferred_locations.is_empty()
            || self
                .preferred_locations
                .iter()
                .any(|preferred| self.matches(&location, preferred))
    }
}

fn normalize_all(locations: &[String]) -> Vec<String> {
    locations
        .iter()
        .map(|location| normalize_location(location))
        .filter(|location| !location.is_empty())
        .collect()
}

impl JobFilter for LocationFilter {
    fn name(&self) -> &'static str {
        STAGE_LOCATION
    }

    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome {
        if self.preferred_locations.is_empty() && self.excluded_locations.is_empty() {
            return FilterOutcome::pass_through(records);
        }

        let original_count = records.len();
        let kept: Vec<JobRecord> = records.into_iter().filter(|r| self.accepts(r)).collect();

        let outcome = FilterOutcome::kept(original_count, kept);
        info!(
            "Location filter: kept {} jobs (filtered out {})",
            outcome.stats.final_count, outcome.stats.filtered_out
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn places(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn at(location: &str) -> JobRecord {
        JobRecord::new().with("title", "Engineer").with("location", location)
    }

    fn kept_locations(outcome: &FilterOutcome) -> Vec<&str> {
        outcome.records.iter().map(|r| r.text("location")).collect()
    }

    #[test]
    fn test_preferred_locations_match_across_spellings() {
        let filter = LocationFilter::new(&places(&["San Francisco, California"]), &[]);
        let outcome = filter.filter(vec![
            at("San Francisco, CA"),
            at("San Francisco"),
            at("Austin, TX"),
        ]);
        assert_eq!(kept_locations(&outcome), vec!["San Francisco, CA", "San Francisco"]);
    }

    #[test]
    fn test_remote_passes_unless_disallowed() {
        let preferred = places(&["New York"]);
        let records = vec![at("Remote"), at("New York, NY"), at("Chicago, IL")];

        let allowed = LocationFilter::new(&preferred, &[]).filter(records.clone());
        assert_eq!(kept_locations(&allowed), vec!["Remote", "New York, NY"]);

        let disallowed = LocationFilter::new(&preferred, &[])
            .allow_remote(false)
            .filter(records);
        assert_eq!(kept_locations(&disallowed), vec!["New York, NY"]);
    }

    #[test]
    fn test_excluded_checked_before_preferred() {
        let filter = LocationFilter::new(&[], &places(&["Texas"]));
        let outcome = filter.filter(vec![at("Austin, TX"), at("Denver, CO"), at("")]);
        assert_eq!(kept_locations(&outcome), vec!["Denver, CO", ""]);
    }

    #[test]
    fn test_exact_match_mode() {
        let filter = LocationFilter::new(&places(&["new york"]), &[]).exact_match(true);
        let outcome = filter.filter(vec![at("New York, USA"), at("New York, NY")]);
        assert_eq!(kept_locations(&outcome), vec!["New York, USA"]);
    }

    #[test]
    fn test_unknown_locations_are_kept() {
        let filter = LocationFilter::new(&places(&["New York"]), &places(&["Texas"]));
        let outcome = filter.filter(vec![
            at("N/A"),
            JobRecord::new().with("title", "Engineer"),
            at("USA"),
            at("Chicago, IL"),
        ]);

        assert_eq!(outcome.records.len(), 3);
        assert_eq!(kept_locations(&outcome), vec!["", "", "USA"]);
    }
}
