//! Single-criterion filter stages and the aggregate filter built from them.
//!
//! Every stage consumes a batch of records and returns the survivors, in input
//! order, together with the stats for that run. A stage with nothing
//! configured passes its input through untouched.

use serde::Serialize;

use crate::types::JobRecord;

pub mod company;
pub mod date;
pub mod experience;
pub mod job_type;
pub mod keyword;
pub mod location;
pub mod main_filter;
pub mod salary;

pub use company::CompanyFilter;
pub use date::DateFilter;
pub use experience::ExperienceFilter;
pub use job_type::JobTypeFilter;
pub use keyword::KeywordFilter;
pub use location::LocationFilter;
pub use main_filter::{FilterCriteria, MainJobFilter};
pub use salary::SalaryFilter;

/// Common trait for all filtering stages
pub trait JobFilter: Send + Sync {
    /// Stable identifier used as the key in stats and pipeline reports
    fn name(&self) -> &'static str;

    /// Filter a batch of records. Survivors keep their relative order and are
    /// the input records themselves, possibly enriched with derived fields.
    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome;
}

/// Records surviving a stage plus the stats for that run
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub records: Vec<JobRecord>,
    pub stats: FilterStats,
}

impl FilterOutcome {
    /// Outcome for a stage that had nothing to do
    pub fn pass_through(records: Vec<JobRecord>) -> Self {
        let stats = FilterStats::completed(records.len(), records.len());
        Self { records, stats }
    }

    /// Outcome for a stage that kept `kept` out of `original_count` records
    pub fn kept(original_count: usize, kept: Vec<JobRecord>) -> Self {
        let stats = FilterStats::completed(original_count, kept.len());
        Self { records: kept, stats }
    }
}

/// Per-run counters for a stage. Fresh for every call; nothing accumulates
/// across runs of the same stage instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub original_count: usize,
    pub final_count: usize,
    pub filtered_out: usize,
    /// Named intermediate counts in the order they were recorded
    pub counts: Vec<(String, usize)>,
}

impl FilterStats {
    pub fn new(original_count: usize) -> Self {
        Self {
            original_count,
            ..Self::default()
        }
    }

    pub fn completed(original_count: usize, final_count: usize) -> Self {
        let mut stats = Self::new(original_count);
        stats.finish(final_count);
        stats
    }

    /// Record a named intermediate count
    pub fn record(&mut self, name: impl Into<String>, count: usize) {
        self.counts.push((name.into(), count));
    }

    pub fn finish(&mut self, final_count: usize) {
        self.final_count = final_count;
        self.filtered_out = self.original_count.saturating_sub(final_count);
    }

    /// Look up a named intermediate count
    pub fn count(&self, name: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, count)| *count)
    }
}

/// Lowercase, trim and drop blank entries from a configured term list
pub(crate) fn prepare_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Case-insensitive substring match of any term against already-lowercased text
pub(crate) fn contains_any(haystack: &str, terms: &[String]) -> bool {
    terms.iter().any(|term| haystack.contains(term.as_str()))
}
