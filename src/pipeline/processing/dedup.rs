//! Duplicate elimination for postings that resurface across aggregators.
//!
//! Two passes per record: an exact signature over normalized
//! title/company/location, then a word-level Jaccard comparison of
//! title + company against every record kept so far. The first-seen posting
//! always wins.

use sha2::{Digest, Sha256};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::constants::{
    DEFAULT_SIMILARITY_THRESHOLD, FIELD_COMPANY, FIELD_LOCATION, FIELD_TITLE, STAGE_DEDUP,
};
use crate::metrics::FilterMetrics;
use crate::pipeline::processing::filters::{FilterOutcome, FilterStats, JobFilter};
use crate::pipeline::processing::normalize::normalize_text;
use crate::types::JobRecord;

pub const EXACT_DUPLICATES: &str = "exact_duplicates";
pub const SIMILAR_DUPLICATES: &str = "similar_duplicates";

/// Hex-encoded SHA-256 of `title|company|location`, each normalized
pub fn job_signature(record: &JobRecord) -> String {
    let signature_text = format!(
        "{}|{}|{}",
        normalize_text(record.text(FIELD_TITLE)),
        normalize_text(record.text(FIELD_COMPANY)),
        normalize_text(record.text(FIELD_LOCATION)),
    );

    let mut hasher = Sha256::new();
    hasher.update(signature_text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Word set of normalized title and company
fn word_set(record: &JobRecord) -> HashSet<String> {
    format!(
        "{} {}",
        normalize_text(record.text(FIELD_TITLE)),
        normalize_text(record.text(FIELD_COMPANY))
    )
    .split_whitespace()
    .map(str::to_string)
    .collect()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return 1.0,
        (true, false) | (false, true) => return 0.0,
        _ => {}
    }

    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    intersection as f64 / union as f64
}

/// Jaccard similarity of two postings' title + company words. Symmetric;
/// two records with no words at all count as identical.
pub fn similarity(a: &JobRecord, b: &JobRecord) -> f64 {
    jaccard(&word_set(a), &word_set(b))
}

/// Collapses near-duplicate postings onto their first occurrence
#[derive(Debug, Clone)]
pub struct Deduplicator {
    similarity_threshold: f64,
}

impl Default for Deduplicator {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl Deduplicator {
    pub fn new(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
        }
    }
}

impl JobFilter for Deduplicator {
    fn name(&self) -> &'static str {
        STAGE_DEDUP
    }

    // Pairwise scan is quadratic in the number of kept records, fine for the
    // few hundred postings a run produces.
    fn filter(&self, records: Vec<JobRecord>) -> FilterOutcome {
        let mut stats = FilterStats::new(records.len());
        let mut kept: Vec<JobRecord> = Vec::with_capacity(records.len());
        let mut kept_words: Vec<HashSet<String>> = Vec::with_capacity(records.len());
        let mut seen_signatures: HashSet<String> = HashSet::new();
        let mut exact = 0;
        let mut similar = 0;

        for record in records {
            let signature = job_signature(&record);
            if seen_signatures.contains(&signature) {
                exact += 1;
                continue;
            }

            let words = word_set(&record);
            if let Some(score) = kept_words
                .iter()
                .map(|existing| jaccard(&words, existing))
                .find(|score| *score >= self.similarity_threshold)
            {
                debug!(
                    title = record.text(FIELD_TITLE),
                    company = record.text(FIELD_COMPANY),
                    similarity = score,
                    "Dropping near-duplicate posting"
                );
                similar += 1;
                continue;
            }

            seen_signatures.insert(signature);
            kept_words.push(words);
            kept.push(record);
        }

        stats.record(EXACT_DUPLICATES, exact);
        stats.record(SIMILAR_DUPLICATES, similar);
        stats.finish(kept.len());
        FilterMetrics::record_duplicates(stats.filtered_out);

        info!(
            "Removed {} duplicates from {} jobs",
            stats.filtered_out, stats.original_count
        );

        FilterOutcome {
            records: kept,
            stats,
        }
    }
}
