//! Filter phase metrics
//!
//! Counters for how many records each stage sees, keeps and drops. The crate
//! never installs a recorder; whoever embeds it decides where metrics go, and
//! without one these calls are no-ops.

/// Build a metric name for a phase, e.g. `job_scraper_filter_records_in_total`
macro_rules! phase_metric {
    (counter, $phase:literal, $name:literal) => {
        concat!("job_scraper_", $phase, "_", $name, "_total")
    };
    (gauge, $phase:literal, $name:literal) => {
        concat!("job_scraper_", $phase, "_", $name)
    };
}

/// Metrics collection for the filtering phase
pub struct FilterMetrics;

impl FilterMetrics {
    /// Record one stage run
    pub fn record_stage(stage: &str, before: usize, after: usize) {
        ::metrics::counter!(phase_metric!(counter, "filter", "records_in"), "stage" => stage.to_string())
            .increment(before as u64);
        ::metrics::counter!(phase_metric!(counter, "filter", "records_out"), "stage" => stage.to_string())
            .increment(after as u64);
        ::metrics::counter!(phase_metric!(counter, "filter", "records_dropped"), "stage" => stage.to_string())
            .increment(before.saturating_sub(after) as u64);
    }

    /// Record duplicates removed by a dedup run
    pub fn record_duplicates(count: usize) {
        ::metrics::counter!(phase_metric!(counter, "dedup", "duplicates")).increment(count as u64);
    }

    /// Size of the last pipeline result
    pub fn record_pipeline_output(count: usize) {
        ::metrics::gauge!(phase_metric!(gauge, "pipeline", "output_records")).set(count as f64);
    }
}
