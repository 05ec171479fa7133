/// Field names recognized on a job record
pub const FIELD_TITLE: &str = "title";
pub const FIELD_COMPANY: &str = "company";
pub const FIELD_LOCATION: &str = "location";
pub const FIELD_DESCRIPTION: &str = "description";
pub const FIELD_SALARY: &str = "salary";
pub const FIELD_POSTED_DATE: &str = "posted_date";
pub const FIELD_JOB_TYPE: &str = "job_type";
pub const FIELD_EXPERIENCE_LEVEL: &str = "experience_level";
pub const FIELD_SOURCE: &str = "source";
pub const FIELD_URL: &str = "url";

/// Placeholder scrapers emit when a field could not be extracted
pub const UNKNOWN_SENTINEL: &str = "N/A";

// Config defaults
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "JOB_SCRAPER_CONFIG";
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.9;
pub const DEFAULT_SORT_BY: &str = "posted_date";
pub const DEFAULT_SORT_ORDER: &str = "desc";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Fields the output may be sorted by
pub const SORTABLE_FIELDS: [&str; 5] = [
    FIELD_TITLE,
    FIELD_COMPANY,
    FIELD_LOCATION,
    FIELD_POSTED_DATE,
    FIELD_SALARY,
];

/// Stage names used as keys in stats and pipeline reports
pub const STAGE_EXPERIENCE: &str = "experience_filter";
pub const STAGE_COMPANY: &str = "company_filter";
pub const STAGE_KEYWORD: &str = "keyword_filter";
pub const STAGE_SALARY: &str = "salary_filter";
pub const STAGE_JOB_TYPE: &str = "job_type_filter";
pub const STAGE_DATE: &str = "date_filter";
pub const STAGE_LOCATION: &str = "location_filter";
pub const STAGE_MAIN: &str = "main_job_filter";
pub const STAGE_DEDUP: &str = "duplicate_remover";

// Filters applied when no config file is found
pub const FALLBACK_EXPERIENCE_LEVELS: [&str; 3] = ["entry", "mid", "senior"];
pub const FALLBACK_KEYWORDS: [&str; 2] = ["python", "programming"];
pub const FALLBACK_EXCLUDE_KEYWORDS: [&str; 2] = ["sales", "marketing"];
pub const FALLBACK_MAX_AGE_DAYS: u64 = 30;
