use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::constants::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_LOG_LEVEL, DEFAULT_SIMILARITY_THRESHOLD,
    DEFAULT_SORT_BY, DEFAULT_SORT_ORDER, FALLBACK_EXCLUDE_KEYWORDS, FALLBACK_EXPERIENCE_LEVELS,
    FALLBACK_KEYWORDS, FALLBACK_MAX_AGE_DAYS, SORTABLE_FIELDS,
};
use crate::error::{JobScraperError, Result};
use crate::pipeline::processing::filters::FilterCriteria;
use crate::types::ExperienceLevel;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub filters: FilterCriteria,
    pub location: LocationConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Optional location stage; inactive unless preferred or excluded locations are set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub preferred: Vec<String>,
    pub excluded: Vec<String>,
    pub allow_remote: bool,
    pub exact_match: bool,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            preferred: Vec::new(),
            excluded: Vec::new(),
            allow_remote: true,
            exact_match: false,
        }
    }
}

impl LocationConfig {
    pub fn is_active(&self) -> bool {
        self.preferred.iter().chain(&self.excluded).any(|l| !l.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub include_duplicates: bool,
    pub similarity_threshold: f64,
    /// Field to sort by; `None` or `"none"` keeps pipeline order
    pub sort_by: Option<String>,
    pub sort_order: String,
}

impl OutputConfig {
    pub fn sort_field(&self) -> Option<&str> {
        self.sort_by.as_deref().filter(|field| *field != "none")
    }

    pub fn descending(&self) -> bool {
        self.sort_order == "desc"
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_duplicates: false,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            sort_by: Some(DEFAULT_SORT_BY.to_string()),
            sort_order: DEFAULT_SORT_ORDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for JSON log files; console only when unset
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            directory: None,
        }
    }
}

impl Config {
    /// Path from the explicit argument, else `JOB_SCRAPER_CONFIG`, else `config.toml`
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            JobScraperError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_toml(&config_content)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields [`Config::fallback`]
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Config file {} not found. Using default settings.",
                path.display()
            );
            return Ok(Self::fallback());
        }
        Self::load(path)
    }

    /// Settings used when no config file exists: every experience level,
    /// postings from the last 30 days, programming roles only.
    /// `Config::default()` instead leaves every filter off.
    pub fn fallback() -> Self {
        Self {
            filters: FilterCriteria {
                experience_levels: to_strings(&FALLBACK_EXPERIENCE_LEVELS),
                keywords: to_strings(&FALLBACK_KEYWORDS),
                exclude_keywords: to_strings(&FALLBACK_EXCLUDE_KEYWORDS),
                max_age_days: Some(FALLBACK_MAX_AGE_DAYS),
                ..FilterCriteria::default()
            },
            ..Self::default()
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let threshold = self.output.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(JobScraperError::Config(format!(
                "similarity_threshold must be between 0 and 1, got {}",
                threshold
            )));
        }

        if let Some(sort_by) = self.output.sort_field() {
            if !SORTABLE_FIELDS.contains(&sort_by) {
                return Err(JobScraperError::Config(format!(
                    "sort_by must be one of {:?}, got '{}'",
                    SORTABLE_FIELDS, sort_by
                )));
            }
        }

        if !matches!(self.output.sort_order.as_str(), "asc" | "desc") {
            return Err(JobScraperError::Config(format!(
                "sort_order must be 'asc' or 'desc', got '{}'",
                self.output.sort_order
            )));
        }

        for level in self
            .filters
            .experience_levels
            .iter()
            .filter(|level| !level.trim().is_empty())
        {
            level
                .parse::<ExperienceLevel>()
                .map_err(JobScraperError::Config)?;
        }

        if let (Some(min), Some(max)) = (self.filters.min_salary, self.filters.max_salary) {
            if min > 0 && max > 0 && min > max {
                return Err(JobScraperError::Config(format!(
                    "min_salary ({}) is greater than max_salary ({})",
                    min, max
                )));
            }
        }

        Ok(())
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_config() {
        let config = Config::from_toml(
            r#"
            [filters]
            experience_levels = ["entry", "mid"]
            exclude_companies = ["BadCompany"]
            keywords = ["python"]
            max_age_days = 7
            min_salary = 90000
            remote_only = true

            [location]
            preferred = ["Seattle"]
            allow_remote = false

            [output]
            include_duplicates = true
            similarity_threshold = 0.8
            sort_by = "salary"
            sort_order = "asc"

            [logging]
            level = "debug"
            directory = "logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.filters.experience_levels, vec!["entry", "mid"]);
        assert_eq!(config.filters.max_age_days, Some(7));
        assert_eq!(config.filters.min_salary, Some(90_000));
        assert_eq!(config.filters.max_salary, None);
        assert!(config.filters.remote_only);
        assert!(!config.filters.full_time_only);
        assert!(config.location.is_active());
        assert!(!config.location.allow_remote);
        assert!(config.output.include_duplicates);
        assert_eq!(config.output.sort_by.as_deref(), Some("salary"));
        assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output.similarity_threshold, 0.9);
        assert!(config.location.allow_remote);
        assert!(!config.location.is_active());
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Config::from_toml("[output]\nsimilarity_threshold = 1.5").is_err());
        assert!(Config::from_toml("[output]\nsort_by = \"url\"").is_err());
        assert!(Config::from_toml("[output]\nsort_by = \"none\"").is_ok());
        assert!(Config::from_toml("[output]\nsort_order = \"sideways\"").is_err());
        assert!(Config::from_toml("[filters]\nexperience_levels = [\"guru\"]").is_err());
        assert!(Config::from_toml("[filters]\nexperience_levels = [\"entry\", \"  \"]").is_ok());
        assert!(Config::from_toml("[filters]\nmin_salary = 200000\nmax_salary = 100000").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::fallback());
        assert_eq!(config.filters.experience_levels, vec!["entry", "mid", "senior"]);
        assert_eq!(config.filters.max_age_days, Some(30));
        assert_eq!(config.filters.exclude_keywords, vec!["sales", "marketing"]);
        assert_eq!(config.output, OutputConfig::default());
        assert!(config.validate().is_ok());
        assert!(Config::load(&dir.path().join("absent.toml")).is_err());
    }
}
