use thiserror::Error;

/// Failures at the I/O edge of the tool. The filtering core itself never
/// fails: unknown or malformed field values degrade to permissive outcomes.
#[derive(Error, Debug)]
pub enum JobScraperError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid job record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, JobScraperError>;
