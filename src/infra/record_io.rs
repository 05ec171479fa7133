//! Loading scraped job batches from JSON.
//!
//! Input is a JSON array of objects. Values are coerced to text so that a
//! scraper emitting `"salary": 120000` still produces a usable record; `null`
//! drops the field.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{JobScraperError, Result};
use crate::types::JobRecord;

/// Read and parse a JSON file of job records
pub fn load_jobs(path: &Path) -> Result<Vec<JobRecord>> {
    let content = fs::read_to_string(path)?;
    let records = parse_jobs(&content)?;
    info!("Loaded {} jobs from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a JSON array of job objects
pub fn parse_jobs(content: &str) -> Result<Vec<JobRecord>> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(items) = value else {
        return Err(JobScraperError::InvalidRecord {
            index: 0,
            reason: "expected a JSON array of job objects".to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| record_from_value(index, item))
        .collect()
}

fn record_from_value(index: usize, item: Value) -> Result<JobRecord> {
    let Value::Object(map) = item else {
        return Err(JobScraperError::InvalidRecord {
            index,
            reason: format!("expected an object, found {}", kind(&item)),
        });
    };

    Ok(map
        .into_iter()
        .filter_map(|(name, value)| {
            let text = match value {
                Value::Null => {
                    debug!(index, field = %name, "Dropping null field");
                    return None;
                }
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                nested @ (Value::Array(_) | Value::Object(_)) => nested.to_string(),
            };
            Some((name, text))
        })
        .collect())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
