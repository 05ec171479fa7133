use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::{FIELD_EXPERIENCE_LEVEL, UNKNOWN_SENTINEL};

/// A single job posting as produced by an upstream scraper: a flat map of
/// field name to free-text value. No field is guaranteed to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobRecord {
    fields: BTreeMap<String, String>,
}

impl JobRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for fixtures
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Raw value of a field, if present
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Value of a field when it carries information. Absent, blank and the
    /// `N/A` sentinel all read as `None`.
    pub fn known(&self, name: &str) -> Option<&str> {
        self.get(name)
            .filter(|v| !v.trim().is_empty() && v.trim() != UNKNOWN_SENTINEL)
    }

    /// Field text for matching; unknown values read as the empty string
    pub fn text(&self, name: &str) -> &str {
        self.known(name).unwrap_or("")
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The stamped experience level, if one has been assigned
    pub fn experience_level(&self) -> Option<&str> {
        self.known(FIELD_EXPERIENCE_LEVEL)
    }
}

impl FromIterator<(String, String)> for JobRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Seniority bucket inferred from a job title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entry" => Ok(ExperienceLevel::Entry),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            other => Err(format!("unknown experience level '{}'", other)),
        }
    }
}
