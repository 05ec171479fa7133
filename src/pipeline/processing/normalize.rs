//! Field normalization helpers shared by the filter stages and the
//! deduplicator. All functions are pure; unknown input (absent, blank or the
//! `N/A` sentinel) normalizes to the empty string or `None`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::UNKNOWN_SENTINEL;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));
static COMPANY_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(inc|corp|ltd|llc|co)\b").expect("valid regex"));
static COUNTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(usa|us|united states)\b").expect("valid regex"));
static LOCATION_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,\-()]").expect("valid regex"));
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// State abbreviations folded into their full names
static STATES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\b(ca|california)\b", "california"),
        (r"\b(ny|new york)\b", "new york"),
        (r"\b(fl|florida)\b", "florida"),
        (r"\b(tx|texas)\b", "texas"),
    ]
    .into_iter()
    .map(|(pattern, name)| (Regex::new(pattern).expect("valid regex"), name))
    .collect()
});

/// Substrings that mark a posting as remote
pub const REMOTE_KEYWORDS: [&str; 8] = [
    "remote",
    "work from home",
    "wfh",
    "telecommute",
    "distributed",
    "anywhere",
    "virtual",
    "home-based",
];

fn is_unknown(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed == UNKNOWN_SENTINEL
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Canonical form of free text used for signatures and similarity:
/// lowercased, punctuation and corporate suffixes removed, whitespace collapsed.
pub fn normalize_text(text: &str) -> String {
    if is_unknown(text) {
        return String::new();
    }

    let text = collapse_whitespace(&text.to_lowercase());
    let text = PUNCTUATION.replace_all(&text, "");
    let text = COMPANY_SUFFIX.replace_all(&text, "");
    collapse_whitespace(&text)
}

/// Canonical form of a location string: country tokens dropped, a few state
/// abbreviations spelled out, separators flattened to spaces.
pub fn normalize_location(location: &str) -> String {
    if is_unknown(location) {
        return String::new();
    }

    let mut location = COUNTRY
        .replace_all(location.trim().to_lowercase().as_str(), "")
        .into_owned();
    for (pattern, name) in STATES.iter() {
        location = pattern.replace_all(&location, *name).into_owned();
    }
    let location = LOCATION_SEPARATORS.replace_all(&location, " ");
    collapse_whitespace(&location)
}

/// Whether a single piece of text mentions any remote keyword
pub fn mentions_remote(text: &str) -> bool {
    let lower = text.to_lowercase();
    REMOTE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// A posting is remote when its location or job type mentions a remote keyword
pub fn is_remote(location: &str, job_type: &str) -> bool {
    mentions_remote(location) || mentions_remote(job_type)
}

/// First salary figure found in a salary string, with `k` expanded to
/// thousands. Ranges yield their lower bound. `None` when no digits exist.
pub fn extract_salary(salary: &str) -> Option<u64> {
    if is_unknown(salary) {
        return None;
    }

    let cleaned = salary
        .replace(['$', ','], "")
        .replace(['k', 'K'], "000");

    DIGITS
        .find(&cleaned)
        .and_then(|digits| digits.as_str().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_strips_suffixes_and_punctuation() {
        assert_eq!(normalize_text("Google Inc."), "google");
        assert_eq!(normalize_text("  Acme,   Corp  "), "acme");
        assert_eq!(normalize_text("Senior  Python\tDeveloper!"), "senior python developer");
        assert_eq!(normalize_text("Costco Wholesale"), "costco wholesale");
        assert_eq!(normalize_text("N/A"), "");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_normalize_location() {
        assert_eq!(normalize_location("San Francisco, CA"), "san francisco california");
        assert_eq!(normalize_location("New York, NY, USA"), "new york new york");
        assert_eq!(normalize_location("Austin (TX) - United States"), "austin texas");
        assert_eq!(normalize_location("Miami, FL"), "miami florida");
        assert_eq!(normalize_location("N/A"), "");
    }

    #[test]
    fn test_remote_detection() {
        assert!(is_remote("Remote - US", ""));
        assert!(is_remote("Seattle, WA", "Full-time, Work From Home"));
        assert!(is_remote("Anywhere", "N/A"));
        assert!(!is_remote("Seattle, WA", "Full-time"));
    }

    #[test]
    fn test_extract_salary() {
        assert_eq!(extract_salary("$80,000"), Some(80_000));
        assert_eq!(extract_salary("$100,000-$120,000"), Some(100_000));
        assert_eq!(extract_salary("90k - 110k a year"), Some(90_000));
        assert_eq!(extract_salary("120K"), Some(120_000));
        assert_eq!(extract_salary("Competitive"), None);
        assert_eq!(extract_salary("N/A"), None);
        assert_eq!(extract_salary(""), None);
    }
}
