//! Posted-date parsing. Scrapers hand us anything from "3 days ago" to
//! RFC 3339 timestamps; everything is resolved against an explicit reference
//! time so results are reproducible.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::UNKNOWN_SENTINEL;

static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Date-time layouts tried as part of the general-purpose tier
const GENERAL_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts tried as part of the general-purpose tier
const GENERAL_DATE_FORMATS: [&str; 8] = [
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y/%m/%d",
    "%d.%m.%Y",
];

/// Explicit fallback layouts, in priority order
const FALLBACK_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];
const FALLBACK_DATETIME_FORMATS: [&str; 1] = ["%Y-%m-%d %H:%M:%S"];

/// Parse a posted-date string relative to `now`. Returns `None` when the
/// text cannot be understood; callers treat that as "keep the record".
pub fn parse_posted_date(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == UNKNOWN_SENTINEL {
        return None;
    }
    let lower = trimmed.to_lowercase();

    if lower.contains("ago") {
        if let Some(posted) = parse_relative(&lower, now) {
            return Some(posted);
        }
    }

    if lower.contains("today") || lower.contains("just posted") || lower.contains("just now") {
        return Some(now);
    }
    if lower.contains("yesterday") {
        return now.checked_sub_signed(Duration::days(1));
    }

    parse_general(trimmed).or_else(|| parse_fallback(trimmed))
}

/// "N <unit>s ago". Months count as 30 days.
fn parse_relative(lower: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let amount: i64 = FIRST_NUMBER.find(lower)?.as_str().parse().ok()?;

    let delta = if lower.contains("hour") {
        Duration::try_hours(amount)
    } else if lower.contains("day") {
        Duration::try_days(amount)
    } else if lower.contains("week") {
        Duration::try_weeks(amount)
    } else if lower.contains("month") {
        amount.checked_mul(30).and_then(Duration::try_days)
    } else if lower.contains("minute") {
        Duration::try_minutes(amount)
    } else {
        None
    }?;

    now.checked_sub_signed(delta)
}

fn parse_general(text: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.naive_utc());
    }

    GENERAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| parse_date_with(text, &GENERAL_DATE_FORMATS))
}

fn parse_fallback(text: &str) -> Option<NaiveDateTime> {
    parse_date_with(text, &FALLBACK_DATE_FORMATS).or_else(|| {
        FALLBACK_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    })
}

fn parse_date_with(text: &str, formats: &[&str]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .map(|date| date.and_time(NaiveTime::MIN))
}
