use chrono::NaiveDateTime;
use std::cmp::Ordering;

use crate::constants::{FIELD_POSTED_DATE, FIELD_SALARY};
use crate::pipeline::processing::dates::parse_posted_date;
use crate::pipeline::processing::normalize::extract_salary;
use crate::types::JobRecord;

/// Comparable value extracted from one record for one sort field
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Timestamp(NaiveDateTime),
    Amount(u64),
    Text(String),
}

fn sort_key(record: &JobRecord, field: &str, now: NaiveDateTime) -> Option<SortKey> {
    let value = record.known(field)?;
    match field {
        FIELD_POSTED_DATE => parse_posted_date(value, now).map(SortKey::Timestamp),
        FIELD_SALARY => extract_salary(value).map(SortKey::Amount),
        _ => Some(SortKey::Text(value.trim().to_lowercase())),
    }
}

/// Stable sort of records by one field. Posting dates compare as timestamps,
/// salaries by their extracted amount and everything else as case-folded
/// text. Records whose value is unknown or unparseable go last in either
/// direction.
pub fn sort_records(records: &mut Vec<JobRecord>, field: &str, descending: bool, now: NaiveDateTime) {
    let mut keyed: Vec<(Option<SortKey>, JobRecord)> = records
        .drain(..)
        .map(|record| (sort_key(&record, field, now), record))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) if descending => b.cmp(a),
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    records.extend(keyed.into_iter().map(|(_, record)| record));
}
