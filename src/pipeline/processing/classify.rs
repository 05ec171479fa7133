use crate::constants::{FIELD_EXPERIENCE_LEVEL, FIELD_TITLE};
use crate::types::{ExperienceLevel, JobRecord};

const ENTRY_KEYWORDS: [&str; 15] = [
    "junior",
    "trainee",
    "intern",
    "entry",
    "graduate",
    "fresher",
    "associate",
    "beginner",
    "apprentice",
    "0-1 year",
    "0-2 year",
    "new grad",
    "recent graduate",
    "jr.",
    "jr ",
];

const SENIOR_KEYWORDS: [&str; 17] = [
    "senior",
    "sr.",
    "sr ",
    "lead",
    "principal",
    "architect",
    "manager",
    "head",
    "director",
    "chief",
    "expert",
    "5+ year",
    "7+ year",
    "team lead",
    "tech lead",
    "technical lead",
    "staff",
];

const MID_KEYWORDS: [&str; 9] = [
    "mid",
    "intermediate",
    "regular",
    "2-5 year",
    "3-6 year",
    "experienced",
    "specialist",
    "developer ii",
    "engineer ii",
];

/// Infer seniority from a job title.
///
/// Keyword sets are checked entry first, then senior, then mid, so a title
/// carrying both an entry and a senior term ("Senior Intern") is entry level.
/// Titles with no signal default to mid.
pub fn classify_experience(title: &str) -> ExperienceLevel {
    matched_level(title).unwrap_or(ExperienceLevel::Mid)
}

/// The first keyword set with a hit, in priority order
fn matched_level(title: &str) -> Option<ExperienceLevel> {
    let title = title.to_lowercase();
    [
        (&ENTRY_KEYWORDS[..], ExperienceLevel::Entry),
        (&SENIOR_KEYWORDS[..], ExperienceLevel::Senior),
        (&MID_KEYWORDS[..], ExperienceLevel::Mid),
    ]
    .into_iter()
    .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
    .map(|(_, level)| level)
}

/// Return the record's experience level, classifying and stamping it onto the
/// record first if it has none. An existing value is authoritative.
pub fn ensure_experience_level(record: &mut JobRecord) -> String {
    if let Some(level) = record.experience_level() {
        return level.to_string();
    }

    let level = classify_experience(record.text(FIELD_TITLE));
    record.set(FIELD_EXPERIENCE_LEVEL, level.as_str());
    level.as_str().to_string()
}
