use chrono::{DateTime, NaiveDate};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%d %b %Y", "%d %B %Y",
];

/// Parses a statement date string into a calendar date.
///
/// Tries each of the supported day formats in order, then falls back to the
/// date part of an RFC 3339 timestamp.
pub fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Identity of a statement day.
///
/// Two date strings name the same day when both parse to the same calendar
/// date, or when neither parses and their trimmed text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DateKey {
    Day(NaiveDate),
    Unparsed(String),
}

impl DateKey {
    pub fn of(raw: &str) -> Self {
        match parse_statement_date(raw) {
            Some(day) => DateKey::Day(day),
            None => DateKey::Unparsed(raw.trim().to_string()),
        }
    }

    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            DateKey::Day(day) => Some(*day),
            DateKey::Unparsed(_) => None,
        }
    }
}

pub fn same_day(a: &str, b: &str) -> bool {
    DateKey::of(a) == DateKey::of(b)
}

/// Truncates `s` to at most `max` characters, marking the cut with `~`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('~');
    out
}
