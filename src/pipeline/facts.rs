use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Fact, FactKind};

// Attendance clauses: the word "attendance", then the nearest number
// in the same clause. Clause scanning stops at sentence punctuation.
static ATTENDANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\battendance\b[^\n.!]*?(\d{1,3}%?)").unwrap());

// Clock times ("10 PM", "9am") plus the two named deadline words.
static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:\d{1,2}\s?(?:am|pm)|midnight|noon)\b").unwrap());

// Numeric dates: 12/31/2026, 1-2-26 and the like.
static NUMERIC_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap());

/// Scan text for structured facts: attendance percentages, clock
/// times and numeric dates, in that order.
///
/// Pure function of the input; the same text always yields the same
/// facts in the same order.
pub fn extract_facts(text: &str) -> Vec<Fact> {
    let mut facts = Vec::new();

    for captures in ATTENDANCE.captures_iter(text) {
        let whole = &captures[0];
        facts.push(Fact {
            kind: FactKind::Attendance,
            value: captures[1].to_string(),
            context: whole.to_string(),
        });
    }

    for found in CLOCK_TIME.find_iter(text) {
        facts.push(Fact {
            kind: FactKind::Time,
            value: found.as_str().to_string(),
            context: found.as_str().to_string(),
        });
    }

    for found in NUMERIC_DATE.find_iter(text) {
        facts.push(Fact {
            kind: FactKind::Date,
            value: found.as_str().to_string(),
            context: found.as_str().to_string(),
        });
    }

    facts
}
