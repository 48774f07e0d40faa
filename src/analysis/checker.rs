use std::sync::LazyLock;

use regex::Regex;

use crate::models::ConflictKind;

use super::messages::MessageTemplates;

/// Outcome of a contradiction check on one sentence pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ContradictionVerdict {
    pub kind: ConflictKind,
    pub suggestion: String,
}

impl ContradictionVerdict {
    /// Verdict for checkers that flag a contradiction without being
    /// able to classify or repair it.
    pub fn unclassified() -> Self {
        Self {
            kind: ConflictKind::Semantic,
            suggestion: MessageTemplates::review_statements(),
        }
    }
}

/// Judges whether two sentences contradict each other.
///
/// Returning `None` means no contradiction was found. This is the
/// seam where a model-backed comparator would plug in.
pub trait ContradictionCheck: Send + Sync {
    fn check(&self, sentence_a: &str, sentence_b: &str) -> Option<ContradictionVerdict>;
}

static PERCENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{1,3}%").unwrap());

// Lowercased input, so only lowercase am/pm here.
static CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}\s?(?:am|pm)|midnight|noon").unwrap());

/// Heuristic stand-in for a model-backed comparator.
///
/// Both sentences are lowercased, then two rules run in order: a
/// percentage mismatch wins over a clock-time mismatch, and the first
/// rule that fires decides the verdict.
pub struct MockContradictionCheck;

impl ContradictionCheck for MockContradictionCheck {
    fn check(&self, sentence_a: &str, sentence_b: &str) -> Option<ContradictionVerdict> {
        let a = sentence_a.to_lowercase();
        let b = sentence_b.to_lowercase();

        if let (Some(pa), Some(pb)) = (PERCENT.find(&a), PERCENT.find(&b)) {
            if pa.as_str() != pb.as_str() {
                return Some(ContradictionVerdict {
                    kind: ConflictKind::Attendance,
                    suggestion: MessageTemplates::standardize_attendance(
                        pa.as_str(),
                        pb.as_str(),
                    ),
                });
            }
        }

        if let (Some(ta), Some(tb)) = (CLOCK.find(&a), CLOCK.find(&b)) {
            if ta.as_str() != tb.as_str() {
                return Some(ContradictionVerdict {
                    kind: ConflictKind::Time,
                    suggestion: MessageTemplates::unify_deadline_time(
                        ta.as_str(),
                        tb.as_str(),
                    ),
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn differing_percentages_contradict() {
        let checker = MockContradictionCheck;
        let verdict = checker
            .check("Attendance must be 75%", "Attendance required: 90%")
            .expect("should contradict");

        assert_eq!(verdict.kind, ConflictKind::Attendance);
        assert_eq!(verdict.suggestion, "Standardize attendance to 75% or 90%");
    }

    #[test]
    fn equal_percentages_do_not_contradict() {
        let checker = MockContradictionCheck;
        assert!(checker
            .check("Attendance must be 75%", "We expect 75% attendance")
            .is_none());
    }

    #[test]
    fn differing_times_contradict() {
        let checker = MockContradictionCheck;
        let verdict = checker
            .check("Submit by 10 PM", "Submit by midnight")
            .expect("should contradict");

        assert_eq!(verdict.kind, ConflictKind::Time);
        assert_eq!(verdict.suggestion, "Unify deadline time (10 pm vs midnight)");
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let checker = MockContradictionCheck;
        // "10 PM" and "10 pm" are the same time after lowercasing.
        assert!(checker.check("Due at 10 PM", "Due at 10 pm").is_none());
    }

    #[test]
    fn percent_rule_wins_over_time_rule() {
        let checker = MockContradictionCheck;
        let verdict = checker
            .check("75% needed, due 10 pm", "90% needed, due midnight")
            .expect("should contradict");
        assert_eq!(verdict.kind, ConflictKind::Attendance);
    }

    #[test]
    fn equal_percentages_fall_through_to_time_rule() {
        let checker = MockContradictionCheck;
        let verdict = checker
            .check("75% needed, due 10 pm", "75% needed, due midnight")
            .expect("should contradict");
        assert_eq!(verdict.kind, ConflictKind::Time);
    }

    #[test]
    fn unrelated_sentences_do_not_contradict() {
        let checker = MockContradictionCheck;
        assert!(checker
            .check("The library opens daily", "Lunch is served in hall B")
            .is_none());
    }

    #[test]
    fn one_sided_mentions_do_not_contradict() {
        let checker = MockContradictionCheck;
        assert!(checker
            .check("Attendance must be 75%", "No numbers in this one")
            .is_none());
        assert!(checker
            .check("Due at 10 pm", "No time in this one")
            .is_none());
    }

    #[test]
    fn unclassified_verdict_uses_semantic_fallbacks() {
        let verdict = ContradictionVerdict::unclassified();
        assert_eq!(verdict.kind, ConflictKind::Semantic);
        assert_eq!(verdict.suggestion, "Review these statements");
    }
}
