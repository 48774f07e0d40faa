use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Conflict, ConflictKind, Document, Fact, FactKind};

use super::checker::ContradictionCheck;
use super::messages::MessageTemplates;

/// Confidence for conflicts found by the structured fact comparison.
const FACT_CONFLICT_CONFIDENCE: f64 = 0.9;

/// Confidence for conflicts found by the sentence-pair scan.
const SENTENCE_CONFLICT_CONFIDENCE: f64 = 0.75;

/// Leading sentences per document fed to the sentence-pair scan.
/// Caps checker calls per pair at the square of this value.
const SENTENCE_SCAN_LIMIT: usize = 10;

#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub fact_conflict_confidence: f64,
    pub sentence_conflict_confidence: f64,
    pub sentence_scan_limit: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            fact_conflict_confidence: FACT_CONFLICT_CONFIDENCE,
            sentence_conflict_confidence: SENTENCE_CONFLICT_CONFIDENCE,
            sentence_scan_limit: SENTENCE_SCAN_LIMIT,
        }
    }
}

// Sentence boundaries: terminal punctuation or a line break.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?\n]").unwrap());

/// Split text into trimmed, non-empty sentences, keeping the first
/// `limit` of them.
fn leading_sentences(text: &str, limit: usize) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Pairwise conflict scan over a set of documents.
///
/// Every unordered document pair runs through two strategies in
/// order: a structured comparison of extracted attendance facts, then
/// a sentence-pair scan through the contradiction checker. Conflicts
/// are reported in that discovery order, duplicates included; input
/// order fully determines output order.
pub struct ConflictDetector {
    config: DetectorConfig,
    checker: Box<dyn ContradictionCheck>,
}

impl ConflictDetector {
    pub fn new(checker: Box<dyn ContradictionCheck>) -> Self {
        Self::with_config(checker, DetectorConfig::default())
    }

    pub fn with_config(checker: Box<dyn ContradictionCheck>, config: DetectorConfig) -> Self {
        Self { config, checker }
    }

    pub fn detect(&self, documents: &[Document]) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        for i in 0..documents.len() {
            for j in (i + 1)..documents.len() {
                let doc_a = &documents[i];
                let doc_b = &documents[j];

                conflicts.extend(self.compare_attendance_facts(doc_a, doc_b));
                conflicts.extend(self.scan_sentence_pairs(doc_a, doc_b));
            }
        }

        conflicts
    }

    /// Strategy 1: compare each document's first attendance fact.
    fn compare_attendance_facts(&self, doc_a: &Document, doc_b: &Document) -> Option<Conflict> {
        let fact_a = first_attendance(doc_a)?;
        let fact_b = first_attendance(doc_b)?;

        if fact_a.value == fact_b.value {
            return None;
        }

        Some(Conflict {
            doc_a: doc_a.name.clone(),
            doc_b: doc_b.name.clone(),
            excerpt_a: fact_a.context.clone(),
            excerpt_b: fact_b.context.clone(),
            conflict_type: ConflictKind::Attendance,
            suggestion: MessageTemplates::pick_attendance_value(&fact_a.value, &fact_b.value),
            confidence: self.config.fact_conflict_confidence,
        })
    }

    /// Strategy 2: run leading sentence pairs through the checker.
    fn scan_sentence_pairs(&self, doc_a: &Document, doc_b: &Document) -> Vec<Conflict> {
        let sentences_a = leading_sentences(&doc_a.text, self.config.sentence_scan_limit);
        let sentences_b = leading_sentences(&doc_b.text, self.config.sentence_scan_limit);

        let mut conflicts = Vec::new();

        for sentence_a in &sentences_a {
            for sentence_b in &sentences_b {
                if let Some(verdict) = self.checker.check(sentence_a, sentence_b) {
                    conflicts.push(Conflict {
                        doc_a: doc_a.name.clone(),
                        doc_b: doc_b.name.clone(),
                        excerpt_a: sentence_a.clone(),
                        excerpt_b: sentence_b.clone(),
                        conflict_type: verdict.kind,
                        suggestion: verdict.suggestion,
                        confidence: self.config.sentence_conflict_confidence,
                    });
                }
            }
        }

        conflicts
    }
}

fn first_attendance(doc: &Document) -> Option<&Fact> {
    doc.facts.iter().find(|f| f.kind == FactKind::Attendance)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::analysis::checker::{ContradictionVerdict, MockContradictionCheck};
    use crate::pipeline::facts::extract_facts;

    use super::*;

    fn make_document(name: &str, text: &str) -> Document {
        Document {
            file_id: Uuid::new_v4(),
            name: name.to_string(),
            text: text.to_string(),
            facts: extract_facts(text),
        }
    }

    fn default_detector() -> ConflictDetector {
        ConflictDetector::new(Box::new(MockContradictionCheck))
    }

    #[test]
    fn attendance_mismatch_reported_from_facts() {
        let docs = vec![
            make_document("rules.txt", "Attendance must be 75% for all students."),
            make_document("policy.txt", "Attendance required: 90% to pass."),
        ];

        let conflicts = default_detector().detect(&docs);

        let fact_conflict = conflicts
            .iter()
            .find(|c| c.confidence == FACT_CONFLICT_CONFIDENCE)
            .expect("structured conflict expected");
        assert_eq!(fact_conflict.conflict_type, ConflictKind::Attendance);
        assert_eq!(fact_conflict.doc_a, "rules.txt");
        assert_eq!(fact_conflict.doc_b, "policy.txt");
        assert!(fact_conflict.excerpt_a.contains("75%"));
        assert!(fact_conflict.excerpt_b.contains("90%"));
        assert_eq!(
            fact_conflict.suggestion,
            "Pick one attendance value (75% vs 90%)"
        );
    }

    #[test]
    fn matching_attendance_yields_no_fact_conflict() {
        let docs = vec![
            make_document("a.txt", "Attendance must be 75%"),
            make_document("b.txt", "We expect attendance of 75% too"),
        ];

        let conflicts = default_detector().detect(&docs);
        assert!(conflicts
            .iter()
            .all(|c| c.confidence != FACT_CONFLICT_CONFIDENCE));
    }

    #[test]
    fn sentence_scan_reports_time_conflict() {
        let docs = vec![
            make_document("a.txt", "Reports are due at 10 PM."),
            make_document("b.txt", "Reports are due at midnight."),
        ];

        let conflicts = default_detector().detect(&docs);
        assert_eq!(conflicts.len(), 1);

        let conflict = &conflicts[0];
        assert_eq!(conflict.conflict_type, ConflictKind::Time);
        assert_eq!(conflict.confidence, SENTENCE_CONFLICT_CONFIDENCE);
        assert_eq!(conflict.excerpt_a, "Reports are due at 10 PM");
        assert_eq!(conflict.excerpt_b, "Reports are due at midnight");
        assert_eq!(conflict.suggestion, "Unify deadline time (10 pm vs midnight)");
    }

    #[test]
    fn both_strategies_can_fire_for_one_pair() {
        let docs = vec![
            make_document("a.txt", "Attendance must be 75%"),
            make_document("b.txt", "Attendance required: 90%"),
        ];

        let conflicts = default_detector().detect(&docs);

        // One structured conflict plus one sentence-scan hit on the
        // same disagreement. No dedup by design.
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].confidence, FACT_CONFLICT_CONFIDENCE);
        assert_eq!(conflicts[1].confidence, SENTENCE_CONFLICT_CONFIDENCE);
    }

    #[test]
    fn all_document_pairs_are_compared() {
        let docs = vec![
            make_document("a.txt", "Attendance must be 60%"),
            make_document("b.txt", "Attendance must be 70%"),
            make_document("c.txt", "Attendance must be 80%"),
        ];

        let conflicts = default_detector().detect(&docs);
        let fact_pairs: Vec<(&str, &str)> = conflicts
            .iter()
            .filter(|c| c.confidence == FACT_CONFLICT_CONFIDENCE)
            .map(|c| (c.doc_a.as_str(), c.doc_b.as_str()))
            .collect();

        assert_eq!(
            fact_pairs,
            vec![
                ("a.txt", "b.txt"),
                ("a.txt", "c.txt"),
                ("b.txt", "c.txt"),
            ]
        );
    }

    #[test]
    fn detection_is_deterministic() {
        let docs = vec![
            make_document("a.txt", "Attendance must be 75%. Due at 10 PM."),
            make_document("b.txt", "Attendance required: 90%. Due at midnight."),
        ];

        let detector = default_detector();
        let first: Vec<String> = detector
            .detect(&docs)
            .iter()
            .map(|c| format!("{}|{}|{}", c.doc_a, c.excerpt_a, c.excerpt_b))
            .collect();
        let second: Vec<String> = detector
            .detect(&docs)
            .iter()
            .map(|c| format!("{}|{}|{}", c.doc_a, c.excerpt_a, c.excerpt_b))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn single_document_yields_no_conflicts() {
        let docs = vec![make_document("only.txt", "Attendance must be 75%")];
        assert!(default_detector().detect(&docs).is_empty());
    }

    #[test]
    fn no_documents_yields_no_conflicts() {
        assert!(default_detector().detect(&[]).is_empty());
    }

    #[test]
    fn sentence_scan_stops_at_the_limit() {
        // Ten filler sentences push the conflicting one to position 11,
        // just past the default scan window.
        let mut filler = "Filler sentence number one. ".repeat(10);
        filler.push_str("Deadline is 10 PM.");

        let docs = vec![
            make_document("a.txt", &filler),
            make_document("b.txt", "Deadline is midnight."),
        ];

        let conflicts = default_detector().detect(&docs);
        assert!(conflicts.is_empty());
    }

    #[test]
    fn scan_limit_is_configurable() {
        let docs = vec![
            make_document("a.txt", "Nothing here. Deadline is 10 PM."),
            make_document("b.txt", "Deadline is midnight."),
        ];

        let detector = ConflictDetector::with_config(
            Box::new(MockContradictionCheck),
            DetectorConfig {
                sentence_scan_limit: 1,
                ..DetectorConfig::default()
            },
        );

        // The conflicting sentence is second; a window of one hides it.
        assert!(detector.detect(&docs).is_empty());
        assert_eq!(default_detector().detect(&docs).len(), 1);
    }

    #[test]
    fn custom_checker_verdict_flows_to_the_wire_fields() {
        struct AlwaysContradicts;

        impl ContradictionCheck for AlwaysContradicts {
            fn check(&self, _: &str, _: &str) -> Option<ContradictionVerdict> {
                Some(ContradictionVerdict::unclassified())
            }
        }

        let docs = vec![
            make_document("a.txt", "One sentence here"),
            make_document("b.txt", "Another sentence there"),
        ];

        let conflicts = ConflictDetector::new(Box::new(AlwaysContradicts)).detect(&docs);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].conflict_type, ConflictKind::Semantic);
        assert_eq!(conflicts[0].suggestion, "Review these statements");
        assert_eq!(conflicts[0].confidence, SENTENCE_CONFLICT_CONFIDENCE);
    }

    #[test]
    fn split_trims_and_drops_empty_sentences() {
        let sentences = leading_sentences("  First one. \n\n Second one!  Third?", 10);
        assert_eq!(sentences, vec!["First one", "Second one", "Third"]);
    }
}
