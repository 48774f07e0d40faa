use serde::{Deserialize, Serialize};

use super::enums::ConflictKind;

/// One contradiction between two documents. Excerpts carry the
/// offending passages verbatim so a reviewer can judge without
/// reopening the sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    pub doc_a: String,
    pub doc_b: String,
    pub excerpt_a: String,
    pub excerpt_b: String,
    pub conflict_type: ConflictKind,
    pub suggestion: String,
    pub confidence: f64,
}
