use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{DocumentFormat, FactKind};

/// An uploaded file held verbatim until an analysis asks for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBlob {
    pub file_id: Uuid,
    pub name: String,
    pub format: DocumentFormat,
    pub bytes: Vec<u8>,
    pub uploaded_at: DateTime<Utc>,
}

/// A single statement pulled out of a document's text, e.g. an
/// attendance percentage together with the clause it appeared in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub kind: FactKind,
    pub value: String,
    pub context: String,
}

/// A resolved document inside one analysis: extracted text plus the
/// facts found in it. Built fresh per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub file_id: Uuid,
    pub name: String,
    pub text: String,
    pub facts: Vec<Fact>,
}
