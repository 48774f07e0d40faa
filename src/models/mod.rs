//! Core data types shared by the pipeline, analysis and API layers.

pub mod analysis;
pub mod conflict;
pub mod document;
pub mod enums;

pub use analysis::AnalysisRecord;
pub use conflict::Conflict;
pub use document::{Document, Fact, StoredBlob};
pub use enums::{ConflictKind, DocumentFormat, FactKind, ModelError};
