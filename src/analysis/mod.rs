//! Cross-document conflict analysis.
//!
//! The detector walks every unordered document pair with two
//! strategies: a structured comparison of extracted facts and a
//! sentence-pair scan through a pluggable contradiction checker. The
//! engine wraps that in credit metering, upload resolution and result
//! storage.

pub mod checker;
pub mod detector;
pub mod engine;
pub mod messages;

pub use checker::{ContradictionCheck, ContradictionVerdict, MockContradictionCheck};
pub use detector::{ConflictDetector, DetectorConfig};
pub use engine::{AnalysisEngine, DefaultAnalysisEngine};
pub use messages::MessageTemplates;
