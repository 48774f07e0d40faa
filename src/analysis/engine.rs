use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::core_state::CoreState;
use crate::models::{AnalysisRecord, Document};
use crate::pipeline::{extraction, facts};
use crate::store::StoreError;

use super::checker::MockContradictionCheck;
use super::detector::ConflictDetector;

/// Runs analyses end to end: meter credits, resolve uploads, extract
/// text and facts, detect conflicts, store the result.
pub trait AnalysisEngine: Send + Sync {
    /// Analyze the given uploads on behalf of `user_id`.
    ///
    /// Costs one credit per requested file, charged up front; an
    /// underfunded user is rejected before any document is touched.
    fn analyze(&self, file_ids: &[String], user_id: &str) -> Result<AnalysisRecord, StoreError>;

    /// Fetch a previously stored result.
    fn get_analysis(&self, analysis_id: &Uuid) -> Result<Option<AnalysisRecord>, StoreError>;
}

/// Default engine over the shared stores and the heuristic checker.
pub struct DefaultAnalysisEngine {
    state: Arc<CoreState>,
    detector: ConflictDetector,
}

impl DefaultAnalysisEngine {
    pub fn new(state: Arc<CoreState>) -> Self {
        Self {
            state,
            detector: ConflictDetector::new(Box::new(MockContradictionCheck)),
        }
    }

    pub fn with_detector(state: Arc<CoreState>, detector: ConflictDetector) -> Self {
        Self { state, detector }
    }

    /// Resolve request ids against the blob store.
    ///
    /// Ids that do not parse or do not resolve are skipped here; the
    /// caller still echoes them back in the result.
    fn resolve_documents(&self, file_ids: &[String]) -> Result<Vec<Document>, StoreError> {
        let mut documents = Vec::new();

        for raw_id in file_ids {
            let file_id = match Uuid::parse_str(raw_id) {
                Ok(id) => id,
                Err(_) => {
                    tracing::debug!(file_id = %raw_id, "Skipping unparseable file id");
                    continue;
                }
            };

            let blob = match self.state.blobs.get(&file_id)? {
                Some(blob) => blob,
                None => {
                    tracing::debug!(file_id = %file_id, "Skipping unknown file id");
                    continue;
                }
            };

            let text = extraction::extract_text(&blob.bytes, &blob.format);
            let facts = facts::extract_facts(&text);
            documents.push(Document {
                file_id,
                name: blob.name,
                text,
                facts,
            });
        }

        Ok(documents)
    }
}

impl AnalysisEngine for DefaultAnalysisEngine {
    fn analyze(&self, file_ids: &[String], user_id: &str) -> Result<AnalysisRecord, StoreError> {
        let start = Instant::now();

        // One credit per requested file, resolved or not.
        let cost = file_ids.len() as i64;
        self.state.ledger.debit(user_id, cost)?;

        let documents = self.resolve_documents(file_ids)?;
        let conflicts = self.detector.detect(&documents);

        let record = AnalysisRecord {
            analysis_id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            file_ids: file_ids.to_vec(),
            conflicts,
        };
        self.state.analyses.put(record.clone())?;

        let processing_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            analysis_id = %record.analysis_id,
            user_id,
            requested = file_ids.len(),
            resolved = documents.len(),
            conflicts = record.conflicts.len(),
            processing_ms,
            "Analysis complete"
        );

        Ok(record)
    }

    fn get_analysis(&self, analysis_id: &Uuid) -> Result<Option<AnalysisRecord>, StoreError> {
        self.state.analyses.get(analysis_id)
    }
}
