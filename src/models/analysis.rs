use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::conflict::Conflict;

/// The full outcome of one analysis run, stored for later retrieval
/// and returned to the caller as-is.
///
/// `file_ids` echoes the request list verbatim, including ids that
/// never resolved to a stored file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_id: Uuid,
    pub user_id: String,
    pub file_ids: Vec<String>,
    pub conflicts: Vec<Conflict>,
}
