use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::AnalysisRecord;

use super::StoreError;

/// Completed analysis results, retrievable by id.
pub trait AnalysisStore: Send + Sync {
    fn put(&self, record: AnalysisRecord) -> Result<(), StoreError>;

    fn get(&self, analysis_id: &Uuid) -> Result<Option<AnalysisRecord>, StoreError>;
}

/// In-memory analysis store backed by RwLock.
pub struct MemoryAnalysisStore {
    records: RwLock<HashMap<Uuid, AnalysisRecord>>,
}

impl MemoryAnalysisStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl AnalysisStore for MemoryAnalysisStore {
    fn put(&self, record: AnalysisRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().map_err(|_| StoreError::LockFailed)?;
        records.insert(record.analysis_id, record);
        Ok(())
    }

    fn get(&self, analysis_id: &Uuid) -> Result<Option<AnalysisRecord>, StoreError> {
        let records = self.records.read().map_err(|_| StoreError::LockFailed)?;
        Ok(records.get(analysis_id).cloned())
    }
}

impl Default for MemoryAnalysisStore {
    fn default() -> Self {
        Self::new()
    }
}
