use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::{DocumentFormat, StoredBlob};

use super::StoreError;

/// Keyed storage for uploaded files.
pub trait BlobStore: Send + Sync {
    /// Store raw bytes under a fresh id. The format is inferred from
    /// the display name's extension.
    fn put(&self, name: &str, bytes: Vec<u8>) -> Result<Uuid, StoreError>;

    /// Fetch a stored file. Unknown ids are not an error.
    fn get(&self, file_id: &Uuid) -> Result<Option<StoredBlob>, StoreError>;

    /// Number of files currently stored.
    fn count(&self) -> Result<usize, StoreError>;
}

/// In-memory blob store backed by RwLock.
pub struct MemoryBlobStore {
    blobs: RwLock<HashMap<Uuid, StoredBlob>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self {
            blobs: RwLock::new(HashMap::new()),
        }
    }
}

impl BlobStore for MemoryBlobStore {
    fn put(&self, name: &str, bytes: Vec<u8>) -> Result<Uuid, StoreError> {
        let file_id = Uuid::new_v4();
        let blob = StoredBlob {
            file_id,
            name: name.to_string(),
            format: DocumentFormat::from_file_name(name),
            bytes,
            uploaded_at: chrono::Utc::now(),
        };

        let mut blobs = self.blobs.write().map_err(|_| StoreError::LockFailed)?;
        blobs.insert(file_id, blob);

        tracing::debug!(file_id = %file_id, name, "Stored uploaded file");
        Ok(file_id)
    }

    fn get(&self, file_id: &Uuid) -> Result<Option<StoredBlob>, StoreError> {
        let blobs = self.blobs.read().map_err(|_| StoreError::LockFailed)?;
        Ok(blobs.get(file_id).cloned())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let blobs = self.blobs.read().map_err(|_| StoreError::LockFailed)?;
        Ok(blobs.len())
    }
}

impl Default for MemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}
