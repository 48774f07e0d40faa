//! Transport-agnostic application state.
//!
//! `CoreState` bundles the three stores every request touches. It is
//! wrapped in `Arc` at startup so the HTTP handlers and the analysis
//! engine share one instance.

use std::sync::Arc;

use crate::store::{
    AnalysisStore, BlobStore, CreditLedger, MemoryAnalysisStore, MemoryBlobStore,
    MemoryCreditLedger,
};

// ═══════════════════════════════════════════════════════════
// CoreState — shared by the API layer and the analysis engine
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    /// Raw uploaded files, keyed by id.
    pub blobs: Arc<dyn BlobStore>,
    /// Per-user credit balances.
    pub ledger: Arc<dyn CreditLedger>,
    /// Completed analysis results.
    pub analyses: Arc<dyn AnalysisStore>,
}

impl CoreState {
    /// In-memory stores with the demo account pre-funded.
    pub fn new() -> Self {
        Self {
            blobs: Arc::new(MemoryBlobStore::new()),
            ledger: Arc::new(MemoryCreditLedger::with_demo_user()),
            analyses: Arc::new(MemoryAnalysisStore::new()),
        }
    }

    /// Wire explicit store implementations.
    pub fn with_stores(
        blobs: Arc<dyn BlobStore>,
        ledger: Arc<dyn CreditLedger>,
        analyses: Arc<dyn AnalysisStore>,
    ) -> Self {
        Self {
            blobs,
            ledger,
            analyses,
        }
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}
