//! Shared types for the API layer.

use std::sync::Arc;

use crate::analysis::{AnalysisEngine, DefaultAnalysisEngine};
use crate::core_state::CoreState;

// ═══════════════════════════════════════════════════════════
// API context — shared state for the router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes.
/// Wraps `CoreState` plus the analysis engine built over it.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
    pub engine: Arc<dyn AnalysisEngine>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        let engine = Arc::new(DefaultAnalysisEngine::new(core.clone()));
        Self { core, engine }
    }
}
