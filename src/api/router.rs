//! HTTP API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! The surface is flat: upload, analyze, read-back, billing, webhook.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Request body cap across all routes, multipart uploads included.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Build the API router over shared core state.
pub fn api_router(core: Arc<CoreState>) -> Router {
    let ctx = ApiContext::new(core);
    build_router(ctx)
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/upload", post(endpoints::documents::upload))
        .route("/analyze", post(endpoints::analyses::analyze))
        .route("/analyses/:id", get(endpoints::analyses::get_analysis))
        .route("/billing/charge", post(endpoints::billing::charge))
        .route("/billing/:user_id", get(endpoints::billing::balance))
        .route("/pathway/webhook", post(endpoints::webhook::webhook))
        .with_state(ctx)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
