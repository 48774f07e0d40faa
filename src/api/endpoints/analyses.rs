//! Analysis endpoints.
//!
//! `POST /analyze` — charge the user and cross-check uploaded documents.
//! `GET /analyses/:id` — fetch a stored result by id.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::config;
use crate::models::AnalysisRecord;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub file_ids: Option<Vec<String>>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// `POST /analyze` — run contradiction detection over the named documents.
///
/// An omitted, null or empty `user_id` falls back to the demo account.
/// Unknown file ids are skipped during resolution but still echoed (and
/// billed) in the result.
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    let user_id = payload
        .user_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(config::DEMO_USER);
    let file_ids = payload.file_ids.unwrap_or_default();

    let record = ctx.engine.analyze(&file_ids, user_id)?;
    Ok(Json(record))
}

/// `GET /analyses/:id` — fetch a stored analysis.
pub async fn get_analysis(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    let analysis_id =
        Uuid::parse_str(&id).map_err(|_| ApiError::BadRequest("Invalid analysis id".into()))?;

    let record = ctx
        .engine
        .get_analysis(&analysis_id)?
        .ok_or_else(|| ApiError::NotFound(format!("Analysis {analysis_id} not found")))?;

    Ok(Json(record))
}
