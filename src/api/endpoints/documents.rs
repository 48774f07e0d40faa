//! Document upload endpoint.
//!
//! `POST /upload` — receives up to three documents as multipart form
//! data and stores them for later analysis.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

/// Maximum documents per upload request.
const MAX_FILES: usize = 3;
/// Multipart field name carrying the documents.
const FILE_FIELD: &str = "files";

#[derive(Serialize)]
pub struct UploadResponse {
    pub file_ids: Vec<String>,
}

/// `POST /upload` — receive documents for analysis.
///
/// Every part named `files` is staged in memory first; nothing is stored
/// until the whole batch passes validation, so a rejected request leaves
/// no partial uploads behind.
pub async fn upload(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut staged: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let name = display_name(field.file_name());
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Unreadable file part: {e}")))?;
        staged.push((name, bytes.to_vec()));
    }

    if staged.is_empty() {
        return Err(ApiError::BadRequest("No files in upload".into()));
    }
    if staged.len() > MAX_FILES {
        return Err(ApiError::BadRequest(format!("Max {MAX_FILES} files allowed")));
    }

    let mut file_ids: Vec<String> = Vec::with_capacity(staged.len());
    for (name, bytes) in staged {
        let size = bytes.len();
        let file_id = ctx.core.blobs.put(&name, bytes)?;
        tracing::info!(file_id = %file_id, name, size, "Document uploaded");
        file_ids.push(file_id.to_string());
    }

    Ok(Json(UploadResponse { file_ids }))
}

/// Display name for a part, falling back when the client sent none.
fn display_name(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => "document".to_string(),
    }
}
