//! SOP document download / SOP文档下载
//!
//! Errors answer with a flat `{error, ...}` JSON body rather than `ApiResponse`.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use sop_portal::documents::{DocumentError, DOCX_CONTENT_TYPE};
use sop_portal::utils::attachment_disposition;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub id: Option<String>,
}

/// GET /api/sops/download?id= - 下载SOP文档
pub async fn download_sop(State(state): State<Arc<AppState>>, Query(query): Query<DownloadQuery>) -> Response {
    let Some(id) = query.id.as_deref().map(str::trim).filter(|id| !id.is_empty()) else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "SOP ID is required" }))).into_response();
    };

    match state.documents.fetch(id).await {
        Ok(doc) => {
            let headers = [
                (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
                (header::CONTENT_DISPOSITION, attachment_disposition(&doc.file_name)),
                (header::CONTENT_LENGTH, doc.len().to_string()),
            ];
            (StatusCode::OK, headers, doc.bytes).into_response()
        }
        Err(e) => {
            tracing::warn!("download_sop {}: {}", id, e);
            document_error_response(id, e)
        }
    }
}

fn document_error_response(id: &str, err: DocumentError) -> Response {
    let (status, body) = match err {
        DocumentError::NotMapped(_) => (
            StatusCode::NOT_FOUND,
            json!({ "error": "No file found for this SOP", "sopId": id }),
        ),
        DocumentError::Unresolvable(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Could not resolve file path" }),
        ),
        DocumentError::FileMissing { path } => (
            StatusCode::NOT_FOUND,
            json!({ "error": "File not found on disk", "path": path.display().to_string() }),
        ),
        DocumentError::NotAFile { path } => (
            StatusCode::NOT_FOUND,
            json!({ "error": "Path is not a file", "path": path.display().to_string() }),
        ),
        DocumentError::Io(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Failed to read file", "message": message }),
        ),
    };
    (status, Json(body)).into_response()
}
