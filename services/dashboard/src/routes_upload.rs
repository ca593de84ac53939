use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use dataset::{DatasetError, DatasetInfo, ErrorKind};
use serde::Serialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub total_rows: u64,
    pub dataset: DatasetInfo,
}

fn upload_error(e: DatasetError) -> ApiError {
    match e.kind() {
        ErrorKind::Parse => ApiError::internal(format!("Error reading file: {e}")),
        _ => e.into(),
    }
}

/// Replaces the current dataset with the uploaded CSV (multipart field `file`).
///
/// Nothing is swapped unless the whole file parses and carries every
/// required column.
pub async fn post_upload(
    State(state): State<SharedState>,
    mp: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut mp = mp?;
    let mut file: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = mp.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await?;
            file = Some((filename, bytes));
        }
    }

    let (filename, bytes) = file.ok_or_else(|| ApiError::bad_request("No file in request"))?;
    if filename.trim().is_empty() {
        return Err(ApiError::bad_request("Empty filename"));
    }
    if !filename.to_ascii_lowercase().ends_with(".csv") {
        return Err(ApiError::bad_request("File must be a CSV"));
    }
    if bytes.is_empty() {
        return Err(ApiError::bad_request("Uploaded file is empty"));
    }

    // csv parsing is CPU-bound
    let st = state.clone();
    let source = filename.clone();
    let loaded = tokio::task::spawn_blocking(move || st.store.load(&bytes, source))
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;
    let info = loaded.map_err(upload_error)?;

    info!(
        filename = %filename,
        rows = info.rows,
        dataset_id = %info.id,
        dataset_hash = %hex::encode(&info.dataset_hash[..6]),
        "dataset replaced by upload"
    );

    Ok(Json(UploadResponse {
        success: true,
        message: format!("File uploaded. {} rows loaded.", info.rows),
        total_rows: info.rows,
        dataset: info,
    }))
}
