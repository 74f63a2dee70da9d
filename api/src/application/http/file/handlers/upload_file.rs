use axum::extract::{Multipart, State};
use bytes::Bytes;
use mantaray_core::domain::storage::{entities::StoredObject, services::FileService};
use tracing::error;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

const MAX_FILE_SIZE: usize = 50 * 1024 * 1024; // 50 MB

#[utoipa::path(
    post,
    path = "/upload",
    tag = "file",
    summary = "Upload a file",
    description = "Upload a file via multipart form data. The payload is stored under a generated object key and its metadata recorded.",
    responses(
        (status = 201, description = "File uploaded", body = StoredObject),
        (status = 400, description = "Bad request"),
        (status = 413, description = "File too large")
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<StoredObject>, ApiError> {
    let mut field_name: Option<String> = None;
    let mut filename: Option<String> = None;
    let mut mime_type: Option<String> = None;
    let mut file_data: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::BadRequest(format!("Failed to read multipart field: {}", e))
    })? {
        // Only file parts carry a filename; other parts are ignored
        if field.file_name().is_none() {
            continue;
        }

        field_name = Some(field.name().unwrap_or("file").to_string());
        filename = field.file_name().map(|name| name.to_string());
        mime_type = field.content_type().map(|ct| ct.to_string());

        let data = field.bytes().await.map_err(|e| {
            error!("Failed to read file bytes: {}", e);
            ApiError::BadRequest(format!("Failed to read file: {}", e))
        })?;

        if data.is_empty() {
            return Err(ApiError::BadRequest("File cannot be empty".to_string()));
        }

        if data.len() > MAX_FILE_SIZE {
            return Err(ApiError::PayloadTooLarge(format!(
                "File too large. Max size is {} bytes",
                MAX_FILE_SIZE
            )));
        }

        file_data = Some(data);
    }

    let field_name = field_name.ok_or_else(|| {
        ApiError::BadRequest("Missing file field in multipart form".to_string())
    })?;
    let filename = filename
        .ok_or_else(|| ApiError::BadRequest("Missing filename in file field".to_string()))?;
    let mime_type = mime_type.unwrap_or_else(|| "application/octet-stream".to_string());
    let file_data = file_data
        .ok_or_else(|| ApiError::BadRequest("Missing file data in file field".to_string()))?;

    let stored_object = state
        .service
        .upload_file(field_name, filename, mime_type, file_data)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(stored_object))
}
