use axum::extract::{Path, State};
use mantaray_core::domain::storage::{entities::PresignedUrl, services::FileService};
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{file_id}/download",
    tag = "file",
    summary = "Get a download URL",
    description = "Returns a short-lived presigned URL for downloading the file.",
    params(
        ("file_id" = Uuid, Path, description = "File ID"),
    ),
    responses(
        (status = 200, body = PresignedUrl),
        (status = 404, description = "File not found")
    ),
)]
pub async fn get_download_url(
    Path(file_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<PresignedUrl>, ApiError> {
    let presigned_url = state
        .service
        .get_download_url(file_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(presigned_url))
}
