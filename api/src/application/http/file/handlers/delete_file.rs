use axum::extract::{Path, State};
use mantaray_core::domain::storage::services::FileService;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/{file_id}",
    tag = "file",
    summary = "Delete a file",
    description = "Removes the stored object and its metadata record.",
    params(
        ("file_id" = Uuid, Path, description = "File ID"),
    ),
    responses(
        (status = 204, description = "File deleted"),
        (status = 404, description = "File not found")
    ),
)]
pub async fn delete_file(
    Path(file_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<()>, ApiError> {
    state
        .service
        .delete_file(file_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::NoContent)
}
