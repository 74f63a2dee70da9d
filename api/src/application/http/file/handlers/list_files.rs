use axum::extract::State;
use mantaray_core::domain::storage::services::FileService;
use mantaray_core::domain::storage::value_objects::Paginated;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::query_extractor::QueryParamsExtractor;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ListFilesResponse {
    pub data: Paginated<serde_json::Value>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "file",
    summary = "List files",
    description = "List stored files. Supports searchTerm, equality filters, sortBy, page/limit and fields query parameters.",
    responses(
        (status = 200, body = ListFilesResponse)
    ),
)]
pub async fn list_files(
    QueryParamsExtractor(params): QueryParamsExtractor,
    State(state): State<AppState>,
) -> Result<Response<ListFilesResponse>, ApiError> {
    let files = state
        .service
        .list_files(params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListFilesResponse { data: files }))
}
