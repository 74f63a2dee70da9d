use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use utoipa::OpenApi;

use crate::application::http::server::app_state::AppState;

use super::handlers::{
    delete_file::{__path_delete_file, delete_file},
    get_download_url::{__path_get_download_url, get_download_url},
    list_files::{__path_list_files, list_files},
    upload_file::{__path_upload_file, upload_file},
};

#[derive(OpenApi)]
#[openapi(paths(upload_file, list_files, get_download_url, delete_file))]
pub struct FileApiDoc;

pub fn file_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/files/upload", state.args.server.root_path),
            post(upload_file),
        )
        .route(
            &format!("{}/files", state.args.server.root_path),
            get(list_files),
        )
        .route(
            &format!("{}/files/{{file_id}}/download", state.args.server.root_path),
            get(get_download_url),
        )
        .route(
            &format!("{}/files/{{file_id}}", state.args.server.root_path),
            delete(delete_file),
        )
        // Request body cap for file uploads
        .layer(DefaultBodyLimit::max(50 * 1024 * 1024))
}
