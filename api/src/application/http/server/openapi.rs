use utoipa::OpenApi;

use crate::application::http::file::router::FileApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mantaray API"
    ),
    nest(
        (path = "/api/v1/files", api = FileApiDoc),
    )
)]
pub struct ApiDoc;
