use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response as AxumResponse};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use mantaray_core::domain::common::entities::app_errors::CoreError;

/// Error carrier for the HTTP layer: an HTTP status code plus a
/// human-readable message. The `Internal` variant wraps an [`anyhow::Error`]
/// so the backtrace captured where the failure was constructed is available
/// when the response is produced.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> AxumResponse {
        let status = self.status_code();

        // 5xx details stay in the logs, the client only sees a generic message
        let message = match &self {
            ApiError::Internal(e) => {
                tracing::error!(
                    error = %e,
                    backtrace = ?e.backtrace(),
                    "Internal server error"
                );
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = ApiErrorBody {
            status: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound("resource not found".to_string()),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::FileTooLarge => ApiError::PayloadTooLarge("file too large".to_string()),
            CoreError::ObjectStorageError(message) => {
                ApiError::Internal(anyhow::anyhow!("object storage error: {}", message))
            }
            CoreError::InternalServerError => {
                ApiError::Internal(anyhow::anyhow!("internal server error"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_map_to_their_status_codes() {
        assert_eq!(
            ApiError::BadRequest("x".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Forbidden("x".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::PayloadTooLarge("x".to_string()).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_core_errors_map_to_http_statuses() {
        assert_eq!(
            ApiError::from(CoreError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(CoreError::Forbidden("no".to_string())).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(CoreError::Invalid("bad".to_string())).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(CoreError::FileTooLarge).status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::from(CoreError::InternalServerError).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_is_preserved_for_client_errors() {
        let error = ApiError::from(CoreError::Invalid("limit out of range".to_string()));

        assert_eq!(error.to_string(), "limit out of range");
    }
}
