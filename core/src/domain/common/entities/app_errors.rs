use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Invalid(String),

    #[error("file too large")]
    FileTooLarge,

    #[error("object storage error: {0}")]
    ObjectStorageError(String),

    #[error("internal server error")]
    InternalServerError,
}
