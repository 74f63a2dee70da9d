use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;
use crate::domain::query::value_objects::QueryParams;

use super::entities::{PresignedUrl, StoredObject};
use super::value_objects::{CreateStoredObject, Paginated};

/// Port for object storage operations (S3/MinIO). The bucket belongs to the
/// adapter; callers only see object keys.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Upload an object
    fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Generate a presigned GET URL for downloads
    fn presign_get_url(
        &self,
        object_key: &str,
        expires_in: Duration,
    ) -> impl Future<Output = Result<PresignedUrl, CoreError>> + Send;

    /// Delete an object from storage
    fn delete_object(
        &self,
        object_key: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Repository for stored object metadata
#[cfg_attr(test, mockall::automock)]
pub trait StoredObjectRepository: Send + Sync {
    /// Create a new stored object record
    fn create(
        &self,
        input: CreateStoredObject,
    ) -> impl Future<Output = Result<StoredObject, CoreError>> + Send;

    /// List stored object records, driven by the request query parameters
    /// (search, filters, sort, pagination, field projection).
    fn list(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<Paginated<serde_json::Value>, CoreError>> + Send;

    /// Get a stored object by ID
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<StoredObject, CoreError>> + Send;

    /// Delete a stored object record
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}
