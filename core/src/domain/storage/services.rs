use std::future::Future;
use std::time::Duration;

use bytes::Bytes;
use tracing::instrument;
use uuid::Uuid;

use crate::domain::common::{
    entities::app_errors::CoreError, generate_random_string, services::Service,
};
use crate::domain::query::value_objects::QueryParams;

use super::entities::{PresignedUrl, StoredObject};
use super::ports::{ObjectStoragePort, StoredObjectRepository};
use super::value_objects::{CreateStoredObject, Paginated};

/// Fields matched by the `searchTerm` parameter when listing files.
pub const FILE_SEARCHABLE_FIELDS: &[&str] = &["original_name", "field_name", "mime_type"];

const DOWNLOAD_URL_TTL: Duration = Duration::from_secs(300);

const MAX_FILE_SIZE_BYTES: i64 = 52_428_800; // 50 MB

/// Storage key for an uploaded file: random token, upload instant in unix
/// millis, the form field name and the original filename without its
/// extension.
pub fn object_key(field_name: &str, original_name: &str) -> String {
    format!(
        "{}-{}-{}-{}",
        generate_random_string(12),
        chrono::Utc::now().timestamp_millis(),
        field_name,
        strip_extension(original_name),
    )
}

/// Strip the final extension; a name without one is kept whole.
fn strip_extension(filename: &str) -> &str {
    filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename)
}

/// Service trait for file storage operations
pub trait FileService: Send + Sync {
    /// Store the payload under a generated key and record its metadata
    fn upload_file(
        &self,
        field_name: String,
        filename: String,
        mime_type: String,
        payload: Bytes,
    ) -> impl Future<Output = Result<StoredObject, CoreError>> + Send;

    /// List file records driven by the request query parameters
    fn list_files(
        &self,
        params: QueryParams,
    ) -> impl Future<Output = Result<Paginated<serde_json::Value>, CoreError>> + Send;

    /// Get a download URL for a file
    fn get_download_url(
        &self,
        object_id: Uuid,
    ) -> impl Future<Output = Result<PresignedUrl, CoreError>> + Send;

    /// Delete a file and its metadata record
    fn delete_file(&self, object_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

impl<OS, SO> FileService for Service<OS, SO>
where
    OS: ObjectStoragePort,
    SO: StoredObjectRepository,
{
    #[instrument(skip(self, payload), fields(filename = %filename))]
    async fn upload_file(
        &self,
        field_name: String,
        filename: String,
        mime_type: String,
        payload: Bytes,
    ) -> Result<StoredObject, CoreError> {
        let size_bytes = payload.len() as i64;
        if size_bytes > MAX_FILE_SIZE_BYTES {
            return Err(CoreError::FileTooLarge);
        }

        let key = object_key(&field_name, &filename);

        self.object_storage
            .put_object(&key, payload, &mime_type)
            .await?;

        let stored_object = self
            .stored_object_repository
            .create(CreateStoredObject {
                field_name,
                original_name: filename,
                object_key: key.clone(),
                mime_type,
                size_bytes,
            })
            .await?;

        tracing::info!(
            object_id = %stored_object.id,
            object_key = %key,
            "File uploaded"
        );

        Ok(stored_object)
    }

    #[instrument(skip(self))]
    async fn list_files(
        &self,
        params: QueryParams,
    ) -> Result<Paginated<serde_json::Value>, CoreError> {
        let result = self.stored_object_repository.list(params).await?;

        tracing::debug!(
            count = result.items.len(),
            total = result.count,
            "Listed files"
        );

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn get_download_url(&self, object_id: Uuid) -> Result<PresignedUrl, CoreError> {
        let stored_object = self.stored_object_repository.get_by_id(object_id).await?;

        self.object_storage
            .presign_get_url(&stored_object.object_key, DOWNLOAD_URL_TTL)
            .await
    }

    #[instrument(skip(self))]
    async fn delete_file(&self, object_id: Uuid) -> Result<(), CoreError> {
        let stored_object = self.stored_object_repository.get_by_id(object_id).await?;

        self.object_storage
            .delete_object(&stored_object.object_key)
            .await?;
        self.stored_object_repository.delete(object_id).await?;

        tracing::info!(object_id = %object_id, "File deleted");

        Ok(())
    }
}
