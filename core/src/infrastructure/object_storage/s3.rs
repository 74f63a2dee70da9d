use std::time::Duration;

use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    presigning::PresigningConfig,
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::{entities::PresignedUrl, ports::ObjectStoragePort},
};

/// S3-compatible object storage client (MinIO in development), bound to a
/// single configured bucket.
#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Client,
    bucket: String,
}

impl S3ObjectStorage {
    pub fn new(config: ObjectStorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "mantaray",
        );

        // Endpoint URL must not carry a trailing slash
        let endpoint = config.endpoint.trim_end_matches('/');

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            use_ssl = config.use_ssl,
            "Initializing object storage client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket,
        }
    }
}

impl ObjectStoragePort for S3ObjectStorage {
    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<(), CoreError> {
        let payload_size = payload.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type(content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    payload_size,
                    "Failed to upload object"
                );
                CoreError::ObjectStorageError(format!("Failed to upload object: {}", e))
            })?;

        tracing::info!(
            bucket = %self.bucket,
            object_key = %object_key,
            size = payload_size,
            "Object uploaded"
        );

        Ok(())
    }

    #[instrument(skip(self))]
    async fn presign_get_url(
        &self,
        object_key: &str,
        expires_in: Duration,
    ) -> Result<PresignedUrl, CoreError> {
        let presigning_config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| CoreError::ObjectStorageError(format!("Invalid expiration: {}", e)))?;

        let presigned_request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(object_key)
            .presigned(presigning_config)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    "Failed to generate presigned GET URL"
                );
                CoreError::ObjectStorageError(format!("Failed to generate presigned URL: {}", e))
            })?;

        Ok(PresignedUrl {
            url: presigned_request.uri().to_string(),
            expires_in_seconds: expires_in.as_secs(),
        })
    }

    #[instrument(skip(self))]
    async fn delete_object(&self, object_key: &str) -> Result<(), CoreError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(object_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    "Failed to delete object"
                );
                CoreError::ObjectStorageError(format!("Failed to delete object: {}", e))
            })?;

        tracing::info!(
            bucket = %self.bucket,
            object_key = %object_key,
            "Object deleted"
        );

        Ok(())
    }
}
