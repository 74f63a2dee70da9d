use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredObject {
    pub id: Uuid,
    pub field_name: String,
    pub original_name: String,
    pub object_key: String,
    pub mime_type: String,
    pub size_bytes: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredObject {
    pub fn new(
        field_name: String,
        original_name: String,
        object_key: String,
        mime_type: String,
        size_bytes: i64,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            field_name,
            original_name,
            object_key,
            mime_type,
            size_bytes,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PresignedUrl {
    pub url: String,
    pub expires_in_seconds: u64,
}
