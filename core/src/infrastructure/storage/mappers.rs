use chrono::Utc;

use crate::domain::storage::entities::StoredObject;
use crate::entity::stored_objects::Model as StoredObjectModel;

impl From<&StoredObjectModel> for StoredObject {
    fn from(model: &StoredObjectModel) -> Self {
        Self {
            id: model.id,
            field_name: model.field_name.clone(),
            original_name: model.original_name.clone(),
            object_key: model.object_key.clone(),
            mime_type: model.mime_type.clone(),
            size_bytes: model.size_bytes,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
