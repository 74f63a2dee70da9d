use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{
        builder::{DEFAULT_LIMIT, QueryBuilder},
        value_objects::QueryParams,
    },
    storage::{
        entities::StoredObject,
        ports::StoredObjectRepository,
        services::FILE_SEARCHABLE_FIELDS,
        value_objects::{CreateStoredObject, Paginated},
    },
};
use crate::entity::stored_objects::{
    ActiveModel as StoredObjectActiveModel, Column as StoredObjectColumn,
    Entity as StoredObjectEntity,
};

#[derive(Debug, Clone)]
pub struct PostgresStoredObjectRepository {
    pub db: DatabaseConnection,
}

impl PostgresStoredObjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StoredObjectRepository for PostgresStoredObjectRepository {
    async fn create(&self, input: CreateStoredObject) -> Result<StoredObject, CoreError> {
        let stored_object = StoredObject::new(
            input.field_name,
            input.original_name,
            input.object_key,
            input.mime_type,
            input.size_bytes,
        );

        let active_model = StoredObjectActiveModel {
            id: Set(stored_object.id),
            field_name: Set(stored_object.field_name.clone()),
            original_name: Set(stored_object.original_name.clone()),
            object_key: Set(stored_object.object_key.clone()),
            mime_type: Set(stored_object.mime_type.clone()),
            size_bytes: Set(stored_object.size_bytes),
            created_at: Set(stored_object.created_at.fixed_offset()),
            updated_at: Set(stored_object.updated_at.fixed_offset()),
        };

        active_model.insert(&self.db).await.map_err(|e| {
            error!("Failed to create stored object: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(stored_object)
    }

    async fn list(&self, params: QueryParams) -> Result<Paginated<serde_json::Value>, CoreError> {
        // Count matching records before windowing and projection
        let count = QueryBuilder::new(StoredObjectEntity::find(), params.clone())
            .search(FILE_SEARCHABLE_FIELDS)
            .filter()
            .build()
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count stored objects: {}", e);
                CoreError::InternalServerError
            })?;

        // JSON rows so a projected field subset deserializes as-is
        let items = QueryBuilder::new(StoredObjectEntity::find(), params.clone())
            .search(FILE_SEARCHABLE_FIELDS)
            .filter()
            .sort()
            .paginate()
            .fields()
            .build()
            .into_json()
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to list stored objects: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Paginated {
            items,
            page: params.page.unwrap_or(1),
            limit: params.limit.unwrap_or(DEFAULT_LIMIT),
            count: count as i64,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<StoredObject, CoreError> {
        let model = StoredObjectEntity::find()
            .filter(StoredObjectColumn::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get stored object by id: {}", e);
                CoreError::InternalServerError
            })?
            .ok_or(CoreError::NotFound)?;

        Ok(StoredObject::from(&model))
    }

    async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let result = StoredObjectEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete stored object: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
