use crate::domain::common::{MantarayConfig, services::Service};
use crate::infrastructure::db::postgres::{Postgres, PostgresConfig};
use crate::infrastructure::object_storage::s3::S3ObjectStorage;
use crate::infrastructure::storage::repository::PostgresStoredObjectRepository;

pub type MantarayService = Service<S3ObjectStorage, PostgresStoredObjectRepository>;

pub async fn create_service(config: MantarayConfig) -> Result<MantarayService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    let object_storage = S3ObjectStorage::new(config.object_storage.clone());
    let stored_object_repository = PostgresStoredObjectRepository::new(postgres.get_db());

    Ok(Service::new(object_storage, stored_object_repository))
}
