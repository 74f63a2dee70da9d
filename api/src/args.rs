use clap::Parser;
use mantaray_core::domain::common::{DatabaseConfig, MantarayConfig, ObjectStorageConfig};

#[derive(Clone, Debug, Parser)]
#[command(name = "mantaray-api", about = "Mantaray HTTP API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub storage: StorageArgs,
}

#[derive(Clone, Debug, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-port", env = "SERVER_PORT", default_value = "3333")]
    pub port: u16,

    #[arg(
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        default_value = "/api/v1"
    )]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "SERVER_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Clone, Debug, clap::Args)]
pub struct DatabaseArgs {
    #[arg(long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "database-port", env = "DATABASE_PORT", default_value = "5432")]
    pub port: u16,

    #[arg(
        long = "database-username",
        env = "DATABASE_USERNAME",
        default_value = "mantaray"
    )]
    pub username: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "mantaray"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "mantaray")]
    pub name: String,
}

#[derive(Clone, Debug, clap::Args)]
pub struct StorageArgs {
    #[arg(
        long = "storage-endpoint",
        env = "STORAGE_ENDPOINT",
        default_value = "http://localhost:9000"
    )]
    pub endpoint: String,

    #[arg(long = "storage-region", env = "STORAGE_REGION", default_value = "us-east-1")]
    pub region: String,

    #[arg(
        long = "storage-access-key",
        env = "STORAGE_ACCESS_KEY",
        default_value = "minioadmin"
    )]
    pub access_key: String,

    #[arg(
        long = "storage-secret-key",
        env = "STORAGE_SECRET_KEY",
        default_value = "minioadmin"
    )]
    pub secret_key: String,

    #[arg(
        long = "storage-bucket",
        env = "STORAGE_BUCKET",
        default_value = "mantaray-uploads"
    )]
    pub bucket: String,

    #[arg(long = "storage-use-ssl", env = "STORAGE_USE_SSL", default_value = "false")]
    pub use_ssl: bool,
}

impl From<Args> for MantarayConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.storage.endpoint,
                region: args.storage.region,
                access_key: args.storage.access_key,
                secret_key: args.storage.secret_key,
                bucket: args.storage.bucket,
                use_ssl: args.storage.use_ssl,
            },
        }
    }
}
