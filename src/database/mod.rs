//! Database connection bootstrap
//!
//! Production connections come from [`DatabaseConfig`]. The test harness uses
//! [`memory`], which opens a named in-memory SQLite database: every pooled
//! connection that uses the same name sees the same data, and the data is gone
//! once the last connection closes.

use std::time::Duration;

use restaurant_api_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

use crate::config::DatabaseConfig;

/// Connect using the application configuration
#[tracing::instrument(skip(config), fields(max_connections = config.max_connections))]
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;

    tracing::info!("Database connected");

    Ok(db)
}

/// URL of the shared-cache in-memory SQLite database called `name`
pub fn memory_url(name: &str) -> String {
    format!("sqlite:file:{}?mode=memory&cache=shared", name)
}

/// Connect to the named in-memory database
///
/// The pool holds exactly one connection so the database stays alive for the
/// lifetime of the returned handle and writers never contend for the
/// shared-cache table locks.
#[tracing::instrument]
pub async fn memory(name: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(memory_url(name));
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Apply every pending migration
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;

    tracing::info!("Database migrations applied");

    Ok(())
}
