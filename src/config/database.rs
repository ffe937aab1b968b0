use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use migration::{BugMigrator, MigratorTrait};

use crate::config::BootstrapSettings;
use crate::errors::internal::DatabaseError;
use crate::errors::InternalError;

/// Connect to the bug database
///
/// Does NOT run migrations - call migrate_database() separately.
pub async fn init_database(bootstrap_settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let database_url = bootstrap_settings.database_url();

    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .map_err(|source| DatabaseError::Connect { source })?;

    tracing::debug!("Connected to database: {}", database_url);

    Ok(db)
}

/// Apply all pending schema migrations
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    BugMigrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
