// Test utilities shared across unit tests
// Only compiled when running tests

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use migration::{BugMigrator, MigratorTrait};
use std::sync::Arc;
use crate::stores::BugStore;

/// Creates a migrated in-memory database
///
/// A single pooled connection keeps every query on the same in-memory database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to create test database");

    BugMigrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a bug store over a fresh in-memory database
pub async fn setup_test_bug_store() -> Arc<BugStore> {
    Arc::new(BugStore::new(setup_test_db().await))
}
