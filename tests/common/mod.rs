// Common test utilities for integration tests
#![allow(dead_code)]

use bugtrack_backend::api::build_app;
use bugtrack_backend::app_data::AppData;
use bugtrack_backend::stores::BugStore;
use migration::{BugMigrator, MigratorTrait};
use poem::test::{TestClient, TestResponse};
use poem::Endpoint;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use std::sync::Arc;

/// Creates a migrated in-memory database
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

/// Creates a bug store over a fresh database, returning the connection too
pub async fn setup_test_store() -> (DatabaseConnection, BugStore) {
    let db = setup_test_db().await;
    (db.clone(), BugStore::new(db))
}

/// Builds the full HTTP application over a fresh database
pub async fn setup_test_client() -> TestClient<impl Endpoint> {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::init(db));

    TestClient::new(build_app(app_data, "http://localhost:5000/api".to_string()))
}

/// Reads a response body as JSON
pub async fn json_body(response: TestResponse) -> Value {
    response
        .0
        .into_body()
        .into_json()
        .await
        .expect("Response body is not JSON")
}
