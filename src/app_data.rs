use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::stores::BugStore;

/// Application data shared by every request handler
///
/// Created once at startup from an already migrated connection and handed to
/// the API layer explicitly. Tests build their own instance over an in-memory
/// database.
pub struct AppData {
    pub bug_store: Arc<BugStore>,
}

impl AppData {
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let bug_store = Arc::new(BugStore::new(db));

        Self { bug_store }
    }
}
