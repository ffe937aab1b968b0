use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::internal::BugRecordError;
use crate::errors::InternalError;
use crate::services::bug_patch::BugPatch;
use crate::types::db::bug;
use crate::types::internal::bug_fields::{BugPriority, BugStatus};

/// Exact-match filters for listing bugs
#[derive(Debug, Clone, Default)]
pub struct BugFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Sanitized, validated values for a new bug
#[derive(Debug, Clone)]
pub struct NewBug {
    pub title: String,
    pub description: String,
    pub reported_by: String,
    pub status: BugStatus,
    pub priority: BugPriority,
    pub assigned_to: String,
}

/// Bug record store
///
/// Ids are UUID strings generated on insert. Any id that does not parse as a
/// UUID is rejected with `BugRecordError::MalformedId` before the database is
/// queried.
pub struct BugStore {
    db: DatabaseConnection,
}

impl BugStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List bugs matching the filter, newest first
    pub async fn find(&self, filter: &BugFilter) -> Result<Vec<bug::Model>, InternalError> {
        let mut query = bug::Entity::find();

        if let Some(status) = &filter.status {
            query = query.filter(bug::Column::Status.eq(status.as_str()));
        }
        if let Some(priority) = &filter.priority {
            query = query.filter(bug::Column::Priority.eq(priority.as_str()));
        }

        query
            .order_by_desc(bug::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_bugs", e))
    }

    /// Look up a bug by id
    ///
    /// Returns `Ok(None)` for a well-formed id with no matching record.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<bug::Model>, InternalError> {
        let id = parse_id(id)?;

        bug::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_bug_by_id", e))
    }

    /// Insert a new bug and return the stored record
    pub async fn create(&self, new_bug: NewBug) -> Result<bug::Model, InternalError> {
        let now = Utc::now().timestamp_millis();

        let model = bug::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            title: Set(new_bug.title),
            description: Set(new_bug.description),
            reported_by: Set(new_bug.reported_by),
            status: Set(new_bug.status.as_str().to_string()),
            priority: Set(new_bug.priority.as_str().to_string()),
            assigned_to: Set(new_bug.assigned_to),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = model
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_bug", e))?;

        tracing::info!(bug_id = %created.id, "Bug created");

        Ok(created)
    }

    /// Apply a patch to an existing bug and return the updated record
    ///
    /// The patch is validated against the bug field rules before anything is
    /// written. Returns `Ok(None)` if no bug has this id.
    pub async fn update_by_id(
        &self,
        id: &str,
        patch: &BugPatch,
    ) -> Result<Option<bug::Model>, InternalError> {
        let Some(existing) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let changes = patch.validate().map_err(BugRecordError::Validation)?;
        if changes.is_empty() {
            return Ok(Some(existing));
        }

        let mut model = existing.into_active_model();
        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(description) = changes.description {
            model.description = Set(description);
        }
        if let Some(status) = changes.status {
            model.status = Set(status.as_str().to_string());
        }
        if let Some(priority) = changes.priority {
            model.priority = Set(priority.as_str().to_string());
        }
        if let Some(assigned_to) = changes.assigned_to {
            model.assigned_to = Set(assigned_to);
        }
        model.updated_at = Set(Utc::now().timestamp_millis());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_bug", e))?;

        tracing::info!(bug_id = %updated.id, "Bug updated");

        Ok(Some(updated))
    }

    /// Delete a bug by id
    ///
    /// Returns `false` if no bug had this id.
    pub async fn delete_by_id(&self, id: &str) -> Result<bool, InternalError> {
        let id = parse_id(id)?;

        let result = bug::Entity::delete_by_id(id.clone())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_bug", e))?;

        if result.rows_affected > 0 {
            tracing::info!(bug_id = %id, "Bug deleted");
        }

        Ok(result.rows_affected > 0)
    }
}

/// Normalize a client-supplied id to the stored (hyphenated, lowercase) form
fn parse_id(id: &str) -> Result<String, BugRecordError> {
    Uuid::parse_str(id)
        .map(|uuid| uuid.to_string())
        .map_err(|_| BugRecordError::MalformedId(id.to_string()))
}
