use poem_openapi::{ApiResponse, OpenApi, Tags, param::{Path, Query}, payload::Json};
use serde_json::Value;
use std::sync::Arc;

use crate::errors::BugError;
use crate::services::bug_patch::BugPatch;
use crate::services::bug_validator::validate_bug_data;
use crate::services::sanitizer::sanitize;
use crate::stores::{BugFilter, BugStore, NewBug};
use crate::types::dto::bugs::{BugDataResponse, BugListResponse, BugResponse, CreateBugRequest};
use crate::types::dto::common::MessageResponse;
use crate::types::internal::bug_fields::{BugPriority, BugStatus, DEFAULT_ASSIGNEE};

const BODY_NOT_OBJECT: &str = "Request body must be a JSON object";

/// Bug CRUD API endpoints
pub struct BugsApi {
    bug_store: Arc<BugStore>,
}

impl BugsApi {
    /// Create a new BugsApi backed by the given BugStore
    pub fn new(bug_store: Arc<BugStore>) -> Self {
        Self { bug_store }
    }
}

/// API tags for bug endpoints
#[derive(Tags)]
enum BugTags {
    /// Bug report management
    Bugs,
}

#[derive(ApiResponse, Debug)]
pub enum CreateBugResponse {
    /// Bug stored
    #[oai(status = 201)]
    Created(Json<BugDataResponse>),
}

#[OpenApi]
impl BugsApi {
    /// List bugs, newest first, optionally filtered by status and priority
    #[oai(path = "/bugs", method = "get", tag = "BugTags::Bugs")]
    async fn list_bugs(
        &self,
        status: Query<Option<String>>,
        priority: Query<Option<String>>,
    ) -> Result<Json<BugListResponse>, BugError> {
        let filter = BugFilter {
            status: status.0.filter(|s| !s.is_empty()),
            priority: priority.0.filter(|p| !p.is_empty()),
        };

        let bugs = self.bug_store.find(&filter).await?;
        tracing::debug!(count = bugs.len(), ?filter, "Listed bugs");

        Ok(Json(BugListResponse::new(
            bugs.into_iter().map(BugResponse::from).collect(),
        )))
    }

    /// Get a single bug by id
    #[oai(path = "/bugs/:id", method = "get", tag = "BugTags::Bugs")]
    async fn get_bug(&self, id: Path<String>) -> Result<Json<BugDataResponse>, BugError> {
        let bug = self
            .bug_store
            .find_by_id(&id.0)
            .await?
            .ok_or_else(BugError::not_found)?;

        Ok(Json(BugDataResponse::new(bug.into())))
    }

    /// Report a new bug
    ///
    /// Text fields are stripped of angle brackets and trimmed before storage.
    /// Fields of the wrong JSON type fail validation like missing ones.
    #[oai(path = "/bugs", method = "post", tag = "BugTags::Bugs")]
    async fn create_bug(&self, body: Json<Value>) -> Result<CreateBugResponse, BugError> {
        let Value::Object(fields) = &body.0 else {
            return Err(BugError::validation_failed(vec![BODY_NOT_OBJECT.to_string()]));
        };

        let request = CreateBugRequest::from_body(fields);
        let validation = validate_bug_data(&request);
        if !validation.is_valid {
            tracing::debug!(errors = ?validation.errors, "Rejected bug submission");
            return Err(BugError::validation_failed(validation.errors));
        }

        let bug = self.bug_store.create(new_bug_from_request(request)).await?;

        Ok(CreateBugResponse::Created(Json(BugDataResponse::new(bug.into()))))
    }

    /// Update a bug
    ///
    /// Only title, description, status, priority and assignedTo can be
    /// changed; any other field in the body is ignored.
    #[oai(path = "/bugs/:id", method = "put", tag = "BugTags::Bugs")]
    async fn update_bug(
        &self,
        id: Path<String>,
        body: Json<Value>,
    ) -> Result<Json<BugDataResponse>, BugError> {
        let Value::Object(fields) = &body.0 else {
            return Err(BugError::validation_failed(vec![BODY_NOT_OBJECT.to_string()]));
        };

        let patch = BugPatch::from_body(fields);
        let bug = self
            .bug_store
            .update_by_id(&id.0, &patch)
            .await?
            .ok_or_else(BugError::not_found)?;

        Ok(Json(BugDataResponse::new(bug.into())))
    }

    /// Delete a bug
    #[oai(path = "/bugs/:id", method = "delete", tag = "BugTags::Bugs")]
    async fn delete_bug(&self, id: Path<String>) -> Result<Json<MessageResponse>, BugError> {
        if !self.bug_store.delete_by_id(&id.0).await? {
            return Err(BugError::not_found());
        }

        Ok(Json(MessageResponse::new("Bug deleted successfully")))
    }
}

/// Sanitize a validated submission and fill in defaults
fn new_bug_from_request(request: CreateBugRequest) -> NewBug {
    let assigned_to = request
        .assigned_to
        .as_deref()
        .map(sanitize)
        .filter(|assignee| !assignee.is_empty())
        .unwrap_or_else(|| DEFAULT_ASSIGNEE.to_string());

    NewBug {
        title: sanitize(request.title.as_deref().unwrap_or_default()),
        description: sanitize(request.description.as_deref().unwrap_or_default()),
        reported_by: sanitize(request.reported_by.as_deref().unwrap_or_default()),
        status: request
            .status
            .as_deref()
            .and_then(BugStatus::parse)
            .unwrap_or_default(),
        priority: request
            .priority
            .as_deref()
            .and_then(BugPriority::parse)
            .unwrap_or_default(),
        assigned_to,
    }
}
