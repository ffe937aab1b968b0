use chrono::{DateTime, SecondsFormat};
use poem_openapi::Object;
use serde_json::{Map, Value};

use crate::types::db::bug;

/// Fields of a bug submission, read from the raw request body
///
/// Every field is optional so that missing fields are reported by the
/// validator alongside the other rule failures. Text fields that are not JSON
/// strings are read as missing. A non-string status or priority is kept in its
/// JSON form so it fails the enum check instead of falling back to the default.
#[derive(Debug, Clone, Default)]
pub struct CreateBugRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub reported_by: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
}

impl CreateBugRequest {
    pub fn from_body(body: &Map<String, Value>) -> Self {
        Self {
            title: text_field(body, "title"),
            description: text_field(body, "description"),
            reported_by: text_field(body, "reportedBy"),
            status: enum_field(body, "status"),
            priority: enum_field(body, "priority"),
            assigned_to: text_field(body, "assignedTo"),
        }
    }
}

fn text_field(body: &Map<String, Value>, key: &str) -> Option<String> {
    body.get(key).and_then(Value::as_str).map(str::to_string)
}

fn enum_field(body: &Map<String, Value>, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Response model representing a stored bug
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct BugResponse {
    /// Unique identifier for the bug
    pub id: String,

    pub title: String,

    pub description: String,

    pub reported_by: String,

    pub status: String,

    pub priority: String,

    pub assigned_to: String,

    /// Creation time (RFC 3339)
    pub created_at: String,

    /// Last modification time (RFC 3339)
    pub updated_at: String,
}

impl From<bug::Model> for BugResponse {
    fn from(model: bug::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            reported_by: model.reported_by,
            status: model.status,
            priority: model.priority,
            assigned_to: model.assigned_to,
            created_at: format_timestamp(model.created_at),
            updated_at: format_timestamp(model.updated_at),
        }
    }
}

fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Response model for the list endpoint
#[derive(Object, Debug)]
pub struct BugListResponse {
    pub success: bool,

    /// Number of bugs in `data`
    pub count: usize,

    /// Matching bugs, newest first
    pub data: Vec<BugResponse>,
}

impl BugListResponse {
    pub fn new(data: Vec<BugResponse>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Response model wrapping a single bug
#[derive(Object, Debug)]
pub struct BugDataResponse {
    pub success: bool,

    pub data: BugResponse,
}

impl BugDataResponse {
    pub fn new(data: BugResponse) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
