use serde_json::{Map, Value};

use crate::services::bug_validator::{
    description_error, parse_priority, parse_status, title_error, INVALID_PRIORITY,
    INVALID_STATUS,
};
use crate::services::sanitizer::sanitize_value;
use crate::types::internal::bug_fields::{BugPriority, BugStatus};

pub const ASSIGNEE_NOT_STRING: &str = "Assignee must be a string";

/// Fields an update request may modify, as they appear on the wire
pub const ALLOWED_UPDATE_FIELDS: [&str; 5] =
    ["title", "description", "status", "priority", "assignedTo"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchField {
    Title,
    Description,
    Status,
    Priority,
    AssignedTo,
}

impl PatchField {
    fn from_key(key: &str) -> Option<Self> {
        match key {
            "title" => Some(Self::Title),
            "description" => Some(Self::Description),
            "status" => Some(Self::Status),
            "priority" => Some(Self::Priority),
            "assignedTo" => Some(Self::AssignedTo),
            _ => None,
        }
    }
}

/// Sanitized, allow-listed subset of an update request body
///
/// Values are kept as raw JSON until [`BugPatch::validate`] checks them, so a
/// non-string value reaches validation unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BugPatch {
    entries: Vec<(PatchField, Value)>,
}

impl BugPatch {
    /// Intersect a request body with [`ALLOWED_UPDATE_FIELDS`]
    ///
    /// Keys outside the allow-list are dropped. Entries follow allow-list
    /// order regardless of the order in the body.
    pub fn from_body(body: &Map<String, Value>) -> Self {
        let entries = ALLOWED_UPDATE_FIELDS
            .iter()
            .filter_map(|key| {
                let field = PatchField::from_key(key)?;
                let value = body.get(*key)?;
                Some((field, sanitize_value(value.clone())))
            })
            .collect();

        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, field: PatchField) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value)
    }

    /// Check the patch against the same rules used when creating a bug
    ///
    /// Returns every failure message in field order.
    pub fn validate(&self) -> Result<BugChanges, Vec<String>> {
        let mut changes = BugChanges::default();
        let mut errors = Vec::new();

        for (field, value) in &self.entries {
            let text = value.as_str();
            match field {
                PatchField::Title => match title_error(text) {
                    Some(err) => errors.push(err.to_string()),
                    None => changes.title = text.map(str::to_string),
                },
                PatchField::Description => match description_error(text) {
                    Some(err) => errors.push(err.to_string()),
                    None => changes.description = text.map(str::to_string),
                },
                PatchField::Status => match text.map(parse_status) {
                    Some(Ok(status)) => changes.status = Some(status),
                    Some(Err(err)) => errors.push(err.to_string()),
                    None => errors.push(INVALID_STATUS.to_string()),
                },
                PatchField::Priority => match text.map(parse_priority) {
                    Some(Ok(priority)) => changes.priority = Some(priority),
                    Some(Err(err)) => errors.push(err.to_string()),
                    None => errors.push(INVALID_PRIORITY.to_string()),
                },
                PatchField::AssignedTo => match text {
                    Some(assignee) => changes.assigned_to = Some(assignee.to_string()),
                    None => errors.push(ASSIGNEE_NOT_STRING.to_string()),
                },
            }
        }

        if errors.is_empty() {
            Ok(changes)
        } else {
            Err(errors)
        }
    }
}

/// Validated, typed changes ready to be written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BugChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<BugStatus>,
    pub priority: Option<BugPriority>,
    pub assigned_to: Option<String>,
}

impl BugChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::bug_validator::TITLE_TOO_SHORT;
    use serde_json::json;

    fn body(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test body must be an object"),
        }
    }

    #[test]
    fn test_drops_fields_outside_allow_list() {
        let patch = BugPatch::from_body(&body(json!({
            "status": "resolved",
            "reportedBy": "Mallory",
            "id": "something-else",
            "createdAt": 0
        })));

        assert_eq!(patch.get(PatchField::Status), Some(&json!("resolved")));
        assert_eq!(patch.entries.len(), 1);
    }

    #[test]
    fn test_sanitizes_string_values() {
        let patch = BugPatch::from_body(&body(json!({
            "title": "  <i>Login</i> fails ",
            "assignedTo": "<b>Dev</b>"
        })));

        assert_eq!(patch.get(PatchField::Title), Some(&json!("iLogin/i fails")));
        assert_eq!(patch.get(PatchField::AssignedTo), Some(&json!("bDev/b")));
    }

    #[test]
    fn test_non_string_values_pass_through_unsanitized() {
        let patch = BugPatch::from_body(&body(json!({ "priority": 3, "title": null })));

        assert_eq!(patch.get(PatchField::Priority), Some(&json!(3)));
        assert_eq!(patch.get(PatchField::Title), Some(&Value::Null));
    }

    #[test]
    fn test_empty_body_gives_empty_patch() {
        let patch = BugPatch::from_body(&Map::new());

        assert!(patch.is_empty());
        assert!(patch.validate().unwrap().is_empty());
    }

    #[test]
    fn test_validate_produces_typed_changes() {
        let patch = BugPatch::from_body(&body(json!({
            "status": "in-progress",
            "priority": "high",
            "assignedTo": "Developer"
        })));

        let changes = patch.validate().unwrap();

        assert_eq!(changes.status, Some(BugStatus::InProgress));
        assert_eq!(changes.priority, Some(BugPriority::High));
        assert_eq!(changes.assigned_to.as_deref(), Some("Developer"));
        assert_eq!(changes.title, None);
    }

    #[test]
    fn test_validate_rejects_invalid_enums() {
        let patch = BugPatch::from_body(&body(json!({ "status": "bogus", "priority": "" })));

        let errors = patch.validate().unwrap_err();

        assert_eq!(errors, vec![INVALID_STATUS.to_string(), INVALID_PRIORITY.to_string()]);
    }

    #[test]
    fn test_validate_rejects_short_title_and_non_string_assignee() {
        let patch = BugPatch::from_body(&body(json!({ "title": "<a>", "assignedTo": 42 })));

        let errors = patch.validate().unwrap_err();

        assert_eq!(errors, vec![TITLE_TOO_SHORT.to_string(), ASSIGNEE_NOT_STRING.to_string()]);
    }
}
