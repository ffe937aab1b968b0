use crate::types::dto::bugs::CreateBugRequest;
use crate::types::internal::bug_fields::{BugPriority, BugStatus};

pub const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters";
pub const DESCRIPTION_TOO_SHORT: &str = "Description must be at least 10 characters";
pub const REPORTER_REQUIRED: &str = "Reporter name is required";
pub const INVALID_STATUS: &str = "Invalid status value";
pub const INVALID_PRIORITY: &str = "Invalid priority value";

const TITLE_MIN_LENGTH: usize = 3;
const DESCRIPTION_MIN_LENGTH: usize = 10;

/// Outcome of validating a bug submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Failure messages in rule order
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a new bug submission
///
/// Every rule runs; failures are collected rather than short-circuited, in
/// this order: title, description, reporter, status, priority. An empty
/// `status` or `priority` counts as absent so the default applies.
pub fn validate_bug_data(request: &CreateBugRequest) -> ValidationResult {
    let status = request.status.as_deref().filter(|s| !s.is_empty());
    let priority = request.priority.as_deref().filter(|p| !p.is_empty());

    let errors = [
        title_error(request.title.as_deref()),
        description_error(request.description.as_deref()),
        reporter_error(request.reported_by.as_deref()),
        status.and_then(|s| parse_status(s).err()),
        priority.and_then(|p| parse_priority(p).err()),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect();

    ValidationResult::from_errors(errors)
}

/// Title rule: present with at least 3 characters after trimming
pub fn title_error(title: Option<&str>) -> Option<&'static str> {
    min_length_error(title, TITLE_MIN_LENGTH, TITLE_TOO_SHORT)
}

/// Description rule: present with at least 10 characters after trimming
pub fn description_error(description: Option<&str>) -> Option<&'static str> {
    min_length_error(description, DESCRIPTION_MIN_LENGTH, DESCRIPTION_TOO_SHORT)
}

/// Reporter rule: present and not blank
pub fn reporter_error(reported_by: Option<&str>) -> Option<&'static str> {
    min_length_error(reported_by, 1, REPORTER_REQUIRED)
}

/// Enum check for status, shared by creation and updates
pub fn parse_status(value: &str) -> Result<BugStatus, &'static str> {
    BugStatus::parse(value).ok_or(INVALID_STATUS)
}

/// Enum check for priority, shared by creation and updates
pub fn parse_priority(value: &str) -> Result<BugPriority, &'static str> {
    BugPriority::parse(value).ok_or(INVALID_PRIORITY)
}

fn min_length_error(value: Option<&str>, min: usize, message: &'static str) -> Option<&'static str> {
    match value {
        Some(v) if v.trim().chars().count() >= min => None,
        _ => Some(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateBugRequest {
        CreateBugRequest {
            title: Some("Valid Title".to_string()),
            description: Some("Valid description here".to_string()),
            reported_by: Some("John".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_data_passes() {
        let result = validate_bug_data(&valid_request());

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_short_title_fails() {
        let request = CreateBugRequest {
            title: Some("ab".to_string()),
            ..valid_request()
        };

        let result = validate_bug_data(&request);

        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![TITLE_TOO_SHORT.to_string()]);
    }

    #[test]
    fn test_title_length_is_measured_after_trimming() {
        let request = CreateBugRequest {
            title: Some("  ab   ".to_string()),
            ..valid_request()
        };

        assert!(!validate_bug_data(&request).is_valid);
    }

    #[test]
    fn test_short_description_fails() {
        let request = CreateBugRequest {
            description: Some("Short".to_string()),
            ..valid_request()
        };

        let result = validate_bug_data(&request);

        assert_eq!(result.errors, vec![DESCRIPTION_TOO_SHORT.to_string()]);
    }

    #[test]
    fn test_blank_reporter_fails() {
        let request = CreateBugRequest {
            reported_by: Some("   ".to_string()),
            ..valid_request()
        };

        let result = validate_bug_data(&request);

        assert_eq!(result.errors, vec![REPORTER_REQUIRED.to_string()]);
    }

    #[test]
    fn test_missing_fields_fail() {
        let result = validate_bug_data(&CreateBugRequest::default());

        assert_eq!(
            result.errors,
            vec![
                TITLE_TOO_SHORT.to_string(),
                DESCRIPTION_TOO_SHORT.to_string(),
                REPORTER_REQUIRED.to_string(),
            ]
        );
    }

    #[test]
    fn test_collects_errors_in_rule_order() {
        let request = CreateBugRequest {
            title: Some("ab".to_string()),
            description: Some("short".to_string()),
            reported_by: Some(String::new()),
            status: Some("bogus".to_string()),
            priority: Some("super-urgent".to_string()),
            assigned_to: None,
        };

        let result = validate_bug_data(&request);

        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                TITLE_TOO_SHORT.to_string(),
                DESCRIPTION_TOO_SHORT.to_string(),
                REPORTER_REQUIRED.to_string(),
                INVALID_STATUS.to_string(),
                INVALID_PRIORITY.to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_status_fails() {
        let request = CreateBugRequest {
            status: Some("invalid-status".to_string()),
            ..valid_request()
        };

        let result = validate_bug_data(&request);

        assert!(result.errors.contains(&INVALID_STATUS.to_string()));
    }

    #[test]
    fn test_invalid_priority_fails() {
        let request = CreateBugRequest {
            priority: Some("super-urgent".to_string()),
            ..valid_request()
        };

        let result = validate_bug_data(&request);

        assert!(result.errors.contains(&INVALID_PRIORITY.to_string()));
    }

    #[test]
    fn test_empty_enums_count_as_absent() {
        let request = CreateBugRequest {
            status: Some(String::new()),
            priority: Some(String::new()),
            ..valid_request()
        };

        assert!(validate_bug_data(&request).is_valid);
    }

    #[test]
    fn test_valid_enum_values_pass() {
        let request = CreateBugRequest {
            status: Some("in-progress".to_string()),
            priority: Some("critical".to_string()),
            ..valid_request()
        };

        assert!(validate_bug_data(&request).is_valid);
    }

    #[test]
    fn test_parse_status_rejects_empty_string() {
        assert_eq!(parse_status(""), Err(INVALID_STATUS));
        assert_eq!(parse_status("resolved"), Ok(BugStatus::Resolved));
    }
}
