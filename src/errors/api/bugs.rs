use crate::errors::internal::{BugRecordError, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

pub const VALIDATION_FAILED: &str = "Validation failed";
pub const BUG_NOT_FOUND: &str = "Bug not found";
pub const MALFORMED_ID: &str = "Invalid bug ID format";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Bug endpoint error types
#[derive(ApiResponse, Debug)]
pub enum BugError {
    /// Submitted data failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Id is not a well-formed bug identifier
    #[oai(status = 400)]
    MalformedId(Json<ErrorResponse>),

    /// No bug with this id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl BugError {
    /// Create a ValidationFailed error carrying every rule failure
    pub fn validation_failed(details: Vec<String>) -> Self {
        BugError::ValidationFailed(Json(ErrorResponse {
            success: false,
            error: VALIDATION_FAILED.to_string(),
            details: Some(details),
        }))
    }

    /// Create a MalformedId error
    pub fn malformed_id() -> Self {
        BugError::MalformedId(Json(error_body(MALFORMED_ID)))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        BugError::NotFound(Json(error_body(BUG_NOT_FOUND)))
    }

    /// Create a generic internal server error
    ///
    /// Always returns the same message without exposing internal details.
    pub fn internal_server_error() -> Self {
        BugError::InternalError(Json(error_body(INTERNAL_ERROR)))
    }

    /// Convert InternalError to BugError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Infrastructure error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match err {
            InternalError::BugRecord(BugRecordError::MalformedId(id)) => {
                tracing::debug!("Rejected malformed bug id: {}", id);
                Self::malformed_id()
            }
            InternalError::BugRecord(BugRecordError::Validation(details)) => {
                Self::validation_failed(details)
            }
            InternalError::Database(db_err) => {
                tracing::error!("Database failure in bug operation: {}", db_err);
                Self::internal_server_error()
            }
        }
    }

    fn body(&self) -> &ErrorResponse {
        match self {
            BugError::ValidationFailed(json) => &json.0,
            BugError::MalformedId(json) => &json.0,
            BugError::NotFound(json) => &json.0,
            BugError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> &str {
        &self.body().error
    }

    /// Get the validation details, if any
    pub fn details(&self) -> &[String] {
        self.body().details.as_deref().unwrap_or_default()
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            BugError::ValidationFailed(_) | BugError::MalformedId(_) => 400,
            BugError::NotFound(_) => 404,
            BugError::InternalError(_) => 500,
        }
    }
}

impl From<InternalError> for BugError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for BugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub(crate) fn error_body(message: &str) -> ErrorResponse {
    ErrorResponse {
        success: false,
        error: message.to_string(),
        details: None,
    }
}
