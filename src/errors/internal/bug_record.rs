use thiserror::Error;

/// Bug store specific errors
#[derive(Error, Debug)]
pub enum BugRecordError {
    /// The id is not a well-formed bug identifier
    #[error("Malformed bug id: {0}")]
    MalformedId(String),

    /// Submitted values break the bug field rules
    #[error("Bug validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}
