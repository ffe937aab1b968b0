use thiserror::Error;

pub mod bug_record;
pub mod database;

pub use bug_record::BugRecordError;
pub use database::DatabaseError;

/// Internal error type for store and service operations
///
/// Infrastructure errors (database) are kept apart from domain errors (bug records).
/// Not exposed via API - endpoints must convert to BugError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    BugRecord(#[from] BugRecordError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation { operation: operation.to_string(), source })
    }
}
