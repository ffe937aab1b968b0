#[cfg(test)]
mod tests {
    use crate::errors::internal::{BugRecordError, DatabaseError, InternalError};
    use sea_orm::DbErr;

    #[test]
    fn test_database_error_includes_operation() {
        let db_err = DbErr::RecordNotFound("test record".to_string());
        let error = InternalError::database("create_bug", db_err);

        let error_string = error.to_string();
        assert!(error_string.contains("create_bug"));
        assert!(error_string.contains("Database error"));
    }

    #[test]
    fn test_connect_error_is_transparent() {
        let error = InternalError::from(DatabaseError::Connect {
            source: DbErr::Custom("refused".to_string()),
        });

        assert!(error.to_string().contains("Connecting to database failed"));
    }

    #[test]
    fn test_validation_error_lists_messages() {
        let error = InternalError::BugRecord(BugRecordError::Validation(vec![
            "Invalid status value".to_string(),
            "Invalid priority value".to_string(),
        ]));

        assert_eq!(
            error.to_string(),
            "Bug validation failed: Invalid status value; Invalid priority value"
        );
    }
}
