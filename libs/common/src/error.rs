//! Custom error types for the common library
//!
//! This module defines application-specific error types that can be used
//! throughout the application.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),

    /// A write referenced a row that does not exist, carries the constraint name
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),
}

impl DatabaseError {
    /// Classify a failed insert or update
    pub fn from_write(err: SqlxError) -> Self {
        match &err {
            SqlxError::Database(db) if db.is_foreign_key_violation() => {
                DatabaseError::ForeignKeyViolation(db.constraint().unwrap_or_default().to_string())
            }
            _ => DatabaseError::Query(err),
        }
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DatabaseError::Migration("checksum mismatch".to_string());
        assert_eq!(err.to_string(), "Database migration error: checksum mismatch");

        let err = DatabaseError::Query(SqlxError::RowNotFound);
        assert!(err.to_string().starts_with("Database query error:"));

        let err = DatabaseError::ForeignKeyViolation("meetups_file_id_fkey".to_string());
        assert_eq!(err.to_string(), "Foreign key violation: meetups_file_id_fkey");
    }

    #[test]
    fn test_from_write_keeps_other_errors_as_query() {
        assert!(matches!(
            DatabaseError::from_write(SqlxError::RowNotFound),
            DatabaseError::Query(SqlxError::RowNotFound)
        ));
    }
}
