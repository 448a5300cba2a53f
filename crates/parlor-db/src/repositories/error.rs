//! Error handling utilities for repositories

use parlor_core::{DomainError, Snowflake};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return the typed conflict error, falling
/// back to a generic database error otherwise
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "room not found" error
pub fn room_not_found(id: Snowflake) -> DomainError {
    DomainError::RoomNotFound(id)
}
