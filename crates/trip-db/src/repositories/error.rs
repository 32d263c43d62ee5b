//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use trip_core::error::DomainError;
use trip_core::value_objects::RecordId;

use crate::schema::{USERS_EMAIL_UNIQUE, USERS_PHONE_UNIQUE};

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation on the users table to the conflicting field
pub fn map_user_conflict(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(USERS_PHONE_UNIQUE) => DomainError::PhoneAlreadyExists,
                Some(USERS_EMAIL_UNIQUE) => DomainError::EmailAlreadyExists,
                other => DomainError::DatabaseError(format!(
                    "unexpected unique violation on users: {}",
                    other.unwrap_or("unknown constraint")
                )),
            };
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_violation();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: RecordId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "travel plan not found" error
pub fn travel_plan_not_found(id: RecordId) -> DomainError {
    DomainError::TravelPlanNotFound(id)
}

/// Create a "favorite not found" error
pub fn favorite_not_found(phone_number: &str) -> DomainError {
    DomainError::FavoriteNotFound(phone_number.to_string())
}
