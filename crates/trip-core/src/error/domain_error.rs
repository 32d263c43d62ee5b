//! Domain errors - error types for the domain layer

use thiserror::Error;

use super::PredictionError;
use crate::value_objects::RecordId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(RecordId),

    #[error("Travel plan not found: {0}")]
    TravelPlanNotFound(RecordId),

    #[error("No travel plan submitted yet")]
    NoTravelPlan,

    #[error("Favorite not found: {0}")]
    FavoriteNotFound(String),

    #[error("Favorite user not found: {0}")]
    FavoriteUserNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("Date of birth cannot be in the future")]
    InvalidDateOfBirth,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Invalid travel plan {field}: {reason}")]
    InvalidTravelPlan { field: &'static str, reason: String },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Phone number already in use")]
    PhoneAlreadyExists,

    // =========================================================================
    // External Service Errors
    // =========================================================================
    #[error("Prediction service unavailable: {0}")]
    PredictionUnavailable(#[from] PredictionError),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::TravelPlanNotFound(_) => "UNKNOWN_TRAVEL_PLAN",
            Self::NoTravelPlan => "NO_TRAVEL_PLAN",
            Self::FavoriteNotFound(_) => "UNKNOWN_FAVORITE",
            Self::FavoriteUserNotFound(_) => "FAVORITE_USER_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidPhoneNumber(_) => "INVALID_PHONE_NUMBER",
            Self::InvalidDateOfBirth => "INVALID_DATE_OF_BIRTH",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::InvalidTravelPlan { .. } => "INVALID_TRAVEL_PLAN",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::PhoneAlreadyExists => "PHONE_ALREADY_EXISTS",

            // External
            Self::PredictionUnavailable(_) => "PREDICTION_UNAVAILABLE",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::TravelPlanNotFound(_)
                | Self::NoTravelPlan
                | Self::FavoriteNotFound(_)
                | Self::FavoriteUserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidPhoneNumber(_)
                | Self::InvalidDateOfBirth
                | Self::WeakPassword(_)
                | Self::InvalidTravelPlan { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::PhoneAlreadyExists)
    }

    /// Check if an external dependency failed; the caller may retry later
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::PredictionUnavailable(_))
    }

    /// HTTP status carried by this error at the API boundary
    pub fn http_status(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_validation() {
            400
        } else if self.is_conflict() {
            409
        } else if self.is_unavailable() {
            503
        } else {
            500
        }
    }

    pub(crate) fn invalid_plan(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidTravelPlan {
            field,
            reason: reason.into(),
        }
    }
}
