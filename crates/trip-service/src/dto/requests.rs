//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Phone numbers, dates of birth and travel-plan tokens are checked again by the
//! domain value objects inside the services.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: String,

    #[validate(length(min = 1, max = 32, message = "Phone number is required"))]
    pub phone_number: String,

    pub date_of_birth: NaiveDate,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub lives_at: String,

    #[validate(length(min = 1, max = 100, message = "Hobby must be 1-100 characters"))]
    pub hobby1: String,

    #[validate(length(min = 1, max = 100, message = "Hobby must be 1-100 characters"))]
    pub hobby2: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Partial profile update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "Full name must be 1-100 characters"))]
    pub full_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 72, message = "Password must be 6-72 characters"))]
    pub password: Option<String>,

    #[validate(length(min = 1, max = 32, message = "Phone number must be 1-32 characters"))]
    pub phone_number: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub lives_at: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Hobby must be 1-100 characters"))]
    pub hobby1: Option<String>,

    #[validate(length(min = 1, max = 100, message = "Hobby must be 1-100 characters"))]
    pub hobby2: Option<String>,
}

impl UpdateUserRequest {
    /// Check if the request carries no changes
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.phone_number.is_none()
            && self.date_of_birth.is_none()
            && self.lives_at.is_none()
            && self.hobby1.is_none()
            && self.hobby2.is_none()
    }
}

// ============================================================================
// Travel Plan Requests
// ============================================================================

/// Travel plan submission
///
/// Only lengths are checked here; emptiness and token validity are reported per
/// field by normalization.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTravelPlanRequest {
    #[validate(length(max = 200, message = "Destination must be at most 200 characters"))]
    pub destination: String,

    #[validate(length(max = 20, message = "Departure month must be at most 20 characters"))]
    pub departure_month: String,

    #[validate(length(max = 10, message = "Spontaneity must be at most 10 characters"))]
    pub spontaneity: String,
}
