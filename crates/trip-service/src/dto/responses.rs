//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Record IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use trip_core::FavoriteToggle;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with an access token
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserProfileResponse,
}

impl AuthResponse {
    pub fn new(access_token: String, expires_in: i64, user: UserProfileResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Full profile of the authenticated traveler
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: NaiveDate,
    pub current_age: u32,
    pub lives_at: String,
    pub hobby1: String,
    pub hobby2: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Travel Plan Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TravelPlanResponse {
    pub id: String,
    pub phone_number: String,
    pub destination: String,
    pub departure_month: String,
    pub spontaneity: String,
    pub cluster: i32,
    pub created_at: DateTime<Utc>,
}

/// Another traveler in the requester's cluster
///
/// Profile fields come from the matched user, intent fields from their plan.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub user_id: String,
    pub full_name: String,
    pub current_age: u32,
    pub lives_at: String,
    pub hobby1: String,
    pub hobby2: String,
    pub phone_number: String,
    pub destination: String,
    pub departure_month: String,
    pub spontaneity: String,
    pub is_favorite: bool,
}

/// Match list for one cluster
#[derive(Debug, Clone, Serialize)]
pub struct ClusterMatchesResponse {
    pub cluster: i32,
    pub matches: Vec<MatchResponse>,
}

/// One of the requester's plans and the travelers sharing its cluster
#[derive(Debug, Clone, Serialize)]
pub struct TravelHistoryEntryResponse {
    pub plan: TravelPlanResponse,
    pub matches: Vec<MatchResponse>,
}

// ============================================================================
// Favorite Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub user_id: String,
    pub full_name: String,
    pub current_age: u32,
    pub lives_at: String,
    pub hobby1: String,
    pub hobby2: String,
    pub phone_number: String,
    /// Most recent plan of the favorited traveler
    pub latest_plan: Option<TravelPlanResponse>,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteStatusResponse {
    pub phone_number: String,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToggleFavoriteResponse {
    pub status: FavoriteToggle,
    pub is_favorite: bool,
}

impl From<FavoriteToggle> for ToggleFavoriteResponse {
    fn from(status: FavoriteToggle) -> Self {
        Self {
            status,
            is_favorite: status.is_favorite(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
