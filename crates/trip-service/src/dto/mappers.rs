//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use trip_core::entities::{FavoriteEntry, TravelHistoryEntry, TravelMatch, TravelPlan, User};

use super::responses::{
    FavoriteResponse, MatchResponse, TravelHistoryEntryResponse, TravelPlanResponse,
    UserProfileResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            date_of_birth: user.date_of_birth,
            current_age: user.current_age,
            lives_at: user.lives_at.clone(),
            hobby1: user.hobby1.clone(),
            hobby2: user.hobby2.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Travel Plan Mappers
// ============================================================================

impl From<&TravelPlan> for TravelPlanResponse {
    fn from(plan: &TravelPlan) -> Self {
        Self {
            id: plan.id.to_string(),
            phone_number: plan.phone_number.clone(),
            destination: plan.destination.clone(),
            departure_month: plan.departure_month.as_str().to_string(),
            spontaneity: plan.spontaneity.as_str().to_string(),
            cluster: plan.cluster.value(),
            created_at: plan.created_at,
        }
    }
}

impl From<&TravelMatch> for MatchResponse {
    fn from(m: &TravelMatch) -> Self {
        Self {
            user_id: m.traveler.id.to_string(),
            full_name: m.traveler.full_name.clone(),
            current_age: m.traveler.current_age,
            lives_at: m.traveler.lives_at.clone(),
            hobby1: m.traveler.hobby1.clone(),
            hobby2: m.traveler.hobby2.clone(),
            phone_number: m.traveler.phone_number.clone(),
            destination: m.plan.destination.clone(),
            departure_month: m.plan.departure_month.as_str().to_string(),
            spontaneity: m.plan.spontaneity.as_str().to_string(),
            is_favorite: m.is_favorite,
        }
    }
}

impl From<&TravelHistoryEntry> for TravelHistoryEntryResponse {
    fn from(entry: &TravelHistoryEntry) -> Self {
        Self {
            plan: TravelPlanResponse::from(&entry.plan),
            matches: entry.matches.iter().map(MatchResponse::from).collect(),
        }
    }
}

// ============================================================================
// Favorite Mappers
// ============================================================================

impl From<&FavoriteEntry> for FavoriteResponse {
    fn from(entry: &FavoriteEntry) -> Self {
        Self {
            user_id: entry.user.id.to_string(),
            full_name: entry.user.full_name.clone(),
            current_age: entry.user.current_age,
            lives_at: entry.user.lives_at.clone(),
            hobby1: entry.user.hobby1.clone(),
            hobby2: entry.user.hobby2.clone(),
            phone_number: entry.user.phone_number.clone(),
            latest_plan: entry.latest_plan.as_ref().map(TravelPlanResponse::from),
            date_added: entry.date_added,
        }
    }
}
