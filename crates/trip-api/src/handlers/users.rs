//! User handlers
//!
//! Endpoints for the authenticated user's profile and travel history.

use axum::{extract::State, Json};
use trip_service::dto::{TravelHistoryEntryResponse, UpdateUserRequest, UserProfileResponse};
use trip_service::{TravelPlanService, UserService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete current user with their plans and favorites
///
/// DELETE /users/@me
pub async fn delete_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete_account(auth.user_id).await?;
    Ok(NoContent)
}

/// Get the current user's plans with their matches
///
/// GET /users/@me/history
pub async fn get_travel_history(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<TravelHistoryEntryResponse>>> {
    let service = TravelPlanService::new(state.service_context());
    let history = service.travel_history(auth.user_id).await?;
    Ok(Json(history))
}
