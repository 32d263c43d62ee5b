//! Favorite handlers
//!
//! Endpoints for the current user's favorite travelers, addressed by phone number.

use axum::{
    extract::{Path, State},
    Json,
};
use trip_service::dto::{FavoriteResponse, FavoriteStatusResponse, ToggleFavoriteResponse};
use trip_service::FavoriteService;

use crate::extractors::{AuthUser, PhonePath};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// List favorites in the order they were added
///
/// GET /favorites
pub async fn get_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<FavoriteResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let favorites = service.list_favorites(auth.user_id).await?;
    Ok(Json(favorites))
}

/// Check whether a phone number is a favorite
///
/// GET /favorites/{phone}
pub async fn get_favorite_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PhonePath>,
) -> ApiResult<Json<FavoriteStatusResponse>> {
    let service = FavoriteService::new(state.service_context());
    let status = service.is_favorite(auth.user_id, path.phone()).await?;
    Ok(Json(status))
}

/// Add a favorite; repeating the call is a no-op
///
/// PUT /favorites/{phone}
pub async fn add_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PhonePath>,
) -> ApiResult<NoContent> {
    let service = FavoriteService::new(state.service_context());
    service.add_favorite(auth.user_id, path.phone()).await?;
    Ok(NoContent)
}

/// Remove a favorite
///
/// DELETE /favorites/{phone}
pub async fn remove_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PhonePath>,
) -> ApiResult<NoContent> {
    let service = FavoriteService::new(state.service_context());
    service.remove_favorite(auth.user_id, path.phone()).await?;
    Ok(NoContent)
}

/// Flip favorite membership
///
/// POST /favorites/{phone}/toggle
pub async fn toggle_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PhonePath>,
) -> ApiResult<Json<ToggleFavoriteResponse>> {
    let service = FavoriteService::new(state.service_context());
    let outcome = service.toggle_favorite(auth.user_id, path.phone()).await?;
    Ok(Json(ToggleFavoriteResponse::from(outcome)))
}
