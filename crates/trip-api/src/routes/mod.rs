//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, favorites, health, matches, travel_plans, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(travel_plan_routes())
        .merge(favorite_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/@me",
            get(users::get_current_user)
                .patch(users::update_current_user)
                .delete(users::delete_current_user),
        )
        .route("/users/@me/history", get(users::get_travel_history))
}

/// Travel plan and matching routes
fn travel_plan_routes() -> Router<AppState> {
    Router::new()
        .route("/travel-plans", post(travel_plans::create_travel_plan))
        .route("/travel-plans/@me", get(travel_plans::get_my_travel_plans))
        .route("/travel-plans/@me/matches", get(travel_plans::get_my_matches))
        .route("/travel-plans/:plan_id", delete(travel_plans::delete_travel_plan))
        .route("/clusters/:cluster/matches", get(matches::get_cluster_matches))
}

/// Favorite routes
fn favorite_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(favorites::get_favorites))
        .route(
            "/favorites/:phone",
            get(favorites::get_favorite_status)
                .put(favorites::add_favorite)
                .delete(favorites::remove_favorite),
        )
        .route("/favorites/:phone/toggle", post(favorites::toggle_favorite))
}
