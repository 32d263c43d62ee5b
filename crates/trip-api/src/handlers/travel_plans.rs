//! Travel plan handlers
//!
//! Endpoints for submitting, listing and deleting travel plans.

use axum::{
    extract::{Path, State},
    Json,
};
use trip_service::dto::{ClusterMatchesResponse, CreateTravelPlanRequest, TravelPlanResponse};
use trip_service::TravelPlanService;

use crate::extractors::{AuthUser, PlanIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Submit a travel plan for clustering
///
/// POST /travel-plans
pub async fn create_travel_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTravelPlanRequest>,
) -> ApiResult<Created<Json<TravelPlanResponse>>> {
    let service = TravelPlanService::new(state.service_context());
    let plan = service.create_plan(auth.user_id, request).await?;
    Ok(Created(Json(plan)))
}

/// Get the current user's plans, most recent first
///
/// GET /travel-plans/@me
pub async fn get_my_travel_plans(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<TravelPlanResponse>>> {
    let service = TravelPlanService::new(state.service_context());
    let plans = service.list_my_plans(auth.user_id).await?;
    Ok(Json(plans))
}

/// Get matches for the current user's most recent plan
///
/// GET /travel-plans/@me/matches
pub async fn get_my_matches(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ClusterMatchesResponse>> {
    let service = TravelPlanService::new(state.service_context());
    let matches = service.matches_for_latest_plan(auth.user_id).await?;
    Ok(Json(matches))
}

/// Delete one of the current user's plans
///
/// DELETE /travel-plans/{plan_id}
pub async fn delete_travel_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PlanIdPath>,
) -> ApiResult<NoContent> {
    let plan_id = path.plan_id()?;
    let service = TravelPlanService::new(state.service_context());
    service.delete_plan(auth.user_id, plan_id).await?;
    Ok(NoContent)
}
