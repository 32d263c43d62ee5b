//! Match handlers

use axum::{
    extract::{Path, State},
    Json,
};
use trip_service::dto::ClusterMatchesResponse;
use trip_service::MatchingService;

use crate::extractors::{AuthUser, ClusterPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Other travelers in a cluster
///
/// GET /clusters/{cluster}/matches
pub async fn get_cluster_matches(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<ClusterPath>,
) -> ApiResult<Json<ClusterMatchesResponse>> {
    let cluster = path.cluster()?;
    let service = MatchingService::new(state.service_context());
    let matches = service.find_matches(cluster, auth.user_id).await?;
    Ok(Json(matches))
}
