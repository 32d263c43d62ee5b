//! Matching service
//!
//! Builds the list of other travelers sharing a cluster.

use std::collections::HashSet;

use tracing::{debug, instrument};

use trip_core::entities::{TravelMatch, TravelPlan, User};
use trip_core::{Cluster, DomainError, RecordId};

use crate::dto::{ClusterMatchesResponse, MatchResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Matching service
pub struct MatchingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MatchingService<'a> {
    /// Create a new MatchingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Other travelers in `cluster`, one entry per phone number, in first-occurrence order
    #[instrument(skip(self))]
    pub async fn find_matches(
        &self,
        cluster: Cluster,
        requester_id: RecordId,
    ) -> ServiceResult<ClusterMatchesResponse> {
        let matches = self.matches_by_id(cluster, requester_id).await?;

        Ok(ClusterMatchesResponse {
            cluster: cluster.value(),
            matches: matches.iter().map(MatchResponse::from).collect(),
        })
    }

    /// Entity form of [`Self::find_matches`]
    pub(crate) async fn matches_by_id(
        &self,
        cluster: Cluster,
        requester_id: RecordId,
    ) -> ServiceResult<Vec<TravelMatch>> {
        let plans = self.ctx.travel_plan_repo().find_by_cluster(cluster).await?;
        if plans.is_empty() {
            return Ok(Vec::new());
        }

        let requester = self
            .ctx
            .user_repo()
            .find_by_id(requester_id)
            .await?
            .ok_or(DomainError::UserNotFound(requester_id))?;

        self.collect_matches(plans, &requester).await
    }

    /// Matches in `cluster` for an already resolved requester
    pub(crate) async fn matches_for(
        &self,
        cluster: Cluster,
        requester: &User,
    ) -> ServiceResult<Vec<TravelMatch>> {
        let plans = self.ctx.travel_plan_repo().find_by_cluster(cluster).await?;
        self.collect_matches(plans, requester).await
    }

    async fn collect_matches(
        &self,
        plans: Vec<TravelPlan>,
        requester: &User,
    ) -> ServiceResult<Vec<TravelMatch>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut matches = Vec::new();

        for plan in plans {
            if requester.owns_phone(&plan.phone_number) || seen.contains(&plan.phone_number) {
                continue;
            }

            let Some(traveler) = self.ctx.user_repo().find_by_phone(&plan.phone_number).await?
            else {
                debug!(plan_id = %plan.id, "Skipping plan with dangling phone reference");
                continue;
            };

            let is_favorite = self
                .ctx
                .favorite_repo()
                .exists(requester.id, &plan.phone_number)
                .await?;

            seen.insert(plan.phone_number.clone());
            matches.push(TravelMatch {
                traveler,
                plan,
                is_favorite,
            });
        }

        debug!(requester_id = %requester.id, count = matches.len(), "Matches collected");

        Ok(matches)
    }
}
