//! Travel plan service
//!
//! Normalizes submitted plans, asks the predictor for a cluster and stores the
//! clustered plan. Also serves plan listings, deletion and the requester's history.

use tracing::{info, instrument, warn};

use trip_core::entities::{TravelHistoryEntry, TravelPlan, User};
use trip_core::{Cluster, DomainError, NormalizedTravelPlan, RawTravelPlan, RecordId};

use crate::dto::{
    ClusterMatchesResponse, CreateTravelPlanRequest, MatchResponse, TravelHistoryEntryResponse,
    TravelPlanResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::matching::MatchingService;

/// Travel plan service
pub struct TravelPlanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TravelPlanService<'a> {
    /// Create a new TravelPlanService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a travel plan
    ///
    /// Nothing is stored unless the predictor assigned a cluster. Validation failures
    /// are reported before the predictor is called.
    #[instrument(skip(self, request))]
    pub async fn create_plan(
        &self,
        user_id: RecordId,
        request: CreateTravelPlanRequest,
    ) -> ServiceResult<TravelPlanResponse> {
        let normalized = NormalizedTravelPlan::from_raw(RawTravelPlan {
            destination: &request.destination,
            departure_month: &request.departure_month,
            spontaneity: &request.spontaneity,
        })?;

        let owner = self.owner(user_id).await?;

        let cluster = self
            .ctx
            .predictor()
            .predict(&normalized)
            .await
            .map_err(DomainError::from)?;

        let plan = TravelPlan::from_prediction(
            self.ctx.generate_id(),
            owner.phone_number,
            normalized,
            cluster,
        );

        if let Err(e) = self.ctx.travel_plan_repo().create(&plan).await {
            warn!(
                user_id = %user_id,
                cluster = %cluster,
                error = %e,
                "Travel plan lost after successful prediction"
            );
            return Err(e.into());
        }

        info!(user_id = %user_id, plan_id = %plan.id, cluster = %cluster, "Travel plan created");

        Ok(TravelPlanResponse::from(&plan))
    }

    /// The requester's plans, most recent first
    #[instrument(skip(self))]
    pub async fn list_my_plans(&self, user_id: RecordId) -> ServiceResult<Vec<TravelPlanResponse>> {
        let owner = self.owner(user_id).await?;
        let plans = self
            .ctx
            .travel_plan_repo()
            .find_by_phone(&owner.phone_number)
            .await?;

        Ok(plans.iter().map(TravelPlanResponse::from).collect())
    }

    /// Every stored plan, in insertion order
    #[instrument(skip(self))]
    pub async fn all_plans(&self) -> ServiceResult<Vec<TravelPlan>> {
        Ok(self.ctx.travel_plan_repo().find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn plans_in_cluster(&self, cluster: Cluster) -> ServiceResult<Vec<TravelPlan>> {
        Ok(self.ctx.travel_plan_repo().find_by_cluster(cluster).await?)
    }

    /// Delete one of the requester's plans
    ///
    /// A plan owned by someone else is reported as not found.
    #[instrument(skip(self))]
    pub async fn delete_plan(&self, user_id: RecordId, plan_id: RecordId) -> ServiceResult<()> {
        let owner = self.owner(user_id).await?;

        match self.ctx.travel_plan_repo().find_by_id(plan_id).await? {
            Some(plan) if owner.owns_phone(&plan.phone_number) => {}
            _ => return Err(DomainError::TravelPlanNotFound(plan_id).into()),
        }

        self.ctx.travel_plan_repo().delete(plan_id).await?;

        info!(user_id = %user_id, plan_id = %plan_id, "Travel plan deleted");

        Ok(())
    }

    /// Matches for the cluster of the requester's most recent plan
    #[instrument(skip(self))]
    pub async fn matches_for_latest_plan(
        &self,
        user_id: RecordId,
    ) -> ServiceResult<ClusterMatchesResponse> {
        let owner = self.owner(user_id).await?;
        let latest = self
            .ctx
            .travel_plan_repo()
            .find_latest_by_phone(&owner.phone_number)
            .await?
            .ok_or(DomainError::NoTravelPlan)?;

        let matches = MatchingService::new(self.ctx)
            .matches_for(latest.cluster, &owner)
            .await?;

        Ok(ClusterMatchesResponse {
            cluster: latest.cluster.value(),
            matches: matches.iter().map(MatchResponse::from).collect(),
        })
    }

    /// Each of the requester's plans, most recent first, with the matches of its cluster
    #[instrument(skip(self))]
    pub async fn travel_history(
        &self,
        user_id: RecordId,
    ) -> ServiceResult<Vec<TravelHistoryEntryResponse>> {
        let owner = self.owner(user_id).await?;
        let plans = self
            .ctx
            .travel_plan_repo()
            .find_by_phone(&owner.phone_number)
            .await?;

        let matching = MatchingService::new(self.ctx);
        let mut history = Vec::with_capacity(plans.len());
        for plan in plans {
            let matches = matching.matches_for(plan.cluster, &owner).await?;
            history.push(TravelHistoryEntry { plan, matches });
        }

        Ok(history.iter().map(TravelHistoryEntryResponse::from).collect())
    }

    async fn owner(&self, user_id: RecordId) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }
}
