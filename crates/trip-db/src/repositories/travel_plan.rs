//! PostgreSQL implementation of TravelPlanRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use trip_core::entities::TravelPlan;
use trip_core::traits::{RepoResult, TravelPlanRepository};
use trip_core::value_objects::{Cluster, RecordId};

use crate::mappers::{travel_plans_from_models, TravelPlanInsert};
use crate::models::TravelPlanModel;

use super::error::{map_db_error, travel_plan_not_found};

/// PostgreSQL implementation of TravelPlanRepository
#[derive(Clone)]
pub struct PgTravelPlanRepository {
    pool: PgPool,
}

impl PgTravelPlanRepository {
    /// Create a new PgTravelPlanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TravelPlanRepository for PgTravelPlanRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<TravelPlan>> {
        let result = sqlx::query_as::<_, TravelPlanModel>(
            r"
            SELECT id, phone_number, wants_to_travel_to, wants_to_leave_on, is_spontaneous,
                   cluster, created_at
            FROM travel_plans
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(TravelPlan::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_cluster(&self, cluster: Cluster) -> RepoResult<Vec<TravelPlan>> {
        let models = sqlx::query_as::<_, TravelPlanModel>(
            r"
            SELECT id, phone_number, wants_to_travel_to, wants_to_leave_on, is_spontaneous,
                   cluster, created_at
            FROM travel_plans
            WHERE cluster = $1
            ORDER BY id ASC
            ",
        )
        .bind(cluster.value())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        travel_plans_from_models(models)
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Vec<TravelPlan>> {
        let models = sqlx::query_as::<_, TravelPlanModel>(
            r"
            SELECT id, phone_number, wants_to_travel_to, wants_to_leave_on, is_spontaneous,
                   cluster, created_at
            FROM travel_plans
            WHERE phone_number = $1
            ORDER BY id DESC
            ",
        )
        .bind(phone_number)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        travel_plans_from_models(models)
    }

    #[instrument(skip(self))]
    async fn find_latest_by_phone(&self, phone_number: &str) -> RepoResult<Option<TravelPlan>> {
        let result = sqlx::query_as::<_, TravelPlanModel>(
            r"
            SELECT id, phone_number, wants_to_travel_to, wants_to_leave_on, is_spontaneous,
                   cluster, created_at
            FROM travel_plans
            WHERE phone_number = $1
            ORDER BY id DESC
            LIMIT 1
            ",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(TravelPlan::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<TravelPlan>> {
        let models = sqlx::query_as::<_, TravelPlanModel>(
            r"
            SELECT id, phone_number, wants_to_travel_to, wants_to_leave_on, is_spontaneous,
                   cluster, created_at
            FROM travel_plans
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        travel_plans_from_models(models)
    }

    #[instrument(skip(self, plan), fields(plan_id = %plan.id, cluster = %plan.cluster))]
    async fn create(&self, plan: &TravelPlan) -> RepoResult<()> {
        let insert = TravelPlanInsert::new(plan);

        sqlx::query(
            r"
            INSERT INTO travel_plans (id, phone_number, wants_to_travel_to, wants_to_leave_on,
                                      is_spontaneous, cluster, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(insert.id)
        .bind(insert.phone_number)
        .bind(insert.wants_to_travel_to)
        .bind(insert.wants_to_leave_on)
        .bind(insert.is_spontaneous)
        .bind(insert.cluster)
        .bind(plan.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: RecordId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM travel_plans WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(travel_plan_not_found(id));
        }

        Ok(())
    }
}
