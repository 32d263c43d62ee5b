//! Travel plan entity <-> model mapper

use trip_core::entities::TravelPlan;
use trip_core::error::DomainError;
use trip_core::value_objects::{Cluster, RecordId};

use crate::models::TravelPlanModel;

/// Convert TravelPlanModel to TravelPlan entity
///
/// Fails only for rows that bypassed the table constraints.
impl TryFrom<TravelPlanModel> for TravelPlan {
    type Error = DomainError;

    fn try_from(model: TravelPlanModel) -> Result<Self, Self::Error> {
        let corrupt = |what: &str| {
            DomainError::DatabaseError(format!("travel plan {} has invalid {what}", model.id))
        };

        Ok(TravelPlan {
            id: RecordId::new(model.id),
            departure_month: model
                .wants_to_leave_on
                .parse()
                .map_err(|_| corrupt("departure month"))?,
            spontaneity: model
                .is_spontaneous
                .parse()
                .map_err(|_| corrupt("spontaneity"))?,
            cluster: Cluster::new(model.cluster).ok_or_else(|| corrupt("cluster"))?,
            phone_number: model.phone_number,
            destination: model.wants_to_travel_to,
            created_at: model.created_at,
        })
    }
}

/// Convert a batch of rows, failing on the first corrupt one
pub fn travel_plans_from_models(models: Vec<TravelPlanModel>) -> Result<Vec<TravelPlan>, DomainError> {
    models.into_iter().map(TravelPlan::try_from).collect()
}

/// Convert TravelPlan entity reference to values for database insertion
pub struct TravelPlanInsert<'a> {
    pub id: i64,
    pub phone_number: &'a str,
    pub wants_to_travel_to: &'a str,
    pub wants_to_leave_on: &'static str,
    pub is_spontaneous: &'static str,
    pub cluster: i32,
}

impl<'a> TravelPlanInsert<'a> {
    pub fn new(plan: &'a TravelPlan) -> Self {
        Self {
            id: plan.id.into_inner(),
            phone_number: &plan.phone_number,
            wants_to_travel_to: &plan.destination,
            wants_to_leave_on: plan.departure_month.as_str(),
            is_spontaneous: plan.spontaneity.as_str(),
            cluster: plan.cluster.value(),
        }
    }
}
