//! Travel plan entity - a clustered travel request

use chrono::{DateTime, Utc};

use crate::normalize::NormalizedTravelPlan;
use crate::value_objects::{Cluster, DepartureMonth, RecordId, Spontaneity};

/// Persisted travel request
///
/// A plan always carries the cluster the classifier assigned; the unclustered
/// form is [`NormalizedTravelPlan`] and is never stored.
///
/// `phone_number` is a weak reference to the owning [`crate::User`]: it is a
/// copy of the owner's phone at submission time and is rewritten when the
/// owner changes their number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelPlan {
    pub id: RecordId,
    pub phone_number: String,
    pub destination: String,
    pub departure_month: DepartureMonth,
    pub spontaneity: Spontaneity,
    pub cluster: Cluster,
    pub created_at: DateTime<Utc>,
}

impl TravelPlan {
    /// Attach identity, owner, and predicted cluster to a normalized plan
    pub fn from_prediction(
        id: RecordId,
        phone_number: String,
        plan: NormalizedTravelPlan,
        cluster: Cluster,
    ) -> Self {
        Self {
            id,
            phone_number,
            destination: plan.destination,
            departure_month: plan.departure_month,
            spontaneity: plan.spontaneity,
            cluster,
            created_at: Utc::now(),
        }
    }

    pub fn is_spontaneous(&self) -> bool {
        self.spontaneity.is_spontaneous()
    }
}
