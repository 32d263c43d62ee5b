//! Cluster predictor port

use async_trait::async_trait;

use crate::error::PredictionError;
use crate::normalize::NormalizedTravelPlan;
use crate::value_objects::Cluster;

/// Assigns a cluster to a normalized travel plan
///
/// Implementations make exactly one attempt per call; retry policy belongs to the caller.
#[async_trait]
pub trait ClusterPredictor: Send + Sync {
    async fn predict(&self, plan: &NormalizedTravelPlan) -> Result<Cluster, PredictionError>;
}
