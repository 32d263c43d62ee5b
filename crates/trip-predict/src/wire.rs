//! Wire format of the prediction endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;
use trip_core::{Cluster, NormalizedTravelPlan, PredictionError};

/// Request body; field names follow the model's training columns
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<'a> {
    pub wantstotravelto: &'a str,
    pub wantstoleaveon: &'static str,
    pub isspontanious: &'static str,
}

impl<'a> From<&'a NormalizedTravelPlan> for PredictRequest<'a> {
    fn from(plan: &'a NormalizedTravelPlan) -> Self {
        Self {
            wantstotravelto: &plan.destination,
            wantstoleaveon: plan.departure_month.as_str(),
            isspontanious: plan.spontaneity.as_str(),
        }
    }
}

/// Response body
///
/// `assigned_cluster` is a string by contract; integers are accepted too.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub assigned_cluster: Option<Value>,
    #[serde(default)]
    pub user_data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictResponse {
    /// Resolve the assigned cluster, honoring an error reported in the body
    pub fn into_cluster(self) -> Result<Cluster, PredictionError> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Err(PredictionError::Rejected(message));
        }

        match self.assigned_cluster {
            None | Some(Value::Null) => Err(PredictionError::NoClusterAssigned),
            Some(Value::String(raw)) if raw.trim().is_empty() => {
                Err(PredictionError::NoClusterAssigned)
            }
            Some(Value::String(raw)) => raw
                .parse::<Cluster>()
                .map_err(|_| PredictionError::InvalidCluster(raw)),
            Some(Value::Number(n)) => n
                .as_i64()
                .and_then(|v| Cluster::try_from(v).ok())
                .ok_or_else(|| PredictionError::InvalidCluster(n.to_string())),
            Some(other) => Err(PredictionError::InvalidCluster(other.to_string())),
        }
    }
}
