//! Path parameter extractors
//!
//! Typed parsing of record ids, cluster ids and phone numbers from the path.

use serde::Deserialize;
use trip_core::{Cluster, RecordId};

use crate::response::ApiError;

/// Path parameters with plan_id
#[derive(Debug, Deserialize)]
pub struct PlanIdPath {
    pub plan_id: String,
}

impl PlanIdPath {
    /// Parse plan_id as a record id
    pub fn plan_id(&self) -> Result<RecordId, ApiError> {
        self.plan_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid plan_id format"))
    }
}

/// Path parameters with cluster
#[derive(Debug, Deserialize)]
pub struct ClusterPath {
    pub cluster: String,
}

impl ClusterPath {
    /// Parse cluster as a non-negative cluster id
    pub fn cluster(&self) -> Result<Cluster, ApiError> {
        self.cluster
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid cluster"))
    }
}

/// Path parameters with a phone number
#[derive(Debug, Deserialize)]
pub struct PhonePath {
    pub phone: String,
}

impl PhonePath {
    pub fn phone(&self) -> &str {
        self.phone.trim()
    }
}
