//! Travel plan database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for travel_plans table
#[derive(Debug, Clone, FromRow)]
pub struct TravelPlanModel {
    pub id: i64,
    pub phone_number: String,
    pub wants_to_travel_to: String,
    pub wants_to_leave_on: String,
    pub is_spontaneous: String,
    pub cluster: i32,
    pub created_at: DateTime<Utc>,
}
