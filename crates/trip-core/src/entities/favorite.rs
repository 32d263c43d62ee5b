//! Favorite entity - a requester's bookmark on another traveler

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{TravelPlan, User};
use crate::value_objects::RecordId;

/// Directed relation from `user_id` to the traveler reachable at `favorite_phone_number`
///
/// `(user_id, favorite_phone_number)` is unique. The phone number is denormalized from
/// the favorited user and follows their phone changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: RecordId,
    pub user_id: RecordId,
    pub favorite_user_id: RecordId,
    pub favorite_phone_number: String,
    pub date_added: DateTime<Utc>,
}

impl Favorite {
    pub fn new(id: RecordId, owner: RecordId, target: &User) -> Self {
        Self {
            id,
            user_id: owner,
            favorite_user_id: target.id,
            favorite_phone_number: target.phone_number.clone(),
            date_added: Utc::now(),
        }
    }
}

/// Outcome of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteToggle {
    Added,
    Removed,
}

impl FavoriteToggle {
    /// Membership after the toggle
    pub fn is_favorite(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// A favorited traveler resolved for display
#[derive(Debug, Clone)]
pub struct FavoriteEntry {
    pub user: User,
    /// Most recent plan of the favorited traveler, if any
    pub latest_plan: Option<TravelPlan>,
    pub date_added: DateTime<Utc>,
}
