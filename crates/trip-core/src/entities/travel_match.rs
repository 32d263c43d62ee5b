//! Match aggregates built by the matching pipeline

use super::{TravelPlan, User};

/// Another traveler sharing the requester's cluster
#[derive(Debug, Clone)]
pub struct TravelMatch {
    pub traveler: User,
    /// First plan of `traveler` encountered in the cluster
    pub plan: TravelPlan,
    /// Whether the requester has favorited the traveler's phone number, read at query time
    pub is_favorite: bool,
}

/// One of the requester's plans together with its matches
#[derive(Debug, Clone)]
pub struct TravelHistoryEntry {
    pub plan: TravelPlan,
    pub matches: Vec<TravelMatch>,
}
