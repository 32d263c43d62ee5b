//! Domain entities

mod favorite;
mod travel_match;
mod travel_plan;
mod user;

pub use favorite::{Favorite, FavoriteEntry, FavoriteToggle};
pub use travel_match::{TravelHistoryEntry, TravelMatch};
pub use travel_plan::TravelPlan;
pub use user::User;

