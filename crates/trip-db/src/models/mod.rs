//! Database models - SQLx-compatible structs for PostgreSQL tables

mod favorite;
mod travel_plan;
mod user;

pub use favorite::FavoriteModel;
pub use travel_plan::TravelPlanModel;
pub use user::UserModel;
