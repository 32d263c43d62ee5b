//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in trip-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod favorite;
mod travel_plan;
mod user;

pub use error::map_db_error;
pub use favorite::PgFavoriteRepository;
pub use travel_plan::PgTravelPlanRepository;
pub use user::PgUserRepository;
