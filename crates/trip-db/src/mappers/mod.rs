//! Entity to model mappers
//!
//! This module provides conversions between domain entities (trip-core) and database models.
//! - `From<Model> for Entity` / `TryFrom`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod favorite;
mod travel_plan;
mod user;

pub use travel_plan::{travel_plans_from_models, TravelPlanInsert};
pub use user::UserInsert;
