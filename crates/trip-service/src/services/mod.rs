//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.
//! Every operation acting on behalf of a user takes that user's id explicitly.

pub mod auth;
pub mod context;
pub mod error;
pub mod favorite;
pub mod matching;
pub mod travel_plan;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use favorite::FavoriteService;
pub use matching::MatchingService;
pub use travel_plan::TravelPlanService;
pub use user::UserService;
