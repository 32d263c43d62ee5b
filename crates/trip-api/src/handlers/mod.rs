//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod favorites;
pub mod health;
pub mod matches;
pub mod travel_plans;
pub mod users;
