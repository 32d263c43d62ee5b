//! # trip-service
//!
//! Application layer containing the matching pipeline, the favorites subsystem,
//! account management, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, FavoriteService, MatchingService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, TravelPlanService, UserService,
};
