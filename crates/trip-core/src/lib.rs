//! # trip-core
//!
//! Domain layer containing entities, value objects, travel-plan normalization,
//! repository traits, and the cluster predictor port.
//! This crate has zero dependencies on infrastructure (database, web framework, HTTP client).

pub mod entities;
pub mod error;
pub mod normalize;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Favorite, FavoriteEntry, FavoriteToggle, TravelHistoryEntry, TravelMatch, TravelPlan, User,
};
pub use error::{DomainError, PredictionError};
pub use normalize::{canonical_destination, NormalizedTravelPlan, RawTravelPlan};
pub use traits::{
    ClusterPredictor, DeleteCascade, FavoriteRepository, PhoneCascade, RepoResult,
    TravelPlanRepository, UserRepository,
};
pub use value_objects::{
    Cluster, DepartureMonth, EmailAddress, IdGenerator, PhoneNumber, RecordId, RecordIdParseError,
    Spontaneity,
};
