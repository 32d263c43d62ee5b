//! Ports implemented by the infrastructure crates

mod predictor;
mod repositories;

pub use predictor::ClusterPredictor;
pub use repositories::{
    DeleteCascade, FavoriteRepository, PhoneCascade, RepoResult, TravelPlanRepository,
    UserRepository,
};
