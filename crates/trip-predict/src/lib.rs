//! # trip-predict
//!
//! Client for the externally hosted clustering model. Implements
//! [`trip_core::ClusterPredictor`] over `POST {base_url}/predict`.

mod client;
mod wire;

pub use client::HttpClusterPredictor;
pub use wire::{PredictRequest, PredictResponse};
