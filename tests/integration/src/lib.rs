//! Integration test utilities for the travel matching service
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API backed by a stub prediction service.

pub mod helpers;
pub mod predictor;

pub use fixtures::*;
pub use helpers::*;
pub use predictor::StubPredictor;
