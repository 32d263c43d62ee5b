//! Domain error types

mod domain_error;
mod prediction_error;

pub use domain_error::DomainError;
pub use prediction_error::PredictionError;
