//! Service layer error types

use thiserror::Error;
use trip_common::AppError;
use trip_core::DomainError;

/// Failure of a matching, favorites, or account use case
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Credential or token failure
    #[error(transparent)]
    App(AppError),

    /// The context builder was missing a collaborator
    #[error("Service context incomplete: {0} is required")]
    MissingDependency(&'static str),
}

impl ServiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => e.http_status(),
            Self::App(e) => e.status_code(),
            Self::MissingDependency(_) => 500,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::MissingDependency(_) => "SERVICE_MISCONFIGURED",
        }
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        // Keep domain failures classified as domain failures
        match err {
            AppError::Domain(e) => Self::Domain(e),
            other => Self::App(other),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
