//! Errors raised outside the domain: credentials, tokens, and process startup

use trip_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Login and bearer tokens
    #[error("Email or password is incorrect")]
    InvalidCredentials,

    #[error("Access token is invalid")]
    InvalidToken,

    #[error("Access token has expired")]
    TokenExpired,

    /// Argon2 or JWT signing failed; never caused by the caller
    #[error("Credential processing failed: {0}")]
    Credential(String),

    // Startup
    #[error("Database unavailable: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCredentials | Self::InvalidToken | Self::TokenExpired => 401,
            Self::Credential(_) | Self::Database(_) | Self::Config(_) => 500,
            Self::Domain(e) => e.http_status(),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Credential(_) => "CREDENTIAL_FAILURE",
            Self::Database(_) => "DATABASE_UNAVAILABLE",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// Result type alias for credential and startup operations
pub type AppResult<T> = Result<T, AppError>;
