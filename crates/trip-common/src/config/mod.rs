//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, IdConfig,
    JwtConfig, PredictionConfig, RateLimitConfig, ServerConfig, MAX_WORKER_ID, MIN_JWT_SECRET_LEN,
};
