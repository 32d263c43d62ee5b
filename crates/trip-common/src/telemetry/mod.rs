//! Telemetry and tracing setup

mod tracing_setup;

pub use tracing_setup::{
    try_init_tracing, try_init_tracing_with_config,
    TracingConfig, TracingError, DEFAULT_FILTER,
};
