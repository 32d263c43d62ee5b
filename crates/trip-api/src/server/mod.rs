//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use trip_common::{AppConfig, AppError, JwtService};
use trip_core::IdGenerator;
use trip_db::{
    create_pool, ensure_schema, PgFavoriteRepository, PgPool, PgTravelPlanRepository,
    PgUserRepository,
};
use trip_predict::HttpClusterPredictor;
use trip_service::{ServiceContext, ServiceContextBuilder};

use crate::middleware::{apply_common_layers, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Slack on top of the prediction timeout before a request is cut off
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(10);

/// Build the complete Axum application with all routes and middleware
///
/// Health routes skip rate limiting and CORS.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let request_timeout = config.prediction.timeout() + REQUEST_TIMEOUT_MARGIN;

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
        request_timeout,
    )?;
    let health = apply_common_layers(health_routes(), request_timeout);

    Ok(api.merge(health).with_state(state))
}

/// Wire repositories, the predictor and auth helpers into a service context
pub fn create_service_context(config: &AppConfig, pool: &PgPool) -> Result<ServiceContext, AppError> {
    let predictor = HttpClusterPredictor::from_config(&config.prediction)
        .map_err(|e| AppError::Config(e.to_string()))?;
    info!(endpoint = %predictor.endpoint(), "Prediction client configured");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));
    let id_generator = Arc::new(IdGenerator::new(config.ids.worker_id));

    ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .travel_plan_repo(Arc::new(PgTravelPlanRepository::new(pool.clone())))
        .favorite_repo(Arc::new(PgFavoriteRepository::new(pool.clone())))
        .predictor(Arc::new(predictor))
        .jwt_service(jwt_service)
        .id_generator(id_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = trip_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    ensure_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    let service_context = create_service_context(&config, &pool)?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!(%addr, "Starting HTTP server");

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
