//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers against a stub prediction
//! service and making authenticated HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use trip_api::{create_app, create_app_state};
use trip_common::AppConfig;

use crate::predictor::StubPredictor;

/// Fallback secret when the environment does not provide one
const TEST_JWT_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Prefix of every versioned API route
pub const API_PREFIX: &str = "/api/v1";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub predictor: StubPredictor,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server whose predictor assigns `cluster`
    pub async fn start(cluster: i32) -> Result<Self> {
        let predictor = StubPredictor::start(cluster).await?;
        let mut config = test_config()?;
        config.prediction.base_url = predictor.base_url();
        Self::start_with_config(config, predictor).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig, predictor: StubPredictor) -> Result<Self> {
        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        // Port 0 lets parallel tests each get a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            predictor,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{API_PREFIX}{path}", self.base_url())
    }

    fn authorized(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", format!("Bearer {token}"))
    }

    /// GET a path outside the versioned API, such as a health probe
    pub async fn get_raw(&self, path: &str) -> Result<Response> {
        let url = format!("{}{path}", self.base_url());
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.api_url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let request = Self::authorized(self.client.get(self.api_url(path)), token);
        Ok(request.send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.api_url(path)).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let request = Self::authorized(self.client.post(self.api_url(path)), token);
        Ok(request.json(body).send().await?)
    }

    /// Make a bodiless POST request with auth token
    pub async fn post_empty_auth(&self, path: &str, token: &str) -> Result<Response> {
        let request = Self::authorized(self.client.post(self.api_url(path)), token);
        Ok(request.send().await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let request = Self::authorized(self.client.patch(self.api_url(path)), token);
        Ok(request.json(body).send().await?)
    }

    /// Make a bodiless PUT request with auth token
    pub async fn put_auth(&self, path: &str, token: &str) -> Result<Response> {
        let request = Self::authorized(self.client.put(self.api_url(path)), token);
        Ok(request.send().await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        let request = Self::authorized(self.client.delete(self.api_url(path)), token);
        Ok(request.send().await?)
    }
}

/// Create a test configuration
///
/// Reads the environment (and `.env`), supplying a JWT secret and a generous
/// rate limit so parallel tests never trip it.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::from_lookup(|name| {
        std::env::var(name)
            .ok()
            .or_else(|| (name == "JWT_SECRET").then(|| TEST_JWT_SECRET.to_string()))
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    config.rate_limit.requests_per_second = 10_000;
    config.rate_limit.burst = 10_000;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

/// Assert the error code of a failed response
pub async fn assert_error_code(
    response: Response,
    expected_status: StatusCode,
    expected_code: &str,
) -> Result<()> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    let code = body["error"]["code"].as_str().unwrap_or_default();
    if code != expected_code {
        anyhow::bail!("Expected error code {expected_code}, got {code}. Body: {body}");
    }
    Ok(())
}
