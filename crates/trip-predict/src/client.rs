//! reqwest-backed cluster predictor

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, instrument, warn};

use trip_common::PredictionConfig;
use trip_core::{Cluster, ClusterPredictor, NormalizedTravelPlan, PredictionError};

use crate::wire::{PredictRequest, PredictResponse};

/// Calls `POST {base_url}/predict` once per plan, without retries
#[derive(Debug, Clone)]
pub struct HttpClusterPredictor {
    client: Client,
    endpoint: String,
}

impl HttpClusterPredictor {
    /// Build a predictor with its own connection pool
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PredictionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PredictionError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Build a predictor from application configuration
    pub fn from_config(config: &PredictionConfig) -> Result<Self, PredictionError> {
        Self::new(&config.base_url, config.timeout())
    }

    /// Reuse an existing client; its timeout applies to every call
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/predict", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn transport_error(e: &reqwest::Error) -> PredictionError {
    if e.is_timeout() {
        PredictionError::Timeout
    } else {
        PredictionError::Transport(e.to_string())
    }
}

#[async_trait]
impl ClusterPredictor for HttpClusterPredictor {
    #[instrument(skip(self, plan), fields(destination = %plan.destination))]
    async fn predict(&self, plan: &NormalizedTravelPlan) -> Result<Cluster, PredictionError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .json(&PredictRequest::from(plan))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Prediction request failed");
                transport_error(&e)
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| transport_error(&e))?;

        if !status.is_success() {
            warn!(status = %status, body = %text, "Prediction service returned an error status");
            return Err(PredictionError::ServiceStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let response: PredictResponse =
            serde_json::from_str(&text).map_err(|e| PredictionError::Decode(e.to_string()))?;

        match response.into_cluster() {
            Ok(cluster) => {
                debug!(cluster = %cluster, "Cluster assigned");
                Ok(cluster)
            }
            Err(e) => {
                warn!(error = %e, "Prediction response carried no usable cluster");
                Err(e)
            }
        }
    }
}
