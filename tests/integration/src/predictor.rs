//! Stub of the external cluster prediction service
//!
//! Answers `POST /predict` with a configurable cluster, or fails on demand.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
struct StubState {
    cluster: AtomicI32,
    failing: AtomicBool,
    calls: AtomicUsize,
    last_request: Mutex<Option<Value>>,
}

/// Handle to a running prediction stub
pub struct StubPredictor {
    pub addr: SocketAddr,
    state: Arc<StubState>,
    _handle: JoinHandle<()>,
}

impl StubPredictor {
    /// Start a stub that assigns `cluster` to every plan
    pub async fn start(cluster: i32) -> Result<Self> {
        let state = Arc::new(StubState::default());
        state.cluster.store(cluster, Ordering::SeqCst);

        let app = Router::new()
            .route("/predict", post(predict))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn set_cluster(&self, cluster: i32) {
        self.state.cluster.store(cluster, Ordering::SeqCst);
    }

    /// Make every following call answer 500
    pub fn set_failing(&self, failing: bool) {
        self.state.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.state.calls.load(Ordering::SeqCst)
    }

    /// Body of the most recent prediction request
    pub fn last_request(&self) -> Option<Value> {
        self.state.last_request.lock().clone()
    }
}

async fn predict(
    State(state): State<Arc<StubState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.calls.fetch_add(1, Ordering::SeqCst);
    *state.last_request.lock() = Some(body);

    if state.failing.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "model offline" })),
        );
    }

    let cluster = state.cluster.load(Ordering::SeqCst);
    (
        StatusCode::OK,
        Json(json!({
            "assigned_cluster": cluster.to_string(),
            "user_data": null,
            "error": null,
        })),
    )
}
