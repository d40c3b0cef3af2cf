//! Mock generation platform for integration tests
//!
//! Stands in for the hosted model-serving API. Each instance is pinned
//! to one response mode, covering the shapes the real platform has been
//! observed returning.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header::CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// Response behavior for a mock instance
#[derive(Debug, Clone)]
pub enum ResponseMode {
    /// `{"image_base64": "..."}`
    NamedBase64(String),
    /// Top-level JSON byte array
    ByteArray(Vec<u8>),
    /// `{"data": [...]}` wrapping a byte array
    NestedData(Vec<u8>),
    /// `{"image": "..."}` wrapping an encoded payload
    NestedImage(String),
    /// Raw binary body, `application/octet-stream`
    Binary(Vec<u8>),
    /// `{"response": "..."}`
    Text(String),
    /// Arbitrary JSON document, verbatim
    Json(serde_json::Value),
    /// Fixed status with a plain-text body
    Status(u16, String),
}

/// Mock platform that returns one canned response shape
pub struct MockAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockAiState>,
}

struct MockAiState {
    mode: ResponseMode,
    request_count: AtomicU32,
    last_model: Mutex<Option<String>>,
    last_inputs: Mutex<Option<serde_json::Value>>,
}

impl MockAi {
    /// Start the mock server, returning immediately
    pub async fn start(mode: ResponseMode) -> anyhow::Result<Self> {
        let state = Arc::new(MockAiState {
            mode,
            request_count: AtomicU32::new(0),
            last_model: Mutex::new(None),
            last_inputs: Mutex::new(None),
        });

        let app = Router::new()
            .route("/{*model}", routing::post(handle_run))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the generation binding
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of model invocations received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Model path of the most recent invocation
    pub fn last_model(&self) -> Option<String> {
        self.state.last_model.lock().unwrap().clone()
    }

    /// Inputs document of the most recent invocation
    pub fn last_inputs(&self) -> Option<serde_json::Value> {
        self.state.last_inputs.lock().unwrap().clone()
    }
}

impl Drop for MockAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_run(
    State(state): State<Arc<MockAiState>>,
    Path(model): Path<String>,
    Json(inputs): Json<serde_json::Value>,
) -> Response {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    *state.last_model.lock().unwrap() = Some(model);
    *state.last_inputs.lock().unwrap() = Some(inputs);

    match &state.mode {
        ResponseMode::NamedBase64(encoded) => {
            Json(serde_json::json!({ "image_base64": encoded })).into_response()
        }
        ResponseMode::ByteArray(bytes) => Json(serde_json::json!(bytes)).into_response(),
        ResponseMode::NestedData(bytes) => {
            Json(serde_json::json!({ "data": bytes })).into_response()
        }
        ResponseMode::NestedImage(encoded) => {
            Json(serde_json::json!({ "image": encoded })).into_response()
        }
        ResponseMode::Binary(bytes) => Response::builder()
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(Body::from(bytes.clone()))
            .expect("valid response"),
        ResponseMode::Text(response) => {
            Json(serde_json::json!({ "response": response })).into_response()
        }
        ResponseMode::Json(value) => Json(value.clone()).into_response(),
        ResponseMode::Status(status, body) => (
            StatusCode::from_u16(*status).expect("valid status code"),
            body.clone(),
        )
            .into_response(),
    }
}
