//! Mock OTP gateway served by axum on an ephemeral port.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;

/// One request as the gateway saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct GatewayState {
    status: StatusCode,
    reply: String,
    delay: Duration,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct MockGateway {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockGateway {
    pub async fn start(status: StatusCode, reply: Value) -> Self {
        Self::start_raw(status, reply.to_string(), Duration::ZERO).await
    }

    pub async fn start_slow(status: StatusCode, reply: Value, delay: Duration) -> Self {
        Self::start_raw(status, reply.to_string(), delay).await
    }

    pub async fn start_raw(status: StatusCode, reply: String, delay: Duration) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = GatewayState {
            status,
            reply,
            delay,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/send-otp", post(send_otp))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock gateway");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock gateway crashed");
        });

        Self {
            url: format!("http://{}", addr),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn send_otp(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = serde_json::from_str(&body).unwrap_or(Value::String(body));

    state
        .requests
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (
        state.status,
        [(CONTENT_TYPE, "application/json")],
        state.reply.clone(),
    )
}
