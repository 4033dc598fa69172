// Simulated medical query service for integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(StatusCode, &'static str),
    Raw(&'static str),
    Slow(Duration, Value),
}

#[derive(Clone)]
struct MockState {
    reply: Reply,
    received: Arc<Mutex<Vec<Value>>>,
}

pub struct MockServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockServer {
    /// Request bodies seen so far, in arrival order.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn query_handler(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.received.lock().unwrap().push(body);

    match state.reply {
        Reply::Json(value) => Json(value).into_response(),
        Reply::Status(code, text) => (code, text).into_response(),
        Reply::Raw(text) => ([(header::CONTENT_TYPE, "application/json")], text).into_response(),
        Reply::Slow(delay, value) => {
            tokio::time::sleep(delay).await;
            Json(value).into_response()
        }
    }
}

/// Serves `reply` on `/query` and `/api/query` of an ephemeral local port.
pub async fn spawn(reply: Reply) -> MockServer {
    init_tracing();

    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        reply,
        received: received.clone(),
    };

    let app = Router::new()
        .route("/query", post(query_handler))
        .route("/api/query", post(query_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockServer {
        base_url: format!("http://{addr}"),
        received,
    }
}

/// Answers one request with a 500 whose body is cut short, then hangs up.
pub async fn spawn_truncated_500() -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    init_tracing();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Drain the whole request so the client is not mid-write when we close.
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);
            if request_complete(&request) {
                break;
            }
        }

        socket
            .write_all(
                b"HTTP/1.1 500 Internal Server Error\r\n\
                  Content-Type: text/plain\r\n\
                  Content-Length: 100\r\n\r\nshort",
            )
            .await
            .unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}")
}

fn request_complete(raw: &[u8]) -> bool {
    let Some(end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&raw[..end]).to_ascii_lowercase();
    let length = head
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);
    raw.len() >= end + 4 + length
}

/// An address nothing is listening on.
pub fn closed_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
